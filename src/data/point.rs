use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use num_traits::Zero;

use crate::{cross, HullScalar, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: HullScalar> Point<T> {
  /// Both coordinates converted to the overflow-free wide type.
  pub fn widen(&self) -> [T::Wide; 2] {
    [self.array[0].widen(), self.array[1].widen()]
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> T::Wide {
    let [ax, ay] = self.widen();
    let [bx, by] = rhs.widen();
    let dx = ax - bx;
    let dy = ay - by;
    dx.clone() * dx + dy.clone() * dy
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .cmp(&self.squared_euclidean_distance(q))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  /// Counter-clockwise angular order of `p` and `q` around `self`. Points at
  /// the same angle are ordered by distance, nearest first.
  ///
  /// This is a total order as long as no point lies strictly below `self`, or
  /// at the same height and to its left. The lowest-then-leftmost point of a
  /// set satisfies this for every other point of the set.
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// # use std::cmp::Ordering;
  /// let anchor = Point::new([0, 0]);
  /// assert_eq!(anchor.ccw_cmp_around(&Point::new([5, 1]), &Point::new([1, 5])), Ordering::Less);
  /// assert_eq!(anchor.ccw_cmp_around(&Point::new([2, 2]), &Point::new([1, 1])), Ordering::Greater);
  /// ```
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    match cross(self, p, q).cmp(&<T::Wide as Zero>::zero()) {
      Ordering::Less => Ordering::Less,
      Ordering::Greater => Ordering::Greater,
      Ordering::Equal => self.cmp_distance_to(p, q),
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

mod add;
mod sub;
