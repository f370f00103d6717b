use std::cmp::Ordering;

use num_traits::Zero;

use crate::data::Point;
use crate::HullScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// Signed turn of the walk `a -> b -> c`:
///
/// `(c.x - a.x)(b.y - a.y) - (b.x - a.x)(c.y - a.y)`
///
/// Positive for a clockwise (right) turn, negative for a counter-clockwise
/// (left) turn and zero when the points are colinear. Computed in
/// [`HullScalar::Wide`], so it never overflows.
///
/// ```rust
/// # use graham_hull::cross;
/// # use graham_hull::data::Point;
/// let a = Point::new([0, 0]);
/// let b = Point::new([0, 1]);
/// assert!(cross(&a, &b, &Point::new([1, 2])) > 0_i128);
/// assert!(cross(&a, &b, &Point::new([-1, 2])) < 0_i128);
/// assert_eq!(cross(&a, &b, &Point::new([0, 5])), 0_i128);
/// ```
pub fn cross<T: HullScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T::Wide {
  let [ax, ay] = a.widen();
  let [bx, by] = b.widen();
  let [cx, cy] = c.widen();
  (cx - ax.clone()) * (by - ay.clone()) - (bx - ax) * (cy - ay)
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use graham_hull::data::Point;
  /// # use graham_hull::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T: HullScalar>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    match cross(p1, p2, p3).cmp(&<T::Wide as Zero>::zero()) {
      Ordering::Greater => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Less => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}
