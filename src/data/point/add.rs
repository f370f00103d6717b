use crate::data::{Point, Vector};
use crate::HullScalar;
use array_init::array_init;
use std::ops::Add;
use std::ops::AddAssign;

// &point + &vector = point
impl<'a, 'b, T: HullScalar> Add<&'a Vector<T>> for &'b Point<T> {
  type Output = Point<T>;

  fn add(self: &'b Point<T>, other: &'a Vector<T>) -> Self::Output {
    Point {
      array: array_init(|i| self.array[i] + other.0[i]),
    }
  }
}

// point + vector = point
impl<T: HullScalar> Add<Vector<T>> for Point<T> {
  type Output = Point<T>;

  fn add(self: Point<T>, other: Vector<T>) -> Self::Output {
    &self + &other
  }
}

// point += &vector
impl<T: HullScalar> AddAssign<&Vector<T>> for Point<T> {
  fn add_assign(&mut self, other: &Vector<T>) {
    *self = &*self + other;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn translate() {
    let mut pt = Point::new([1, -2]);
    let offset = Vector([10, 20]);
    assert_eq!(&pt + &offset, Point::new([11, 18]));
    pt += &offset;
    assert_eq!(pt, Point::new([11, 18]));
  }
}
