use array_init::array_init;
use std::ops::Sub;

use crate::data::{Point, Vector};
use crate::HullScalar;

// point - point = vector
impl<'a, 'b, T: HullScalar> Sub<&'a Point<T>> for &'b Point<T> {
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector(array_init(|i| self.array[i] - other.array[i]))
  }
}

impl<T: HullScalar> Sub<Point<T>> for Point<T> {
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}
