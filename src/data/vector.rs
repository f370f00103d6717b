use array_init::array_init;
use std::ops::Neg;

use crate::HullScalar;

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: HullScalar + Neg<Output = T>> Neg for Vector<T> {
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    Vector(array_init(|i| -self.0[i]))
  }
}
