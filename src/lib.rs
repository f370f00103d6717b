#![deny(clippy::cast_lossless)]
//! Exact convex hulls of integer point sets.
//!
//! The hull is computed with [Graham's scan](algorithms::convex_hull). Every
//! turn test and distance comparison is carried out in a wider integer type
//! (see [`HullScalar`]) so results are exact for the full range of the
//! coordinate type.
//!
//! ```rust
//! use graham_hull::convex_hull;
//! use graham_hull::data::Point;
//!
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([2, 1]),
//!   Point::new([0, 4]),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(hull.len(), 3);
//! ```
use num_bigint::BigInt;
use num_traits::{NumOps, Zero};
use std::fmt::{Debug, Display};

pub mod algorithms;
pub mod data;
mod orientation;

pub use algorithms::convex_hull;
pub use orientation::{cross, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("at least three points are required, got {0}")]
  InsufficientPoints(usize),
  /// Fewer than three points survived colinear compaction. The payload is the
  /// number of survivors, anchor included.
  #[error("all points are colinear ({0} distinct point(s) left after compaction)")]
  DegenerateInput(usize),
  /// Two consecutive edges are either colinear or oriented clockwise.
  #[error("consecutive vertices do not turn counter-clockwise")]
  ConvexViolation,
}

/// Integer coordinate type.
///
/// `Wide` is large enough to hold any cross product or squared distance of
/// two coordinate differences without overflowing:
///
/// | coordinate | wide     |
/// |------------|----------|
/// | `i8`       | `i32`    |
/// | `i16`      | `i64`    |
/// | `i32`      | `i128`   |
/// | `i64`      | `BigInt` |
pub trait HullScalar: Copy + Ord + NumOps + Debug + Display {
  type Wide: Clone + Ord + Zero + NumOps + Debug;

  fn widen(self) -> Self::Wide;
}

macro_rules! fixed_precision {
  ( $ty:ty, $wide:ty ) => {
    impl HullScalar for $ty {
      type Wide = $wide;
      fn widen(self) -> $wide {
        <$wide>::from(self)
      }
    }
  };
}

fixed_precision!(i8, i32);
fixed_precision!(i16, i64);
fixed_precision!(i32, i128);
fixed_precision!(i64, BigInt);

#[cfg(test)]
pub mod testing;
