// This module contains strategies for:
//  * points
//  * point sets with a designated anchor
// and a brute-force reference hull.
use crate::algorithms::convex_hull::graham_scan::pivot_index;
use crate::data::Point;
use crate::{HullScalar, Orientation};

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::collections::BTreeSet;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T> Arbitrary for Point<T>
where
  T: Arbitrary + HullScalar,
{
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    let new: fn([T; 2]) -> Point<T> = Point::new;
    any_with::<[T; 2]>(params).prop_map(new)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Small coordinates make colinear triples and duplicates common.
pub fn small_point(bound: i32) -> impl Strategy<Value = Point<i32>> {
  (-bound..=bound, -bound..=bound).prop_map(|(x, y)| Point::new([x, y]))
}

// Coordinates clustered at the ends of the i8 range and around zero.
pub fn extreme_i8_point() -> impl Strategy<Value = Point<i8>> {
  let coord = || {
    prop_oneof![
      Just(i8::MIN),
      Just(i8::MAX),
      Just(0_i8),
      Just(1_i8),
      Just(-1_i8),
      any::<i8>(),
    ]
  };
  (coord(), coord()).prop_map(|(x, y)| Point::new([x, y]))
}

fn anchor_first<const N: usize>(mut pts: [Point<i8>; N]) -> [Point<i8>; N] {
  if let Some(idx) = pivot_index(&pts) {
    pts.swap(0, idx);
  }
  pts
}

// The first point is the lowest-then-leftmost of the three.
pub fn upper_half_triple() -> impl Strategy<Value = [Point<i8>; 3]> {
  any::<[Point<i8>; 3]>().prop_map(anchor_first)
}

pub fn upper_half_quad() -> impl Strategy<Value = [Point<i8>; 4]> {
  any::<[Point<i8>; 4]>().prop_map(anchor_first)
}

/// The origin, a copy of it, and `1..=k` multiples of five directions whose
/// farthest points form a strictly convex hexagon with the origin.
pub fn colinear_rays(k: i32) -> Vec<Point<i32>> {
  let directions = [(1, 0), (2, 1), (1, 2), (-1, 2), (-1, 1)];
  let mut pts = vec![Point::new([0, 0]), Point::new([0, 0])];
  for (dx, dy) in directions {
    for i in 1..=k {
      pts.push(Point::new([dx * i, dy * i]));
    }
  }
  pts
}

///////////////////////////////////////////////////////////////////////////////
// Reference hull

/// $O(n^3)$ Vertices of the convex hull.
///
/// `a -> b` is a hull edge if every point is strictly to its left or on the
/// closed segment between `a` and `b`. The vertices are the endpoints of hull
/// edges.
pub fn naive_hull<T: HullScalar>(pts: &[Point<T>]) -> BTreeSet<Point<T>> {
  let distinct: BTreeSet<Point<T>> = pts.iter().copied().collect();
  let mut vertices = BTreeSet::new();
  for a in &distinct {
    for b in &distinct {
      if a == b {
        continue;
      }
      let is_edge = distinct.iter().all(|c| match a.orientation(b, c) {
        Orientation::CounterClockWise => true,
        Orientation::ClockWise => false,
        Orientation::CoLinear => on_segment(a, b, c),
      });
      if is_edge {
        vertices.insert(*a);
        vertices.insert(*b);
      }
    }
  }
  if distinct.len() == 1 {
    vertices.extend(distinct);
  }
  vertices
}

// `c` is assumed to be colinear with `a` and `b`.
fn on_segment<T: HullScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> bool {
  let within = |i: usize| a[i].min(b[i]) <= c[i] && c[i] <= a[i].max(b[i]);
  within(0) && within(1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn naive_square() {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([2, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
      Point::new([1, 1]),
    ];
    let expected: BTreeSet<Point<i32>> = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
    ]
    .into_iter()
    .collect();
    assert_eq!(naive_hull(&pts), expected);
  }

  #[test]
  fn naive_segment() {
    let pts = vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([3, 3])];
    assert_eq!(naive_hull(&pts).len(), 2);
  }
}
