use claims::debug_assert_ok;
use std::ops::Deref;

use crate::data::{Point, PointLocation};
use crate::{Error, HullScalar, Orientation};

/// A strictly convex polygon.
///
/// Vertices are stored counter-clockwise, starting at the lowest (then
/// leftmost) vertex. No three consecutive vertices are colinear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonConvex<T> {
  vertices: Vec<Point<T>>,
}

///////////////////////////////////////////////////////////////////////////////
// PolygonConvex

impl<T> PolygonConvex<T>
where
  T: HullScalar,
{
  /// $O(1)$ Assume that the vertices form a convex polygon.
  ///
  /// The vertices have to be strictly convex, listed counter-clockwise and
  /// start at the lowest-then-leftmost vertex. Checked in debug builds only.
  pub fn new_unchecked(vertices: Vec<Point<T>>) -> PolygonConvex<T> {
    let convex = PolygonConvex { vertices };
    debug_assert_ok!(convex.validate());
    convex
  }

  /// The lowest-then-leftmost vertex.
  pub fn anchor(&self) -> &Point<T> {
    &self.vertices[0]
  }

  /// Vertices in clockwise order, starting at the anchor.
  ///
  /// ```rust
  /// # use graham_hull::convex_hull;
  /// # use graham_hull::data::Point;
  /// let hull = convex_hull(vec![
  ///   Point::new([0, 0]),
  ///   Point::new([2, 0]),
  ///   Point::new([0, 2]),
  /// ]).unwrap();
  /// let cw: Vec<_> = hull.iter_cw().copied().collect();
  /// assert_eq!(cw, vec![Point::new([0, 0]), Point::new([0, 2]), Point::new([2, 0])]);
  /// ```
  pub fn iter_cw(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.vertices[..1]
      .iter()
      .chain(self.vertices[1..].iter().rev())
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.vertices.len();
    if n < 3 {
      return Err(Error::InsufficientPoints(n));
    }
    for i in 0..n {
      let prev = &self.vertices[(i + n - 1) % n];
      let next = &self.vertices[(i + 1) % n];
      if !prev.orientation(&self.vertices[i], next).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    // Local left turns alone admit polygons that wind more than once.
    let origin = &self.vertices[0];
    for pair in self.vertices[1..].windows(2) {
      if !origin.orientation(&pair[0], &pair[1]).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(\log n)$ Locate a point relative to the polygon.
  ///
  /// Binary search for the fan triangle around the anchor whose wedge holds
  /// `pt`, then classify `pt` against that triangle.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let vertices = &self.vertices;
    let last = vertices.len() - 1;
    let p0 = &vertices[0];
    let mut lower = 1;
    let mut upper = last;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if p0.orientation(&vertices[middle], pt) == Orientation::CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    let p1 = &vertices[lower];
    let p2 = &vertices[upper];
    if pt == p0 || pt == p1 || pt == p2 {
      return PointLocation::OnBoundary;
    }
    // (edge orientation, edge lies on the polygon boundary)
    let edges = [
      (p0.orientation(p1, pt), lower == 1),
      (p1.orientation(p2, pt), true),
      (p2.orientation(p0, pt), upper == last),
    ];
    if edges.iter().any(|(orient, _)| orient.is_cw()) {
      PointLocation::Outside
    } else if edges
      .iter()
      .any(|(orient, boundary)| orient.is_colinear() && *boundary)
    {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Trait Implementations

impl<T> Deref for PolygonConvex<T> {
  type Target = [Point<T>];
  fn deref(&self) -> &Self::Target {
    &self.vertices
  }
}

impl<T> From<PolygonConvex<T>> for Vec<Point<T>> {
  fn from(convex: PolygonConvex<T>) -> Vec<Point<T>> {
    convex.vertices
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
