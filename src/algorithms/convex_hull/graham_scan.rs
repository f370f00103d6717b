use crate::data::{Point, PolygonConvex};
use crate::{Error, HullScalar};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid convex polygons.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// The points are sorted counter-clockwise around the lowest (then leftmost)
/// point, runs of points at the same angle are reduced to the farthest one,
/// and a stack sweep discards every point that does not make a left turn.
///
/// # Errors
/// * [`Error::InsufficientPoints`] if fewer than three points are given.
/// * [`Error::DegenerateInput`] if fewer than three distinct points remain
///   once points at the same angle have been merged, ie. all points are
///   colinear.
///
/// # Properties
/// * No points from the input set will be outside the returned convex polygon.
/// * All vertices in the convex polygon are from the input set.
/// * The lowest (then leftmost) input point is the first vertex.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// # use graham_hull::Error;
/// let pts = vec![
///   Point::new([0, 3]), Point::new([1, 1]), Point::new([2, 2]), Point::new([4, 4]),
///   Point::new([0, 0]), Point::new([1, 2]), Point::new([3, 1]), Point::new([3, 3]),
/// ];
/// let hull = convex_hull(pts).unwrap();
/// let cw: Vec<Point<i32>> = hull.iter_cw().copied().collect();
/// assert_eq!(cw, vec![
///   Point::new([0, 0]), Point::new([0, 3]), Point::new([4, 4]), Point::new([3, 1]),
/// ]);
/// ```
///
/// ```rust
/// # use graham_hull::algorithms::convex_hull;
/// # use graham_hull::data::Point;
/// # use graham_hull::Error;
/// let line = vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([2, 2]), Point::new([3, 3])];
/// assert_eq!(convex_hull(line).err(), Some(Error::DegenerateInput(2)));
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<PolygonConvex<T>, Error>
where
  T: HullScalar,
{
  let n = pts.len();
  if n < 3 {
    return Err(Error::InsufficientPoints(n));
  }
  let pivot = pivot_index(&pts).ok_or(Error::InsufficientPoints(n))?;
  pts.swap(0, pivot);
  let anchor = pts[0];
  log::debug!("graham scan: {} points, anchor {}", n, anchor);

  pts[1..].sort_unstable_by(|a, b| anchor.ccw_cmp_around(a, b));
  compact_colinear(&mut pts);
  log::trace!("{} points left after colinear compaction", pts.len());
  if pts.len() < 3 {
    return Err(Error::DegenerateInput(pts.len()));
  }

  let hull = scan(&pts);
  log::debug!("convex hull has {} vertices", hull.len());
  Ok(PolygonConvex::new_unchecked(hull))
}

/// $O(n)$ Index of the lowest point, ties broken by the smallest x coordinate.
///
/// Returns `None` for an empty slice.
pub fn pivot_index<T>(pts: &[Point<T>]) -> Option<usize>
where
  T: HullScalar,
{
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| (pt.y_coord(), pt.x_coord()))
    .map(|(idx, _)| idx)
}

// Keep only the last point of every run of points that are colinear with the
// anchor at pts[0]. With the nearest-first tie-break of the angular sort, the
// survivor of each run is the point farthest from the anchor.
fn compact_colinear<T>(pts: &mut Vec<Point<T>>)
where
  T: HullScalar,
{
  let n = pts.len();
  if n < 2 {
    return;
  }
  let anchor = pts[0];
  let mut write_idx = 1;
  let mut read_idx = 1;
  while read_idx < n {
    while read_idx + 1 < n && anchor.orientation(&pts[read_idx], &pts[read_idx + 1]).is_colinear()
    {
      read_idx += 1;
    }
    pts[write_idx] = pts[read_idx];
    write_idx += 1;
    read_idx += 1;
  }
  pts.truncate(write_idx);
}

// Sweep the sorted and compacted points. The stack always turns left from
// bottom to top; a point that would make a right turn or go straight is
// popped.
fn scan<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: HullScalar,
{
  debug_assert!(pts.len() >= 3);
  let mut stack: Vec<Point<T>> = Vec::with_capacity(pts.len());
  stack.extend_from_slice(&pts[..3]);
  for pt in &pts[3..] {
    while stack.len() >= 2 {
      let top = stack.len() - 1;
      if stack[top - 1].orientation(&stack[top], pt).is_ccw() {
        break;
      }
      log::trace!("popping {}", stack[top]);
      stack.pop();
    }
    stack.push(*pt);
  }
  stack
}
