//! An ordered, mutable buffer of 2D points.
//!
//! A [`PointBuffer`] holds the control points fed to the spline tessellator
//! and the vertex lists handed to a rasterizer. It exclusively owns its
//! storage; cloning a buffer copies the points, and no operation aliases
//! storage between buffers.
//!
//! Out-of-range accesses report [`TessError::OutOfRange`] instead of
//! silently returning a sentinel, so a caller cannot mistake a dropped
//! mutation for a successful one.

use serde::{Deserialize, Serialize};

use crate::data::point::Point;
use crate::error::{TessError, TessResult};

/// An ordered, indexable collection of [`Point`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a buffer by copying every point from a slice.
    /// An empty slice yields an empty buffer.
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Number of points currently stored
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the buffer holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the point at `index`, or `OutOfRange` if `index >= len`
    pub fn get(&self, index: usize) -> TessResult<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(TessError::OutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Append a point to the end of the buffer
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Insert a point at `index`, shifting subsequent points.
    /// Valid for `index` in `[0, len]`; inserting at `len` appends.
    pub fn insert(&mut self, point: Point, index: usize) -> TessResult<()> {
        if index > self.points.len() {
            return Err(TessError::OutOfRange {
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Remove and return the point at `index`, shifting subsequent points.
    /// Valid for `index` in `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> TessResult<Point> {
        if index >= self.points.len() {
            return Err(TessError::OutOfRange {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Return a new buffer holding the same points in reverse order.
    /// The original buffer is left unmodified.
    pub fn reversed(&self) -> PointBuffer {
        PointBuffer {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Read-only view of the underlying points
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the stored points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for PointBuffer {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl Extend<Point> for PointBuffer {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
