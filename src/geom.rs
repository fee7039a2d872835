//! Points and line segments in the plane
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// A point in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The point offset by `(dx, dy)`
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two points. The endpoints are not ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Segment {
    pub src: Point,
    pub dst: Point,
}

impl Segment {
    #[inline]
    pub fn new(src: Point, dst: Point) -> Self {
        Segment { src, dst }
    }

    /// The same segment with its endpoints swapped
    #[inline]
    pub fn reversed(self) -> Self {
        Segment {
            src: self.dst,
            dst: self.src,
        }
    }

    /// The segment with `src` holding the smaller (or equal) x-coordinate
    ///
    /// # Example
    ///
    /// ```
    /// use buffon::geom::{Point, Segment};
    ///
    /// let seg = Segment::new(Point::new(3.0, 0.0), Point::new(1.0, 2.0));
    /// let norm = seg.normalized();
    ///
    /// assert_eq!(norm.src, Point::new(1.0, 2.0));
    /// assert_eq!(norm.dst, Point::new(3.0, 0.0));
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        if self.src.x <= self.dst.x {
            self
        } else {
            self.reversed()
        }
    }

    /// Horizontal extent as `(x_min, x_max)`
    #[inline]
    pub fn x_span(&self) -> (f64, f64) {
        let norm = self.normalized();
        (norm.src.x, norm.dst.x)
    }

    pub fn length(&self) -> f64 {
        let dx = self.dst.x - self.src.x;
        let dy = self.dst.y - self.src.y;
        dx.hypot(dy)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.src, self.dst)
    }
}
