//! Evenly spaced vertical grid lines and the needle crossing test
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::geom::Segment;
use std::fmt;

/// A set of evenly spaced vertical lines at `x = i * spacing` for
/// `i = 0, 1, ..., n_lines - 1`.
///
/// # Example
///
/// ```
/// use buffon::geom::{Point, Segment};
/// use buffon::grid::Grid;
///
/// let grid = Grid::new(10.0, 4).unwrap();
/// assert_eq!(grid.lines(), &[0.0, 10.0, 20.0, 30.0]);
///
/// let seg = Segment::new(Point::new(12.0, 0.0), Point::new(8.0, 1.0));
/// assert!(grid.crosses(seg));
///
/// let seg = Segment::new(Point::new(12.0, 0.0), Point::new(18.0, 1.0));
/// assert!(!grid.crosses(seg));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Grid {
    spacing: f64,
    lines: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GridError {
    /// The spacing is less than or equal to zero
    SpacingTooLow { spacing: f64 },
    /// The spacing is infinite or NaN
    SpacingNotFinite { spacing: f64 },
    /// The grid has no lines
    NoLines,
    /// The width to span is less than or equal to zero or not finite
    InvalidWidth { width: f64 },
}

impl Grid {
    /// Create a grid of `n_lines` lines, `spacing` apart, starting at zero
    pub fn new(spacing: f64, n_lines: usize) -> Result<Self, GridError> {
        if !spacing.is_finite() {
            Err(GridError::SpacingNotFinite { spacing })
        } else if spacing <= 0.0 {
            Err(GridError::SpacingTooLow { spacing })
        } else if n_lines == 0 {
            Err(GridError::NoLines)
        } else {
            Ok(Grid::new_unchecked(spacing, n_lines))
        }
    }

    /// Creates a new Grid without checking whether the parameters are
    /// valid.
    pub fn new_unchecked(spacing: f64, n_lines: usize) -> Self {
        let lines = (0..n_lines).map(|i| i as f64 * spacing).collect();
        Grid { spacing, lines }
    }

    /// A grid spanning `[0, width]` with `n_gaps` equal gaps, i.e. with
    /// `n_gaps + 1` lines, the last one exactly at `width`.
    ///
    /// # Example
    ///
    /// ```
    /// use buffon::grid::Grid;
    ///
    /// let grid = Grid::spanning(600.0, 11).unwrap();
    /// assert_eq!(grid.n_lines(), 12);
    /// assert_eq!(grid.lines()[11], 600.0);
    /// ```
    pub fn spanning(width: f64, n_gaps: usize) -> Result<Self, GridError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GridError::InvalidWidth { width });
        }
        if n_gaps == 0 {
            return Err(GridError::NoLines);
        }

        let spacing = width / n_gaps as f64;
        let mut grid = Grid::new_unchecked(spacing, n_gaps + 1);
        // avoid accumulated rounding on the last line
        grid.lines[n_gaps] = width;
        Ok(grid)
    }

    /// Distance between adjacent lines
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The line x-coordinates in increasing order
    #[inline]
    pub fn lines(&self) -> &[f64] {
        &self.lines
    }

    #[inline]
    pub fn n_lines(&self) -> usize {
        self.lines.len()
    }

    /// The x-coordinate of the first line, in increasing order, that the
    /// segment touches or crosses. Touching an endpoint counts.
    pub fn first_crossing(&self, segment: Segment) -> Option<f64> {
        let seg = segment.normalized();
        let (lo, hi) = (seg.src.x, seg.dst.x);
        self.lines
            .iter()
            .copied()
            .find(|&line| lo <= line && line <= hi)
    }

    /// Returns `true` if the segment's horizontal span contains at least
    /// one grid line. The segment is taken by value; callers keep their
    /// copy with its endpoint order unchanged.
    #[inline]
    pub fn crosses(&self, segment: Segment) -> bool {
        self.first_crossing(segment).is_some()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(lines: {}, spacing: {})", self.n_lines(), self.spacing)
    }
}

impl std::error::Error for GridError {}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpacingTooLow { spacing } => {
                write!(f, "spacing ({spacing}) must be greater than zero")
            }
            Self::SpacingNotFinite { spacing } => {
                write!(f, "non-finite spacing: {spacing}")
            }
            Self::NoLines => write!(f, "a grid must have at least one line"),
            Self::InvalidWidth { width } => {
                write!(f, "width ({width}) must be finite and positive")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use crate::test_basic_impls;
    use proptest::prelude::*;

    fn seg(x0: f64, x1: f64) -> Segment {
        Segment::new(Point::new(x0, 0.0), Point::new(x1, 1.0))
    }

    test_basic_impls!(Grid::new(1.0, 3).unwrap());

    #[test]
    fn new() {
        let grid = Grid::new(2.5, 3).unwrap();
        assert_eq!(grid.spacing(), 2.5);
        assert_eq!(grid.lines(), &[0.0, 2.5, 5.0]);
    }

    #[test]
    fn new_rejects_bad_spacing() {
        assert_eq!(
            Grid::new(0.0, 3),
            Err(GridError::SpacingTooLow { spacing: 0.0 })
        );
        assert!(Grid::new(-1.0, 3).is_err());
        assert!(Grid::new(f64::INFINITY, 3).is_err());
        assert!(Grid::new(f64::NAN, 3).is_err());
    }

    #[test]
    fn new_rejects_no_lines() {
        assert_eq!(Grid::new(1.0, 0), Err(GridError::NoLines));
    }

    #[test]
    fn spanning_reference_board() {
        let grid = Grid::spanning(600.0, 11).unwrap();
        assert_eq!(grid.n_lines(), 12);
        assert::close(grid.spacing(), 600.0 / 11.0, 1E-12);
        assert_eq!(grid.lines()[0], 0.0);
        assert_eq!(grid.lines()[11], 600.0);
        assert!(grid.lines().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn spanning_rejects_bad_inputs() {
        assert!(Grid::spanning(0.0, 11).is_err());
        assert!(Grid::spanning(f64::NAN, 11).is_err());
        assert_eq!(Grid::spanning(600.0, 0), Err(GridError::NoLines));
    }

    #[test]
    fn segment_left_of_grid_does_not_cross() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert!(!grid.crosses(seg(-5.0, -0.1)));
    }

    #[test]
    fn segment_right_of_grid_does_not_cross() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert!(!grid.crosses(seg(40.1, 45.0)));
    }

    #[test]
    fn segment_between_lines_does_not_cross() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert!(!grid.crosses(seg(11.0, 19.0)));
        assert!(!grid.crosses(seg(19.0, 11.0)));
    }

    #[test]
    fn touching_a_line_counts_as_crossing() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert!(grid.crosses(seg(10.0, 15.0)));
        assert!(grid.crosses(seg(5.0, 10.0)));
        assert!(grid.crosses(seg(15.0, 10.0)));
    }

    #[test]
    fn vertical_segment_on_a_line_crosses() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert!(grid.crosses(seg(20.0, 20.0)));
        assert!(!grid.crosses(seg(21.0, 21.0)));
    }

    #[test]
    fn first_crossing_reports_lowest_line() {
        let grid = Grid::new(10.0, 5).unwrap();
        assert_eq!(grid.first_crossing(seg(35.0, 8.0)), Some(10.0));
        assert_eq!(grid.first_crossing(seg(41.0, 48.0)), None);
    }

    #[test]
    fn crosses_does_not_reorder_callers_segment() {
        let grid = Grid::new(10.0, 5).unwrap();
        let s = seg(15.0, 5.0);
        assert!(grid.crosses(s));
        assert_eq!(s.src.x, 15.0);
        assert_eq!(s.dst.x, 5.0);
    }

    proptest! {
        #[test]
        fn crossing_is_symmetric_in_endpoints(
            x0 in -20.0..120.0_f64,
            x1 in -20.0..120.0_f64,
            spacing in 0.5..30.0_f64,
            n_lines in 1_usize..10,
        ) {
            let grid = Grid::new(spacing, n_lines).unwrap();
            let s = seg(x0, x1);
            prop_assert_eq!(grid.crosses(s), grid.crosses(s.reversed()));
        }

        #[test]
        fn segments_outside_the_grid_never_cross(
            start in 0.01..50.0_f64,
            len in 0.0..50.0_f64,
            spacing in 0.5..30.0_f64,
            n_lines in 1_usize..10,
        ) {
            let grid = Grid::new(spacing, n_lines).unwrap();
            let last = grid.lines()[n_lines - 1];

            let left = seg(-start, -start - len);
            let right = seg(last + start, last + start + len);

            prop_assert!(!grid.crosses(left));
            prop_assert!(!grid.crosses(right));
        }

        #[test]
        fn endpoint_on_a_line_always_crosses(
            ix in 0_usize..10,
            other in -50.0..350.0_f64,
            spacing in 0.5..30.0_f64,
        ) {
            let grid = Grid::new(spacing, 10).unwrap();
            let line = grid.lines()[ix];
            prop_assert!(grid.crosses(seg(line, other)));
            prop_assert!(grid.crosses(seg(other, line)));
        }
    }
}
