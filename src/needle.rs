//! Randomly placed, randomly rotated needles
//!
//! Needle directions come from a [`Rotation`]. The default,
//! [`Rotation::Table`], avoids trigonometric functions entirely: it picks a
//! point from a precomputed table of points on the unit quarter-circle whose
//! x-coordinates are evenly spaced on `[0, 1]`. Because x is sampled
//! linearly rather than the angle, the needle angles are not uniform; the
//! mean horizontal extent of a unit needle is 1/2 rather than 2/π.
//! [`Rotation::UniformAngle`] draws the angle uniformly instead.
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TABLE_SIZE;
use crate::geom::{Point, Segment};
use crate::misc::sqrt;
use crate::result::{self, ErrorKind};
use crate::traits::Sampleable;
use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// Points on the unit quarter-circle, `x² + y² = 1` with `x, y >= 0`, with
/// x swept linearly from 0 to 1. Built once and shared between clones.
///
/// # Example
///
/// ```
/// use buffon::needle::QuarterCircle;
///
/// let table = QuarterCircle::new(5).unwrap();
/// assert_eq!(table.len(), 5);
///
/// let (x, y) = table.points()[2];
/// assert_eq!(x, 0.5);
/// assert!((x * x + y * y - 1.0).abs() < 1E-6);
///
/// assert_eq!(table.points()[4], (1.0, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuarterCircle {
    points: Arc<[(f64, f64)]>,
}

impl QuarterCircle {
    /// Build a table of `n` points. Each y is computed with the Newton
    /// square root; `n` must be at least 2 so that both x = 0 and x = 1 are
    /// present.
    pub fn new(n: usize) -> result::Result<Self> {
        if n < 2 {
            return Err(result::Error::new(
                ErrorKind::InvalidArgument,
                format!("quarter-circle table needs at least 2 points, got {n}")
                    .as_str(),
            ));
        }

        let step = (n - 1) as f64;
        let points = (0..n)
            .map(|i| {
                let x = i as f64 / step;
                sqrt(1.0 - x * x).map(|y| (x, y))
            })
            .collect::<result::Result<Vec<_>>>()?;

        Ok(QuarterCircle {
            points: points.into(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Mean x-coordinate over the table. This is the expected horizontal
    /// extent of a unit needle drawn from the table.
    pub fn mean_x(&self) -> f64 {
        self.points.iter().map(|(x, _)| x).sum::<f64>() / self.len() as f64
    }
}

impl Sampleable<(f64, f64)> for QuarterCircle {
    fn draw<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        self.points[rng.gen_range(0..self.len())]
    }
}

/// How a needle's direction is chosen. Both policies produce directions in
/// the upper half-plane (`y >= 0`); crossing a vertical line depends only
/// on the horizontal extent, which is unchanged by a vertical flip.
#[derive(Clone, Debug, PartialEq)]
pub enum Rotation {
    /// A random entry of the quarter-circle table, reflected left or right
    /// with equal probability
    Table(QuarterCircle),
    /// An angle drawn uniformly from `[0, π)`
    UniformAngle,
}

impl Rotation {
    /// Table based rotation with the default table size
    pub fn table() -> result::Result<Self> {
        QuarterCircle::new(DEFAULT_TABLE_SIZE).map(Rotation::Table)
    }

    /// Expected `|dx|` of a unit-length direction drawn from this policy
    pub fn mean_horizontal_extent(&self) -> f64 {
        match self {
            Rotation::Table(table) => table.mean_x(),
            Rotation::UniformAngle => 2.0 / PI,
        }
    }
}

impl Sampleable<(f64, f64)> for Rotation {
    /// Draw a unit direction `(dx, dy)` with `dy >= 0`
    fn draw<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        match self {
            Rotation::Table(table) => {
                let (x, y) = table.draw(rng);
                let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                (sign * x, y)
            }
            Rotation::UniformAngle => {
                let theta = rng.sample(rand_distr::Uniform::new(0.0, PI));
                (theta.cos(), theta.sin())
            }
        }
    }
}

/// Drops needles of a fixed length uniformly at random on a
/// `width` by `height` board whose lower-left corner is the origin.
///
/// The needle's `src` is the drop point; `dst` is `src` offset by the
/// needle length along the drawn direction, so `dst` may fall outside
/// the board.
///
/// # Example
///
/// ```
/// use buffon::needle::NeedleDropper;
/// use buffon::traits::Sampleable;
///
/// let dropper = NeedleDropper::new(2.0, 100.0, 50.0).unwrap();
/// let mut rng = rand::thread_rng();
///
/// let needle = dropper.draw(&mut rng);
/// assert!((needle.length() - 2.0).abs() < 1E-6);
/// assert!(needle.dst.y >= needle.src.y);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NeedleDropper {
    length: f64,
    width: f64,
    height: f64,
    rotation: Rotation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NeedleError {
    /// The needle length is less than or equal to zero
    LengthTooLow { length: f64 },
    /// The needle length is infinite or NaN
    LengthNotFinite { length: f64 },
    /// The board width or height is not finite and positive
    InvalidBoard { width: f64, height: f64 },
    /// The quarter-circle table could not be built
    Table(result::Error),
}

impl NeedleDropper {
    /// Create a dropper using the default quarter-circle table
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, NeedleError> {
        let rotation = Rotation::table().map_err(NeedleError::Table)?;
        Self::with_rotation(length, width, height, rotation)
    }

    /// Create a dropper with the given rotation policy
    pub fn with_rotation(
        length: f64,
        width: f64,
        height: f64,
        rotation: Rotation,
    ) -> Result<Self, NeedleError> {
        if !length.is_finite() {
            Err(NeedleError::LengthNotFinite { length })
        } else if length <= 0.0 {
            Err(NeedleError::LengthTooLow { length })
        } else if !(width.is_finite()
            && height.is_finite()
            && width > 0.0
            && height > 0.0)
        {
            Err(NeedleError::InvalidBoard { width, height })
        } else {
            Ok(Self::new_unchecked(length, width, height, rotation))
        }
    }

    /// Creates a new NeedleDropper without checking whether the parameters
    /// are valid.
    #[inline]
    pub fn new_unchecked(
        length: f64,
        width: f64,
        height: f64,
        rotation: Rotation,
    ) -> Self {
        NeedleDropper {
            length,
            width,
            height,
            rotation,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }
}

impl Sampleable<Segment> for NeedleDropper {
    fn draw<R: Rng>(&self, rng: &mut R) -> Segment {
        let src = Point::new(
            self.width * rng.gen::<f64>(),
            self.height * rng.gen::<f64>(),
        );
        let (dx, dy) = self.rotation.draw(rng);
        let dst = src.offset(dx * self.length, dy * self.length);
        Segment::new(src, dst)
    }
}

impl std::error::Error for NeedleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Table(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for NeedleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooLow { length } => {
                write!(f, "needle length ({length}) must be greater than zero")
            }
            Self::LengthNotFinite { length } => {
                write!(f, "non-finite needle length: {length}")
            }
            Self::InvalidBoard { width, height } => write!(
                f,
                "board ({width} x {height}) must have finite, positive sides"
            ),
            Self::Table(err) => write!(f, "failed to build table: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_basic_impls;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const TOL: f64 = 1E-6;

    test_basic_impls!(NeedleDropper::new(1.0, 2.0, 3.0).unwrap());

    #[test]
    fn table_points_lie_on_unit_circle() {
        let table = QuarterCircle::new(DEFAULT_TABLE_SIZE).unwrap();
        assert_eq!(table.len(), DEFAULT_TABLE_SIZE);
        table.points().iter().for_each(|&(x, y)| {
            assert!((0.0..=1.0).contains(&x));
            assert!(y >= 0.0);
            assert::close(x * x + y * y, 1.0, TOL);
        });
    }

    #[test]
    fn table_sweeps_x_linearly() {
        let table = QuarterCircle::new(11).unwrap();
        table.points().iter().enumerate().for_each(|(i, &(x, _))| {
            assert::close(x, i as f64 / 10.0, 1E-12);
        });
        assert_eq!(table.points()[10], (1.0, 0.0));
    }

    #[test]
    fn table_rejects_fewer_than_two_points() {
        assert_eq!(
            QuarterCircle::new(1).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert!(QuarterCircle::new(0).is_err());
    }

    #[test]
    fn table_mean_x_is_one_half() {
        let table = QuarterCircle::new(1_000).unwrap();
        assert::close(table.mean_x(), 0.5, 1E-12);
    }

    #[test]
    fn clones_share_the_table() {
        let table = QuarterCircle::new(100).unwrap();
        let other = table.clone();
        assert!(Arc::ptr_eq(&table.points, &other.points));
    }

    #[test]
    fn new_rejects_bad_parameters() {
        assert_eq!(
            NeedleDropper::new(0.0, 1.0, 1.0),
            Err(NeedleError::LengthTooLow { length: 0.0 })
        );
        assert!(NeedleDropper::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(NeedleDropper::new(1.0, 0.0, 1.0).is_err());
        assert!(NeedleDropper::new(1.0, 1.0, -1.0).is_err());
        assert!(NeedleDropper::new(1.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn needles_have_fixed_length_and_point_up() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
        let dropper = NeedleDropper::new(23.0, 600.0, 600.0).unwrap();
        dropper.sample(1_000, &mut rng).iter().for_each(|seg| {
            assert::close(seg.length(), 23.0, 1E-4);
            assert!(seg.dst.y >= seg.src.y);
        });
    }

    #[test]
    fn needles_start_on_the_board() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
        let dropper = NeedleDropper::new(5.0, 30.0, 20.0).unwrap();
        dropper.sample(1_000, &mut rng).iter().for_each(|seg| {
            assert!((0.0..30.0).contains(&seg.src.x));
            assert!((0.0..20.0).contains(&seg.src.y));
        });
    }

    #[test]
    fn table_needles_point_both_left_and_right() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
        let dropper = NeedleDropper::new(1.0, 10.0, 10.0).unwrap();
        let needles = dropper.sample(1_000, &mut rng);
        let n_right = needles.iter().filter(|s| s.dst.x > s.src.x).count();
        let n_left = needles.iter().filter(|s| s.dst.x < s.src.x).count();
        assert!(n_right > 400);
        assert!(n_left > 400);
    }

    #[test]
    fn uniform_angle_needles_have_fixed_length() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
        let dropper = NeedleDropper::with_rotation(
            3.0,
            10.0,
            10.0,
            Rotation::UniformAngle,
        )
        .unwrap();
        dropper.sample(1_000, &mut rng).iter().for_each(|seg| {
            assert::close(seg.length(), 3.0, 1E-10);
            assert!(seg.dst.y >= seg.src.y);
        });
    }

    #[test]
    fn mean_horizontal_extent_matches_draws() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x5678);
        let n = 100_000;
        for rotation in [Rotation::table().unwrap(), Rotation::UniformAngle] {
            let mean = rotation
                .sample_stream(&mut rng)
                .take(n)
                .map(|(dx, _): (f64, f64)| dx.abs())
                .sum::<f64>()
                / n as f64;
            assert::close(mean, rotation.mean_horizontal_extent(), 1E-2);
        }
    }
}
