//! Buffon's needle experiment
//!
//! Needles of length `L` dropped on a floor ruled with parallel lines `D`
//! apart (`L <= D`) cross a line with probability `2L / (πD)`. Replacing the
//! probability with the observed crossing frequency `C / n` gives
//!
//! ```text
//!      2 L n     2 r n
//! π ≈ ------- = -------,  r = L / D
//!       D C        C
//! ```
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{
    REFERENCE_GAPS, REFERENCE_HEIGHT, REFERENCE_LENGTH_OFFSET,
    REFERENCE_RATIO, REFERENCE_TRIALS, REFERENCE_WIDTH,
};
use crate::geom::Segment;
use crate::grid::{Grid, GridError};
use crate::needle::{NeedleDropper, NeedleError};
use crate::traits::Sampleable;
use log::{debug, warn};
use rand::Rng;
use std::fmt;

/// π estimate from `crossings` out of `trials` needles with length to
/// spacing ratio `ratio`. Zero crossings give an estimate of exactly zero.
///
/// # Example
///
/// ```
/// use buffon::experiment::buffon_estimate;
///
/// assert_eq!(buffon_estimate(0.5, 100, 0), 0.0);
/// assert!((buffon_estimate(0.5, 100, 32) - 3.125).abs() < 1E-12);
/// ```
pub fn buffon_estimate(ratio: f64, trials: usize, crossings: usize) -> f64 {
    if crossings == 0 {
        0.0
    } else {
        2.0 * ratio * trials as f64 / crossings as f64
    }
}

/// One dropped needle and whether it crosses a grid line
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct NeedleDrop {
    pub segment: Segment,
    pub crosses: bool,
}

/// The outcome of a single experiment
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ExperimentResult {
    estimate: f64,
    crossings: usize,
    needles: Vec<NeedleDrop>,
}

impl ExperimentResult {
    /// Tally the crossings in `needles` and compute the estimate
    pub fn new(ratio: f64, needles: Vec<NeedleDrop>) -> Self {
        let crossings = needles.iter().filter(|drop| drop.crosses).count();
        let estimate = buffon_estimate(ratio, needles.len(), crossings);
        ExperimentResult {
            estimate,
            crossings,
            needles,
        }
    }

    /// The π estimate; zero if no needle crossed a line
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    /// Number of needles crossing at least one line
    #[inline]
    pub fn crossings(&self) -> usize {
        self.crossings
    }

    /// Number of needles dropped
    #[inline]
    pub fn trials(&self) -> usize {
        self.needles.len()
    }

    /// Fraction of needles crossing a line; zero for an empty experiment
    pub fn crossing_frequency(&self) -> f64 {
        if self.needles.is_empty() {
            0.0
        } else {
            self.crossings as f64 / self.trials() as f64
        }
    }

    #[inline]
    pub fn needles(&self) -> &[NeedleDrop] {
        &self.needles
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.needles.iter().map(|drop| &drop.segment)
    }

    pub fn crossing_segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.needles
            .iter()
            .filter(|drop| drop.crosses)
            .map(|drop| &drop.segment)
    }
}

/// Configuration for dropping `trials` needles on a grid.
///
/// `ratio` is the `L / D` used in the estimate. It defaults to the actual
/// needle length over the grid spacing, but may be set independently.
///
/// # Example
///
/// ```
/// use buffon::prelude::*;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let grid = Grid::spanning(100.0, 10).unwrap();
/// let dropper = NeedleDropper::with_rotation(
///     5.0, 100.0, 100.0, Rotation::UniformAngle
/// ).unwrap();
/// let experiment = Experiment::new(20_000, dropper, grid);
///
/// let mut rng = SmallRng::seed_from_u64(0x1234);
/// let result = experiment.run(&mut rng);
///
/// assert_eq!(result.trials(), 20_000);
/// assert!((result.estimate() - std::f64::consts::PI).abs() < 0.3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Experiment {
    trials: usize,
    dropper: NeedleDropper,
    grid: Grid,
    ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    /// The ratio is less than or equal to zero
    RatioTooLow { ratio: f64 },
    /// The ratio is infinite or NaN
    RatioNotFinite { ratio: f64 },
    /// The grid could not be built
    Grid(GridError),
    /// The needle dropper could not be built
    Needle(NeedleError),
}

impl Experiment {
    /// Create an experiment whose ratio is the needle length over the grid
    /// spacing
    pub fn new(trials: usize, dropper: NeedleDropper, grid: Grid) -> Self {
        let ratio = dropper.length() / grid.spacing();
        Experiment::new_unchecked(trials, dropper, grid, ratio)
    }

    /// Creates a new Experiment without checking whether the parameters
    /// are valid.
    #[inline]
    pub fn new_unchecked(
        trials: usize,
        dropper: NeedleDropper,
        grid: Grid,
        ratio: f64,
    ) -> Self {
        Experiment {
            trials,
            dropper,
            grid,
            ratio,
        }
    }

    /// The reference configuration: a 600 x 600 board ruled with 12 lines
    /// (11 gaps, `D = 600 / 11`), `r = 1/3`, 500 needles of length
    /// `D / 3 + 5`, rotated with the default quarter-circle table.
    ///
    /// Note the needle length is not `r D`. The table under-represents
    /// horizontal needles, which lowers the crossing rate, and the longer
    /// needle raises it again; the expected estimate is close to π.
    pub fn reference() -> Result<Self, ExperimentError> {
        let grid = Grid::spanning(REFERENCE_WIDTH, REFERENCE_GAPS)
            .map_err(ExperimentError::Grid)?;
        let length =
            grid.spacing() * REFERENCE_RATIO + REFERENCE_LENGTH_OFFSET;
        let dropper =
            NeedleDropper::new(length, REFERENCE_WIDTH, REFERENCE_HEIGHT)
                .map_err(ExperimentError::Needle)?;
        Experiment::new(REFERENCE_TRIALS, dropper, grid)
            .with_ratio(REFERENCE_RATIO)
    }

    /// Use `ratio` in the estimate instead of the length to spacing ratio
    pub fn with_ratio(self, ratio: f64) -> Result<Self, ExperimentError> {
        if !ratio.is_finite() {
            Err(ExperimentError::RatioNotFinite { ratio })
        } else if ratio <= 0.0 {
            Err(ExperimentError::RatioTooLow { ratio })
        } else {
            Ok(Experiment { ratio, ..self })
        }
    }

    /// Set the number of needles dropped per run
    pub fn with_trials(self, trials: usize) -> Self {
        Experiment { trials, ..self }
    }

    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn dropper(&self) -> &NeedleDropper {
        &self.dropper
    }

    /// Probability that a single needle crosses a line, assuming the
    /// needle is no longer than the grid spacing and the board is an
    /// integer number of gaps wide.
    pub fn expected_crossing_probability(&self) -> f64 {
        let extent = self.dropper.rotation().mean_horizontal_extent();
        self.dropper.length() * extent / self.grid.spacing()
    }

    /// The value the estimate concentrates around as `trials` grows
    pub fn expected_estimate(&self) -> f64 {
        2.0 * self.ratio / self.expected_crossing_probability()
    }

    /// Drop `trials` needles and estimate π
    pub fn run<R: Rng>(&self, rng: &mut R) -> ExperimentResult {
        let needles: Vec<NeedleDrop> = self
            .dropper
            .sample_stream(rng)
            .take(self.trials)
            .map(|segment| NeedleDrop {
                segment,
                crosses: self.grid.crosses(segment),
            })
            .collect();

        let result = ExperimentResult::new(self.ratio, needles);

        debug!(
            "dropped {} needles, {} crossings, estimate {}",
            result.trials(),
            result.crossings(),
            result.estimate()
        );
        if result.crossings() == 0 {
            warn!(
                "no needle out of {} crossed a line; estimate is 0",
                result.trials()
            );
        }

        result
    }

    /// Run the experiment `runs` times and return the estimates, largest
    /// first. Zero estimates from runs without crossings are kept.
    pub fn estimates<R: Rng>(&self, runs: usize, rng: &mut R) -> Vec<f64> {
        let mut estimates: Vec<f64> =
            (0..runs).map(|_| self.run(rng).estimate()).collect();
        estimates.sort_by(|a, b| b.total_cmp(a));
        estimates
    }
}

/// Summary statistics of a collection of estimates
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    /// Sample variance; zero for a single estimate
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarize `xs`, zeros included. `None` if `xs` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use buffon::experiment::Summary;
    ///
    /// let summary = Summary::from_estimates(&[3.0, 3.5, 2.5]).unwrap();
    /// assert_eq!(summary.n, 3);
    /// assert!((summary.mean - 3.0).abs() < 1E-12);
    /// assert!((summary.variance - 0.25).abs() < 1E-12);
    /// assert_eq!(summary.min, 2.5);
    /// assert_eq!(summary.max, 3.5);
    /// ```
    pub fn from_estimates(xs: &[f64]) -> Option<Self> {
        if xs.is_empty() {
            return None;
        }

        let n = xs.len();
        let nf = n as f64;
        let mean = xs.iter().sum::<f64>() / nf;
        let variance = if n == 1 {
            0.0
        } else {
            xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0)
        };
        let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Summary {
            n,
            mean,
            variance,
            min,
            max,
        })
    }

    #[inline]
    pub fn std(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            Self::Needle(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RatioTooLow { ratio } => {
                write!(f, "ratio ({ratio}) must be greater than zero")
            }
            Self::RatioNotFinite { ratio } => {
                write!(f, "non-finite ratio: {ratio}")
            }
            Self::Grid(err) => write!(f, "invalid grid: {err}"),
            Self::Needle(err) => write!(f, "invalid needle: {err}"),
        }
    }
}
