//! Numerical tolerances and the reference experiment configuration

/// Absolute tolerance on `|x - k²|` used by [`crate::misc::sqrt`]
pub const SQRT_TOL: f64 = 1E-7;
/// Iteration cap for the Newton square root. Halving from `f64::MAX` down
/// to its root takes a little over 500 steps.
pub const SQRT_MAX_ITER: usize = 2_000;

/// Default number of points in the quarter-circle sample table
pub const DEFAULT_TABLE_SIZE: usize = 1_000;

/// Width of the reference board
pub const REFERENCE_WIDTH: f64 = 600.0;
/// Height of the reference board
pub const REFERENCE_HEIGHT: f64 = 600.0;
/// Number of gaps between the grid lines spanning the reference board
pub const REFERENCE_GAPS: usize = 11;
/// Needle-length to line-spacing ratio of the reference configuration
pub const REFERENCE_RATIO: f64 = 1.0 / 3.0;
/// Offset added to the reference needle length so that needles are easier
/// to see when drawn. Only [`crate::experiment::Experiment::reference`]
/// uses it.
pub const REFERENCE_LENGTH_OFFSET: f64 = 5.0;
/// Number of needles dropped per reference experiment
pub const REFERENCE_TRIALS: usize = 500;
