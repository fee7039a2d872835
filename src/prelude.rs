//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::experiment::{
    buffon_estimate, Experiment, ExperimentResult, NeedleDrop, Summary,
};
#[doc(no_inline)]
pub use crate::geom::{Point, Segment};
#[doc(no_inline)]
pub use crate::grid::Grid;
#[doc(no_inline)]
pub use crate::misc::{
    estimate_pi_riemann, riemann, riemann_with, sqrt, sqrt_eps, Sampling,
};
#[doc(no_inline)]
pub use crate::needle::{NeedleDropper, QuarterCircle, Rotation};
#[doc(no_inline)]
pub use crate::traits::*;
