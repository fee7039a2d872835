//! Estimating π two ways: dropping needles on a ruled floor (Buffon's
//! needle) and summing rectangles under `4 / (1 + x²)` on `[0, 1]`.
//!
//! # Example
//!
//! ```
//! use buffon::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(0x1234);
//!
//! let experiment = Experiment::reference().unwrap().with_trials(10_000);
//! let result = experiment.run(&mut rng);
//! assert!((result.estimate() - std::f64::consts::PI).abs() < 0.5);
//!
//! let pi = estimate_pi_riemann(200_000);
//! assert!((pi - std::f64::consts::PI).abs() < 1E-6);
//! ```
pub mod consts;
pub mod experiment;
pub mod geom;
pub mod grid;
pub mod misc;
pub mod needle;
pub mod prelude;
pub mod result;
pub mod traits;
