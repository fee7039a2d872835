//! Numerical utilities
mod riemann;
mod sqrt;

pub use riemann::*;
pub use sqrt::*;
