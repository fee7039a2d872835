#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Where in each subinterval the integrand is evaluated
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Sampling {
    /// Left endpoint, `a + i dx`
    Left,
    /// Right endpoint, `a + (i + 1) dx`
    Right,
    /// Midpoint, `a + (i + 1/2) dx`
    #[default]
    Midpoint,
}

impl Sampling {
    /// Fraction of the way through a subinterval at which to sample
    #[inline]
    fn offset(self) -> f64 {
        match self {
            Sampling::Left => 0.0,
            Sampling::Right => 1.0,
            Sampling::Midpoint => 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSamplingError(String);

impl std::error::Error for ParseSamplingError {}

impl fmt::Display for ParseSamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sampling method '{}', expected one of left, right, center",
            self.0
        )
    }
}

impl FromStr for Sampling {
    type Err = ParseSamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Sampling::Left),
            "right" => Ok(Sampling::Right),
            "center" | "centre" | "mid" | "midpoint" => Ok(Sampling::Midpoint),
            _ => Err(ParseSamplingError(s.to_owned())),
        }
    }
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sampling::Left => "left",
            Sampling::Right => "right",
            Sampling::Midpoint => "center",
        };
        write!(f, "{s}")
    }
}

/// Riemann sum of `func` over `[a, b]` with `n` equal subintervals, each
/// sampled according to `sampling`.
///
/// Returns zero when `n` is zero.
///
/// # Example
///
/// The left sum of an increasing function underestimates its integral
///
/// ```
/// use buffon::misc::{riemann_with, Sampling};
///
/// let func = |x: f64| x;
/// let left = riemann_with(func, 0.0, 1.0, 10, Sampling::Left);
/// let right = riemann_with(func, 0.0, 1.0, 10, Sampling::Right);
///
/// assert!((left - 0.45).abs() < 1E-12);
/// assert!((right - 0.55).abs() < 1E-12);
/// ```
pub fn riemann_with<F>(
    func: F,
    a: f64,
    b: f64,
    n: usize,
    sampling: Sampling,
) -> f64
where
    F: Fn(f64) -> f64,
{
    if n == 0 {
        return 0.0;
    }

    let dx = (b - a) / n as f64;
    let offset = sampling.offset();

    (0..n)
        .map(|i| func(a + (i as f64 + offset) * dx) * dx)
        .sum::<f64>()
}

/// Midpoint Riemann sum of `func` over `[a, b]` with `n` subintervals
///
/// # Example
///
/// Integrate f: x<sup>2</sup> over the interval [0, 1].
///
/// ```
/// use buffon::misc::riemann;
///
/// let func = |x: f64| x.powi(2);
/// let q = riemann(func, 0.0, 1.0, 1_000);
///
/// assert!((q - 1.0/3.0).abs() < 1E-6);
/// ```
pub fn riemann<F>(func: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    riemann_with(func, a, b, n, Sampling::default())
}

/// Estimate π as the midpoint sum of ∫₀¹ 4 / (1 + x²) dx
///
/// # Example
///
/// ```
/// use buffon::misc::estimate_pi_riemann;
///
/// let pi = estimate_pi_riemann(10_000);
/// assert!((pi - std::f64::consts::PI).abs() < 1E-8);
/// ```
pub fn estimate_pi_riemann(n: usize) -> f64 {
    riemann(|x: f64| 4.0 / (1.0 + x * x), 0.0, 1.0, n)
}
