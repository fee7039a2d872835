use crate::consts::{SQRT_MAX_ITER, SQRT_TOL};
use crate::result::{Error, ErrorKind, Result};
use log::trace;

/// Newton-Raphson square root to an absolute tolerance of 1E-7 on
/// `|x - k²|`.
///
/// # Example
///
/// ```
/// use buffon::misc::sqrt;
///
/// let k = sqrt(2.0).unwrap();
/// assert!((k * k - 2.0).abs() < 1E-7);
///
/// assert_eq!(sqrt(0.0).unwrap(), 0.0);
/// assert!(sqrt(-1.0).is_err());
/// ```
pub fn sqrt(x: f64) -> Result<f64> {
    sqrt_eps(x, None)
}

/// Newton-Raphson square root with a user supplied tolerance on
/// `|x - k²|`. `None` uses the default of 1E-7.
///
/// Iteration starts at `x + 1`, which is always above the root, so the
/// iterates decrease monotonically. If they stop decreasing before the
/// tolerance is met, the precision of `f64` has been exhausted and the
/// current iterate is returned.
///
/// # Errors
///
/// - `InvalidArgument` if `x` is negative or not finite
/// - `MaxIterationsExceeded` if the iteration cap is hit
///
/// # Example
///
/// ```
/// use buffon::misc::sqrt_eps;
///
/// let k = sqrt_eps(10.0, Some(1E-12)).unwrap();
/// assert!((k - 10_f64.sqrt()).abs() < 1E-12);
/// ```
pub fn sqrt_eps(x: f64, eps: Option<f64>) -> Result<f64> {
    if !x.is_finite() {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("non-finite input: {x}").as_str(),
        ));
    }

    if x < 0.0 {
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            format!("square root of negative number: {x}").as_str(),
        ));
    }

    if x == 0.0 {
        return Ok(0.0);
    }

    let tol = eps.unwrap_or(SQRT_TOL);
    let mut k = x + 1.0;

    for iter in 0..SQRT_MAX_ITER {
        if (x - k * k).abs() <= tol {
            trace!("sqrt({x}) converged in {iter} iterations");
            return Ok(k);
        }

        let next = 0.5 * (k + x / k);
        if next >= k {
            trace!("sqrt({x}) reached f64 precision in {iter} iterations");
            return Ok(k);
        }
        k = next;
    }

    Err(Error::new(
        ErrorKind::MaxIterationsExceeded,
        format!("sqrt({x}) did not converge in {SQRT_MAX_ITER} iterations")
            .as_str(),
    ))
}
