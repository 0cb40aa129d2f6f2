//! Secant root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but approximates the derivative using the slope
/// through the two most recent iterates. Does not require an analytical
/// derivative or a bracketing interval.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio). The
/// iteration stops when the step drops below the tolerance or `f` hits
/// exactly zero.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{secant, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x_prev = x0;
    let mut f_prev = f(x_prev);
    if !x_prev.is_finite() || !f_prev.is_finite() {
        return Err(MathError::NonFiniteValue {
            x: x_prev,
            iterations: 0,
        });
    }

    let mut x_curr = x1;
    let mut f_curr = f(x_curr);

    for iteration in 0..config.max_iterations {
        if !x_curr.is_finite() || !f_curr.is_finite() {
            return Err(MathError::NonFiniteValue {
                x: x_curr,
                iterations: iteration,
            });
        }

        if f_curr == 0.0 {
            return Ok(SolverResult {
                root: x_curr,
                iterations: iteration,
                residual: f_curr,
            });
        }

        let denom = f_curr - f_prev;
        if denom == 0.0 {
            // Flat secant: only acceptable when the two points already coincide
            if (x_curr - x_prev).abs() < config.tolerance {
                return Ok(SolverResult {
                    root: x_curr,
                    iterations: iteration,
                    residual: f_curr,
                });
            }
            return Err(MathError::ZeroDerivative {
                x: x_curr,
                iterations: iteration,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        let f_next = f(x_next);
        trace!("secant iteration {}: x = {x_next}, f(x) = {f_next:e}", iteration + 1);

        if (x_next - x_curr).abs() < config.tolerance {
            if !x_next.is_finite() || !f_next.is_finite() {
                return Err(MathError::NonFiniteValue {
                    x: x_next,
                    iterations: iteration + 1,
                });
            }
            debug!("secant: converged to {x_next} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x_next,
                iterations: iteration + 1,
                residual: f_next,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        x_curr,
        f_curr,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 15);
    }

    #[test]
    fn test_sin_near_pi() {
        let f = |x: f64| x.sin();

        let result = secant(f, 3.0, 3.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_function_fails() {
        let f = |_: f64| 5.0;

        let result = secant(f, 0.0, 1.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::ZeroDerivative { .. })));
    }

    #[test]
    fn test_iteration_cap() {
        let f = |x: f64| x * x - 2.0;

        let result = secant(f, 50.0, 60.0, &SolverConfig::new(1e-12, 3));

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 3, .. })
        ));
    }
}
