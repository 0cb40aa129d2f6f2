//! Newton-Raphson root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as zero.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Relative step for the central-difference derivative.
const NUMERICAL_STEP: f64 = 1e-7;

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// Stops once `|x_{n+1} - x_n|` drops below the configured tolerance, or when
/// `f(x_n)` is exactly zero.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// * [`MathError::ConvergenceFailed`] when the iteration cap is reached
/// * [`MathError::ZeroDerivative`] when the derivative vanishes
/// * [`MathError::NonFiniteValue`] when `f`, `df` or the iterate stop being finite
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    config.validate()?;

    let mut x = initial_guess;
    let mut fx = f(x);

    for iteration in 0..config.max_iterations {
        if !x.is_finite() || !fx.is_finite() {
            return Err(MathError::NonFiniteValue {
                x,
                iterations: iteration,
            });
        }

        if fx == 0.0 {
            debug!("newton: exact root {x} after {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFiniteValue {
                x,
                iterations: iteration,
            });
        }
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::ZeroDerivative {
                x,
                iterations: iteration,
            });
        }

        let step = fx / dfx;
        x -= step;
        fx = f(x);
        trace!("newton iteration {}: x = {x}, f(x) = {fx:e}", iteration + 1);

        if step.abs() < config.tolerance {
            if !x.is_finite() || !fx.is_finite() {
                return Err(MathError::NonFiniteValue {
                    x,
                    iterations: iteration + 1,
                });
            }
            debug!("newton: converged to {x} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: fx,
            });
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, x, fx))
}

/// Newton-Raphson with numerical derivative estimation.
///
/// The derivative is a central difference with step `1e-7 * (1 + |x|)`, so
/// the step stays representable as the iterate grows.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| {
        let h = NUMERICAL_STEP * (1.0 + x.abs());
        (f(x + h) - f(x - h)) / (2.0 * h)
    };

    newton_raphson(&f, df, initial_guess, config)
}
