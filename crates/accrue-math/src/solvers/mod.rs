//! Root-finding algorithms.
//!
//! This module provides the numerical solvers used to invert net present
//! value into a yield:
//!
//! - [`newton_raphson`]: Quadratic convergence when a derivative is available
//! - [`newton_raphson_numerical`]: Newton-Raphson with a central-difference derivative
//! - [`secant`]: Derivative-free method seeded with two points
//!
//! # Convergence
//!
//! Both methods stop when the step between successive iterates is smaller
//! than [`SolverConfig::tolerance`] (an absolute tolerance on the root), or
//! when the function evaluates to exactly zero. A small residual alone is not
//! accepted: a function that decays towards zero without crossing it (an
//! all-positive cashflow stream, for instance) keeps growing its steps and
//! ends in [`MathError::ConvergenceFailed`] instead of reporting a far-away
//! point as a root.
//!
//! No bracketing is performed. The caller supplies the initial guess and is
//! responsible for the function having a root reachable from it.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use accrue_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = newton_raphson_numerical(price_fn, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```
//!
//! [`MathError::ConvergenceFailed`]: crate::error::MathError::ConvergenceFailed

mod newton;
mod secant;

pub use newton::{newton_raphson, newton_raphson_numerical};
pub use secant::secant;

use crate::error::{MathError, MathResult};

/// Default absolute tolerance on the step between iterates.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

/// Relative offset used to seed the second secant point from a single guess.
const SECANT_SEED_OFFSET: f64 = 1e-4;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance on the step between successive iterates.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and finite and that at least one
    /// iteration is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

/// Trait for root-finding solvers with optional derivative.
///
/// Gives callers one entry point regardless of the method, so the method can
/// be chosen from configuration.
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{NewtonSolver, Solver, SolverConfig};
///
/// let solver = NewtonSolver;
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = solver.solve(f, Some(df), 1.5, None, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of the given function.
    ///
    /// # Arguments
    ///
    /// * `f` - The function for which to find a root
    /// * `derivative` - Optional derivative function (used if available)
    /// * `initial_guess` - Starting point for the search
    /// * `bounds` - Optional pair of starting points; ignored by methods that
    ///   need only one
    /// * `config` - Solver configuration
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson solver implementation.
///
/// Falls back to a numerical derivative when none is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => newton_raphson(f, df, initial_guess, config),
            None => newton_raphson_numerical(f, initial_guess, config),
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Secant method solver implementation.
///
/// Without explicit starting points the second point is placed a small
/// relative distance away from the initial guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecantSolver;

impl SecantSolver {
    /// Second starting point derived from a single initial guess.
    #[must_use]
    pub fn seed(initial_guess: f64) -> f64 {
        let offset = if initial_guess >= 0.0 {
            SECANT_SEED_OFFSET
        } else {
            -SECANT_SEED_OFFSET
        };
        initial_guess * (1.0 + SECANT_SEED_OFFSET) + offset
    }
}

impl Solver for SecantSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (x0, x1) = bounds.unwrap_or((initial_guess, Self::seed(initial_guess)));
        secant(f, x0, x1, config)
    }

    fn name(&self) -> &'static str {
        "Secant"
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
