//! Yield solver configuration.
//!
//! [`IrrConfig`] carries every knob of an IRR solve with documented
//! defaults, so operations that would otherwise take a long list of optional
//! arguments take one struct instead. It deserializes from partial documents:
//! missing fields take their defaults.
//!
//! ```rust
//! use accrue_core::config::{IrrConfig, RootMethod};
//! use accrue_core::Compounding;
//!
//! let config = IrrConfig::default()
//!     .with_compounding(Compounding::SEMI_ANNUAL)
//!     .with_method(RootMethod::Secant);
//! assert_eq!(config.initial_guess, 0.1);
//! assert!(config.validate().is_ok());
//! ```

use accrue_math::solvers::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccrueError, AccrueResult};
use crate::types::Compounding;

/// Initial guess for every yield solve unless configured otherwise.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Root-finding method used for IRR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RootMethod {
    /// Newton-Raphson with a central-difference derivative
    #[default]
    Newton,
    /// Secant method seeded next to the initial guess
    Secant,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMethod::Newton => write!(f, "Newton"),
            RootMethod::Secant => write!(f, "Secant"),
        }
    }
}

/// Configuration for an IRR (yield) solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Compounding convention used to discount the cashflows.
    #[serde(default)]
    pub compounding: Compounding,

    /// Starting rate for the iteration.
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Absolute tolerance on the step between successive rates.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum number of solver iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Root-finding method.
    #[serde(default)]
    pub method: RootMethod,
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            compounding: Compounding::default(),
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            method: RootMethod::default(),
        }
    }
}

impl IrrConfig {
    /// Sets the compounding convention.
    #[must_use]
    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Sets the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
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

    /// Sets the root-finding method.
    #[must_use]
    pub fn with_method(mut self, method: RootMethod) -> Self {
        self.method = method;
        self
    }

    /// Solver settings derived from this configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AccrueResult<()> {
        if !self.initial_guess.is_finite() {
            return Err(AccrueError::invalid_input(format!(
                "initial_guess must be finite, got {}",
                self.initial_guess
            )));
        }
        self.solver_config().validate()?;
        Ok(())
    }
}
