//! # Accrue Math
//!
//! Numerical building blocks for the Accrue time value of money library.
//!
//! This crate provides:
//!
//! - **Solvers**: Root-finding algorithms (Newton-Raphson, Secant) used to
//!   invert net present value into a yield
//!
//! ## Design Philosophy
//!
//! - **Explicit Failure**: Every solver reports non-convergence as an error
//!   carrying the last estimate, never a silently wrong root
//! - **No Bracketing**: Solvers start from an initial guess; callers own the
//!   choice of a sensible starting point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, secant, NewtonSolver, SecantSolver, Solver,
        SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
