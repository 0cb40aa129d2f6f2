//! # Accrue Core
//!
//! Time value of money for discrete cashflow streams.
//!
//! This crate provides the building blocks the rest of Accrue composes:
//!
//! - **Compounding**: Simple, periodic and continuous interest accumulation
//! - **Accumulation**: A compounding convention bound to one interest rate
//! - **Payments and Streams**: Cashflows at year-fraction offsets, with
//!   present value, net present value and internal rate of return
//! - **Configuration**: Solver settings for yield calculations
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::prelude::*;
//!
//! let mut stream = Stream::new();
//! stream.add(-100.0, 0.0).add(7.0, 0.5).add(107.0, 1.0);
//!
//! let irr = stream.irr(Compounding::SEMI_ANNUAL).unwrap();
//! assert!((irr - 0.14).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod accumulation;
pub mod config;
pub mod error;
pub mod types;
pub mod valuation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accumulation::Accumulation;
    pub use crate::config::{IrrConfig, RootMethod};
    pub use crate::error::{AccrueError, AccrueResult};
    pub use crate::types::{Compounding, Frequency, Payment, Stream};
    pub use crate::valuation::{irr, irr_with_config, npv, IrrResult};
}

// Re-export commonly used types at crate root
pub use error::{AccrueError, AccrueResult};
pub use types::{Compounding, Frequency, Payment, Stream};
