//! # Accrue Bonds
//!
//! Coupon bonds for the Accrue time value of money library.
//!
//! This crate provides:
//!
//! - **Bond**: Coupons plus a redemption payment, priced as the NPV of its
//!   payments and yielded as the IRR against a purchase price
//! - **Schedules**: Level annuity schedules and bond construction from terms
//! - **Quotes**: Prices and yields rounded as `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use accrue_bonds::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let bond = make_bond(0.05, 2, 10, 0, DEFAULT_PAR).unwrap();
//!
//! // A 5% semi-annual bond at par yields 5% semi-annually compounded
//! assert_eq!(bond.ytm_quote(100.0, 4).unwrap(), dec!(0.0500));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod bond;
pub mod error;
pub mod schedule;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::Bond;
    pub use crate::error::{BondError, BondResult};
    pub use crate::schedule::{annuity, make_bond, BondTerms, DEFAULT_PAR};
}

pub use bond::Bond;
pub use error::{BondError, BondResult};
