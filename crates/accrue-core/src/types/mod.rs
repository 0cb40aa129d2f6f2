//! Domain types for time value of money calculations.
//!
//! - [`Frequency`]: Compounding or coupon periods per year
//! - [`Compounding`]: Interest accumulation convention
//! - [`Payment`]: A single cashflow at a year-fraction offset
//! - [`Stream`]: An ordered collection of payments

mod frequency;
mod payment;
mod stream;

pub use frequency::{Compounding, Frequency};
pub use payment::Payment;
pub use stream::Stream;
