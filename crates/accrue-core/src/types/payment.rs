//! A single cashflow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Compounding;
use crate::error::AccrueResult;

/// A payment of `amount` at time `t`, measured in years from today.
///
/// Payments are plain values: two payments are equal when their amounts and
/// times are equal. Negative amounts are outflows (a purchase price, an
/// entry cost); negative times are allowed for flows before the valuation
/// point.
///
/// # Example
///
/// ```rust
/// use accrue_core::{Compounding, Payment};
///
/// let payment = Payment::new(1.21, 2.0);
/// let pv = payment.present_value(0.1, Compounding::ANNUAL).unwrap();
/// assert!((pv - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Payment {
    /// Money amount in currency units
    pub amount: f64,
    /// Time in years
    pub t: f64,
}

impl Payment {
    /// Creates a new payment.
    #[must_use]
    pub fn new(amount: f64, t: f64) -> Self {
        Self { amount, t }
    }

    /// Returns the payment amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the payment time in years.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Present value at `interest_rate` under the given compounding.
    ///
    /// Equal to `amount / growth_factor(interest_rate, t)`. Pass
    /// `Compounding::default()` for annual compounding.
    pub fn present_value(&self, interest_rate: f64, compounding: Compounding) -> AccrueResult<f64> {
        Ok(self.amount / compounding.growth_factor(interest_rate, self.t)?)
    }
}

impl From<(f64, f64)> for Payment {
    fn from((amount, t): (f64, f64)) -> Self {
        Self::new(amount, t)
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}y", self.amount, self.t)
    }
}
