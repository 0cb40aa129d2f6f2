//! Ordered streams of payments.

use serde::{Deserialize, Serialize};

use super::{Compounding, Payment};
use crate::config::IrrConfig;
use crate::error::AccrueResult;
use crate::valuation::{self, IrrResult};

/// An ordered collection of payments.
///
/// The stream owns its payments. [`add`](Self::add), [`push`](Self::push) and
/// [`sort`](Self::sort) mutate the stream in place and return `&mut Self` so
/// calls can be chained; clone the stream first if an unmodified copy is
/// needed. Payments are never removed.
///
/// # Example
///
/// ```rust
/// use accrue_core::{Compounding, Stream};
///
/// let stream = Stream::from_list([(-100.0, 0.0), (7.0, 0.5), (7.0, 1.0), (100.0, 1.0)]);
/// let irr = stream.irr(Compounding::SEMI_ANNUAL).unwrap();
/// assert_eq!((irr * 100.0).round() / 100.0, 0.14);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stream {
    /// Payments in insertion (or sorted) order
    payments: Vec<Payment>,
}

impl Stream {
    /// Creates a new empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self {
            payments: Vec::new(),
        }
    }

    /// Creates a stream owning the given payments.
    #[must_use]
    pub fn from_payments(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// Builds a stream from `(amount, t)` pairs, preserving their order.
    pub fn from_list<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs.into_iter().map(Payment::from).collect()
    }

    /// Appends a payment of `amount` at time `t`.
    pub fn add(&mut self, amount: f64, t: f64) -> &mut Self {
        self.payments.push(Payment::new(amount, t));
        self
    }

    /// Appends an existing payment.
    pub fn push(&mut self, payment: Payment) -> &mut Self {
        self.payments.push(payment);
        self
    }

    /// Sorts payments by time, then by amount, in place.
    ///
    /// The sort is stable, so exact duplicates keep their insertion order.
    pub fn sort(&mut self) -> &mut Self {
        self.payments.sort_by(|a, b| {
            a.t.total_cmp(&b.t)
                .then_with(|| a.amount.total_cmp(&b.amount))
        });
        self
    }

    /// Returns the payments as a slice.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns the number of payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// Returns true if there are no payments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Returns an iterator over the payments.
    pub fn iter(&self) -> std::slice::Iter<'_, Payment> {
        self.payments.iter()
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Returns the payment amounts in stream order.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.payments.iter().map(|p| p.amount).collect()
    }

    /// Returns the payment times in stream order.
    #[must_use]
    pub fn timestamps(&self) -> Vec<f64> {
        self.payments.iter().map(|p| p.t).collect()
    }

    /// Net present value at `interest_rate`: the sum of each payment's
    /// present value under the same rate and compounding.
    ///
    /// An empty stream is worth zero.
    pub fn npv(&self, interest_rate: f64, compounding: Compounding) -> AccrueResult<f64> {
        self.payments
            .iter()
            .map(|p| p.present_value(interest_rate, compounding))
            .sum()
    }

    /// Internal rate of return: the rate at which [`npv`](Self::npv) is zero.
    ///
    /// Starts from 0.1 with the default solver settings (see [`IrrConfig`]).
    /// The stream should contain a sign change; without one the solve fails
    /// with [`AccrueError::NonConvergence`]. See
    /// [`valuation::irr_with_config`] for the other preconditions.
    ///
    /// [`AccrueError::NonConvergence`]: crate::error::AccrueError::NonConvergence
    pub fn irr(&self, compounding: Compounding) -> AccrueResult<f64> {
        let config = IrrConfig::default().with_compounding(compounding);
        self.irr_with_config(&config).map(|result| result.rate)
    }

    /// Internal rate of return with explicit solver configuration, including
    /// iteration diagnostics.
    pub fn irr_with_config(&self, config: &IrrConfig) -> AccrueResult<IrrResult> {
        valuation::irr_with_config(&self.amounts(), &self.timestamps(), config)
    }
}

impl From<Vec<Payment>> for Stream {
    fn from(payments: Vec<Payment>) -> Self {
        Self::from_payments(payments)
    }
}

impl FromIterator<Payment> for Stream {
    fn from_iter<I: IntoIterator<Item = Payment>>(iter: I) -> Self {
        Self {
            payments: iter.into_iter().collect(),
        }
    }
}

impl Extend<Payment> for Stream {
    fn extend<I: IntoIterator<Item = Payment>>(&mut self, iter: I) {
        self.payments.extend(iter);
    }
}

impl IntoIterator for Stream {
    type Item = Payment;
    type IntoIter = std::vec::IntoIter<Payment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Payment;
    type IntoIter = std::slice::Iter<'a, Payment>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.iter()
    }
}
