//! Accumulation strategies.
//!
//! An [`Accumulation`] binds a [`Compounding`] convention to one interest
//! rate and answers "what does one unit grow to after `t` years". The raw
//! formulas are also exposed as free functions for callers that want the
//! arithmetic without domain checks.

use serde::{Deserialize, Serialize};

use crate::error::AccrueResult;
use crate::types::{Compounding, Frequency};

/// The six named conventions, in a fixed order.
pub const ALL_CONVENTIONS: [Compounding; 6] = [
    Compounding::Simple,
    Compounding::Continuous,
    Compounding::ANNUAL,
    Compounding::SEMI_ANNUAL,
    Compounding::QUARTERLY,
    Compounding::MONTHLY,
];

/// Simple interest growth: `1 + rate·t`.
#[must_use]
pub fn simple(interest_rate: f64, t: f64) -> f64 {
    1.0 + t * interest_rate
}

/// Periodic compounding growth: `(1 + rate/m)^(m·t)`.
#[must_use]
pub fn compound(interest_rate: f64, t: f64, periods_per_year: u32) -> f64 {
    let m = f64::from(periods_per_year);
    (1.0 + interest_rate / m).powf(t * m)
}

/// Continuous compounding growth: `e^(rate·t)`.
#[must_use]
pub fn continuous(interest_rate: f64, t: f64) -> f64 {
    (interest_rate * t).exp()
}

/// A compounding convention applied at a fixed interest rate.
///
/// # Example
///
/// ```rust
/// use accrue_core::accumulation::Accumulation;
///
/// let growth = Accumulation::annual(0.1).fv(2.0).unwrap();
/// assert!((growth - 1.21).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulation {
    interest_rate: f64,
    compounding: Compounding,
}

impl Accumulation {
    /// Creates a strategy for `interest_rate` under `compounding`.
    #[must_use]
    pub fn new(interest_rate: f64, compounding: Compounding) -> Self {
        Self {
            interest_rate,
            compounding,
        }
    }

    /// Simple interest.
    #[must_use]
    pub fn simple(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::Simple)
    }

    /// Continuous compounding.
    #[must_use]
    pub fn continuous(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::Continuous)
    }

    /// Annual compounding.
    #[must_use]
    pub fn annual(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::ANNUAL)
    }

    /// Semi-annual compounding.
    #[must_use]
    pub fn semi_annual(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::SEMI_ANNUAL)
    }

    /// Quarterly compounding.
    #[must_use]
    pub fn quarterly(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::QUARTERLY)
    }

    /// Monthly compounding.
    #[must_use]
    pub fn monthly(interest_rate: f64) -> Self {
        Self::new(interest_rate, Compounding::MONTHLY)
    }

    /// Periodic compounding selected from a number of periods per year
    /// (1, 2, 4 or 12).
    pub fn from_frequency(interest_rate: f64, periods_per_year: u32) -> AccrueResult<Self> {
        let frequency = Frequency::from_periods_per_year(periods_per_year)?;
        Ok(Self::new(interest_rate, frequency.into()))
    }

    /// Returns the interest rate.
    #[must_use]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    /// Returns the compounding convention.
    #[must_use]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    /// Future value of one unit after `t` years.
    pub fn fv(&self, t: f64) -> AccrueResult<f64> {
        self.compounding.growth_factor(self.interest_rate, t)
    }

    /// Present value of one unit paid after `t` years.
    pub fn discount(&self, t: f64) -> AccrueResult<f64> {
        self.compounding.discount_factor(self.interest_rate, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccrueError;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_fv_at_zero_is_one() {
        for compounding in ALL_CONVENTIONS {
            assert_eq!(Accumulation::new(0.07, compounding).fv(0.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_annual_is_compound_one() {
        let via_lookup = Accumulation::from_frequency(0.06, 1).unwrap();
        let annual = Accumulation::annual(0.06);

        for t in [0.25, 0.5, 1.0, 3.7, 10.0] {
            assert_eq!(via_lookup.fv(t).unwrap(), annual.fv(t).unwrap());
            assert_relative_eq!(annual.fv(t).unwrap(), compound(0.06, t, 1), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_constructors_match_raw_formulas() {
        let rate = 0.045;
        let t = 1.75;

        assert_relative_eq!(Accumulation::simple(rate).fv(t).unwrap(), simple(rate, t));
        assert_relative_eq!(
            Accumulation::continuous(rate).fv(t).unwrap(),
            continuous(rate, t)
        );
        assert_relative_eq!(
            Accumulation::semi_annual(rate).fv(t).unwrap(),
            compound(rate, t, 2)
        );
        assert_relative_eq!(
            Accumulation::quarterly(rate).fv(t).unwrap(),
            compound(rate, t, 4)
        );
        assert_relative_eq!(
            Accumulation::monthly(rate).fv(t).unwrap(),
            compound(rate, t, 12)
        );
    }

    #[test]
    fn test_discount_is_reciprocal() {
        let acc = Accumulation::quarterly(0.08);
        assert_relative_eq!(
            acc.discount(2.5).unwrap() * acc.fv(2.5).unwrap(),
            1.0,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_from_frequency_rejects_unknown() {
        assert_eq!(
            Accumulation::from_frequency(0.05, 3),
            Err(AccrueError::InvalidFrequency {
                periods_per_year: 3
            })
        );
    }

    #[test]
    fn test_accessors() {
        let acc = Accumulation::from_frequency(0.05, 12).unwrap();
        assert_eq!(acc.interest_rate(), 0.05);
        assert_eq!(acc.compounding(), Compounding::MONTHLY);
    }

    proptest! {
        #[test]
        fn prop_fv_increasing_in_time(
            rate in 0.0001f64..0.5,
            t in 0.0f64..30.0,
            dt in 0.01f64..5.0,
            idx in 0usize..6,
        ) {
            let acc = Accumulation::new(rate, ALL_CONVENTIONS[idx]);
            prop_assert!(acc.fv(t + dt).unwrap() > acc.fv(t).unwrap());
        }
    }
}
