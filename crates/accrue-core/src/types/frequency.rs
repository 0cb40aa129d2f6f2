//! Frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AccrueError, AccrueResult};

/// Number of compounding (or coupon) periods per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Annual (1 per year)
    Annual,
    /// Semi-annual (2 per year) - most common for coupon bonds
    SemiAnnual,
    /// Quarterly (4 per year)
    Quarterly,
    /// Monthly (12 per year)
    Monthly,
}

impl Frequency {
    /// All supported frequencies, in increasing order.
    pub const ALL: [Frequency; 4] = [
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::Quarterly,
        Frequency::Monthly,
    ];

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Looks up the frequency for a number of periods per year.
    ///
    /// Only 1, 2, 4 and 12 are supported; anything else is an
    /// [`AccrueError::InvalidFrequency`].
    pub fn from_periods_per_year(periods_per_year: u32) -> AccrueResult<Self> {
        match periods_per_year {
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            other => Err(AccrueError::invalid_frequency(other)),
        }
    }
}

impl TryFrom<u32> for Frequency {
    type Error = AccrueError;

    fn try_from(periods_per_year: u32) -> AccrueResult<Self> {
        Self::from_periods_per_year(periods_per_year)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}

/// Interest accumulation convention.
///
/// Converts a rate and an elapsed time in years into a growth factor:
///
/// | Convention | Growth factor |
/// |------------|---------------|
/// | `Simple` | `1 + r·t` |
/// | `Compound(m)` | `(1 + r/m)^(m·t)` |
/// | `Continuous` | `e^(r·t)` |
///
/// The default is annual compounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compounding {
    /// Simple interest (no compounding)
    Simple,
    /// Periodic compounding at the given frequency
    Compound(Frequency),
    /// Continuous compounding
    Continuous,
}

impl Default for Compounding {
    fn default() -> Self {
        Self::ANNUAL
    }
}

impl Compounding {
    /// Annual compounding (1x per year).
    pub const ANNUAL: Compounding = Compounding::Compound(Frequency::Annual);
    /// Semi-annual compounding (2x per year).
    pub const SEMI_ANNUAL: Compounding = Compounding::Compound(Frequency::SemiAnnual);
    /// Quarterly compounding (4x per year).
    pub const QUARTERLY: Compounding = Compounding::Compound(Frequency::Quarterly);
    /// Monthly compounding (12x per year).
    pub const MONTHLY: Compounding = Compounding::Compound(Frequency::Monthly);

    /// Selects periodic compounding from a number of periods per year.
    ///
    /// # Example
    ///
    /// ```rust
    /// use accrue_core::Compounding;
    ///
    /// assert_eq!(Compounding::from_frequency(2).unwrap(), Compounding::SEMI_ANNUAL);
    /// assert!(Compounding::from_frequency(3).is_err());
    /// ```
    pub fn from_frequency(periods_per_year: u32) -> AccrueResult<Self> {
        Frequency::from_periods_per_year(periods_per_year).map(Compounding::Compound)
    }

    /// Returns the compounding periods per year, `None` for simple and
    /// continuous interest.
    #[must_use]
    pub fn periods_per_year_opt(&self) -> Option<u32> {
        match self {
            Compounding::Compound(frequency) => Some(frequency.periods_per_year()),
            Compounding::Simple | Compounding::Continuous => None,
        }
    }

    /// Returns true when the convention is defined for `rate` over `t` years:
    /// `1 + r·t > 0` for simple interest and `1 + r/m > 0` for periodic
    /// compounding. A defined growth factor can still overflow.
    #[must_use]
    pub fn is_defined(&self, rate: f64, t: f64) -> bool {
        match self {
            Compounding::Simple => 1.0 + rate * t > 0.0,
            Compounding::Compound(frequency) => {
                1.0 + rate / f64::from(frequency.periods_per_year()) > 0.0
            }
            Compounding::Continuous => !(rate * t).is_nan(),
        }
    }

    /// Growth factor of one unit invested at `rate` for `t` years.
    ///
    /// Fails with [`AccrueError::DomainError`] when the convention is
    /// undefined for the inputs (see [`is_defined`](Self::is_defined)) or the
    /// result is not a positive finite number.
    pub fn growth_factor(&self, rate: f64, t: f64) -> AccrueResult<f64> {
        if !self.is_defined(rate, t) {
            return Err(AccrueError::domain_error(format!(
                "{self} interest is undefined for rate {rate} over {t} years"
            )));
        }

        let factor = match self {
            Compounding::Simple => 1.0 + rate * t,
            Compounding::Compound(frequency) => {
                let m = f64::from(frequency.periods_per_year());
                (1.0 + rate / m).powf(m * t)
            }
            Compounding::Continuous => (rate * t).exp(),
        };

        if !factor.is_finite() || factor <= 0.0 {
            return Err(AccrueError::domain_error(format!(
                "{self} growth factor for rate {rate} over {t} years is not a positive finite number"
            )));
        }
        Ok(factor)
    }

    /// Discount factor for `t` years at `rate`, the reciprocal of
    /// [`growth_factor`](Self::growth_factor).
    pub fn discount_factor(&self, rate: f64, t: f64) -> AccrueResult<f64> {
        Ok(1.0 / self.growth_factor(rate, t)?)
    }
}

impl From<Frequency> for Compounding {
    fn from(frequency: Frequency) -> Self {
        Compounding::Compound(frequency)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Compound(frequency) => write!(f, "{frequency}"),
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_frequency_lookup_roundtrip() {
        for frequency in Frequency::ALL {
            let found = Frequency::from_periods_per_year(frequency.periods_per_year()).unwrap();
            assert_eq!(found, frequency);
        }
    }

    #[test]
    fn test_unsupported_frequencies_rejected() {
        for n in [0, 3, 5, 6, 24, 52, 365] {
            assert_eq!(
                Compounding::from_frequency(n),
                Err(AccrueError::InvalidFrequency {
                    periods_per_year: n
                })
            );
        }
        assert!(Frequency::try_from(3).is_err());
    }

    #[test]
    fn test_named_presets() {
        assert_eq!(Compounding::from_frequency(1).unwrap(), Compounding::ANNUAL);
        assert_eq!(Compounding::from_frequency(2).unwrap(), Compounding::SEMI_ANNUAL);
        assert_eq!(Compounding::from_frequency(4).unwrap(), Compounding::QUARTERLY);
        assert_eq!(Compounding::from_frequency(12).unwrap(), Compounding::MONTHLY);
        assert_eq!(Compounding::default(), Compounding::ANNUAL);
    }

    #[test]
    fn test_growth_factor_formulas() {
        let rate = 0.05;
        let t = 2.0;

        assert_relative_eq!(
            Compounding::Simple.growth_factor(rate, t).unwrap(),
            1.1,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Compounding::ANNUAL.growth_factor(rate, t).unwrap(),
            1.1025,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Compounding::SEMI_ANNUAL.growth_factor(rate, t).unwrap(),
            1.025_f64.powi(4),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Compounding::Continuous.growth_factor(rate, t).unwrap(),
            0.1_f64.exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_time_returns_one() {
        for compounding in [
            Compounding::Simple,
            Compounding::ANNUAL,
            Compounding::SEMI_ANNUAL,
            Compounding::QUARTERLY,
            Compounding::MONTHLY,
            Compounding::Continuous,
        ] {
            assert_eq!(compounding.growth_factor(0.05, 0.0).unwrap(), 1.0);
            assert_eq!(compounding.discount_factor(-0.5, 0.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_more_compounding_grows_faster() {
        let rate = 0.08;
        let t = 3.0;
        let simple = Compounding::Simple.growth_factor(rate, t).unwrap();
        let annual = Compounding::ANNUAL.growth_factor(rate, t).unwrap();
        let monthly = Compounding::MONTHLY.growth_factor(rate, t).unwrap();
        let continuous = Compounding::Continuous.growth_factor(rate, t).unwrap();

        assert!(simple < annual);
        assert!(annual < monthly);
        assert!(monthly < continuous);
    }

    #[test]
    fn test_compound_domain_error() {
        // 1 + r/2 <= 0
        let result = Compounding::SEMI_ANNUAL.growth_factor(-2.5, 1.0);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));

        let result = Compounding::ANNUAL.growth_factor(-1.0, 1.0);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));
    }

    #[test]
    fn test_simple_domain_error() {
        // 1 + r·t <= 0
        let result = Compounding::Simple.growth_factor(-0.5, 2.0);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));
    }

    #[test]
    fn test_overflow_is_domain_error() {
        let result = Compounding::Continuous.growth_factor(1000.0, 1000.0);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));

        let result = Compounding::ANNUAL.growth_factor(f64::NAN, 1.0);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));
    }

    #[test]
    fn test_is_defined() {
        assert!(Compounding::Simple.is_defined(-0.4, 2.0));
        assert!(!Compounding::Simple.is_defined(-0.5, 2.0));
        assert!(Compounding::QUARTERLY.is_defined(-3.9, 10.0));
        assert!(!Compounding::QUARTERLY.is_defined(-4.0, 10.0));
        assert!(Compounding::Continuous.is_defined(-50.0, 3.0));
        assert!(!Compounding::ANNUAL.is_defined(f64::NAN, 1.0));

        // Defined but too large to represent
        assert!(Compounding::MONTHLY.is_defined(120.0, 26.75));
        assert!(Compounding::MONTHLY.growth_factor(120.0, 26.75).is_err());
    }

    #[test]
    fn test_periods_per_year_opt() {
        assert_eq!(Compounding::Continuous.periods_per_year_opt(), None);
        assert_eq!(Compounding::Simple.periods_per_year_opt(), None);
        assert_eq!(Compounding::ANNUAL.periods_per_year_opt(), Some(1));
        assert_eq!(Compounding::MONTHLY.periods_per_year_opt(), Some(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Compounding::Continuous), "Continuous");
        assert_eq!(format!("{}", Compounding::SEMI_ANNUAL), "Semi-Annual");
        assert_eq!(format!("{}", Frequency::Quarterly), "Quarterly");
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Compounding::QUARTERLY).unwrap();
        assert_eq!(json, r#"{"Compound":"Quarterly"}"#);
        let back: Compounding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Compounding::QUARTERLY);

        let simple: Compounding = serde_json::from_str(r#""Simple""#).unwrap();
        assert_eq!(simple, Compounding::Simple);
    }
}
