//! Coupon schedules and bond construction from terms.

use accrue_core::{Frequency, Payment};
use serde::{Deserialize, Serialize};

use crate::bond::Bond;
use crate::error::{BondError, BondResult};

/// Face value used when none is given.
pub const DEFAULT_PAR: f64 = 100.0;

const MONTHS_PER_YEAR: u32 = 12;

/// Level payments of `amount` at the end of each period over
/// `years` years and `months` months.
///
/// Payments fall at `k / m` for `k = 1..=n`, where `m` is the number of
/// periods per year and `n = (12·years + months)·m / 12`. A trailing stub
/// shorter than one period gets no payment.
///
/// ```rust
/// use accrue_bonds::schedule::annuity;
/// use accrue_core::Frequency;
///
/// let payments = annuity(3.5, Frequency::SemiAnnual, 1, 6);
/// let times: Vec<f64> = payments.iter().map(|p| p.t).collect();
/// assert_eq!(times, vec![0.5, 1.0, 1.5]);
/// ```
#[must_use]
pub fn annuity(amount: f64, frequency: Frequency, years: u32, months: u32) -> Vec<Payment> {
    let m = frequency.periods_per_year();
    let total_months = MONTHS_PER_YEAR * years + months;
    let periods = total_months * m / MONTHS_PER_YEAR;

    (1..=periods)
        .map(|k| Payment::new(amount, f64::from(k) / f64::from(m)))
        .collect()
}

/// Builds a level-coupon bond.
///
/// Each coupon is `par · coupon_rate / coupons_per_year`, paid on the
/// [`annuity`] schedule; `par` is redeemed at `years + months / 12`.
///
/// # Errors
///
/// * [`BondError::InvalidSpec`] for a non-positive par, a non-finite coupon
///   rate or a zero term
/// * [`BondError::Core`] wrapping `InvalidFrequency` unless
///   `coupons_per_year` is 1, 2, 4 or 12
pub fn make_bond(
    coupon_rate: f64,
    coupons_per_year: u32,
    years: u32,
    months: u32,
    par: f64,
) -> BondResult<Bond> {
    if !(par.is_finite() && par > 0.0) {
        return Err(BondError::invalid_spec(format!(
            "par must be positive, got {par}"
        )));
    }
    if !coupon_rate.is_finite() {
        return Err(BondError::invalid_spec(format!(
            "coupon rate must be finite, got {coupon_rate}"
        )));
    }
    let total_months = MONTHS_PER_YEAR * years + months;
    if total_months == 0 {
        return Err(BondError::invalid_spec("term must be at least one month"));
    }

    let frequency = Frequency::from_periods_per_year(coupons_per_year)?;
    let coupon = par * coupon_rate / f64::from(coupons_per_year);
    let coupons = annuity(coupon, frequency, years, months);
    let maturity = f64::from(total_months) / f64::from(MONTHS_PER_YEAR);

    Bond::new(coupons_per_year, Payment::new(par, maturity), coupons)
}

/// Serializable description of a level-coupon bond.
///
/// ```rust
/// use accrue_bonds::schedule::BondTerms;
///
/// let terms: BondTerms =
///     serde_json::from_str(r#"{"coupon_rate": 0.05, "coupons_per_year": 2, "years": 10}"#)
///         .unwrap();
/// assert_eq!(terms.par, 100.0);
/// assert_eq!(terms.build().unwrap().coupons().len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Annual coupon rate (0.05 for 5%).
    pub coupon_rate: f64,

    /// Coupons per year (1, 2, 4 or 12).
    pub coupons_per_year: u32,

    /// Whole years to maturity.
    pub years: u32,

    /// Additional months to maturity.
    #[serde(default)]
    pub months: u32,

    /// Face value.
    #[serde(default = "default_par")]
    pub par: f64,
}

fn default_par() -> f64 {
    DEFAULT_PAR
}

impl BondTerms {
    /// Terms at the default par and a whole number of years.
    #[must_use]
    pub fn new(coupon_rate: f64, coupons_per_year: u32, years: u32) -> Self {
        Self {
            coupon_rate,
            coupons_per_year,
            years,
            months: 0,
            par: DEFAULT_PAR,
        }
    }

    /// Sets the additional months.
    #[must_use]
    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_par(mut self, par: f64) -> Self {
        self.par = par;
        self
    }

    /// Builds the bond. See [`make_bond`].
    pub fn build(&self) -> BondResult<Bond> {
        make_bond(
            self.coupon_rate,
            self.coupons_per_year,
            self.years,
            self.months,
            self.par,
        )
    }
}
