//! Coupon bonds as payment streams.
//!
//! A [`Bond`] is a list of coupons plus one redemption payment. Pricing is the
//! NPV of those payments; yield to maturity is the IRR of the same payments
//! preceded by the purchase price paid at time zero.

use accrue_core::config::IrrConfig;
use accrue_core::valuation::IrrResult;
use accrue_core::{AccrueError, Compounding, Frequency, Payment, Stream};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Largest number of decimal places a quote can carry.
pub const MAX_QUOTE_DECIMALS: u32 = 28;

/// A bond: periodic coupons and a final redemption.
///
/// The two directions use different units. [`ytm`](Self::ytm) takes a
/// quoted price per 100 of redemption amount, while [`price`](Self::price)
/// returns the NPV in currency units. They only agree for a redemption of
/// 100; for a face value of 1000, `price(ytm(98.0))` is 980.
///
/// # Example
///
/// ```rust
/// use accrue_bonds::Bond;
/// use accrue_core::Payment;
///
/// let bond = Bond::new(
///     2,
///     Payment::new(100.0, 1.0),
///     vec![Payment::new(7.0, 0.5), Payment::new(7.0, 1.0)],
/// )
/// .unwrap();
///
/// let ytm = bond.ytm(100.0).unwrap();
/// assert!((ytm - 0.14).abs() < 1e-8);
/// assert!((bond.price(ytm).unwrap() - 100.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    coupons: Vec<Payment>,
    redemption: Payment,
    /// Coupon frequency when the bond was built from one
    frequency: Option<Frequency>,
    compounding: Compounding,
}

impl Bond {
    /// Creates a bond paying `coupons_per_year` coupons a year, compounded
    /// at the same frequency.
    ///
    /// # Errors
    ///
    /// Returns [`AccrueError::InvalidFrequency`] (wrapped) unless
    /// `coupons_per_year` is 1, 2, 4 or 12.
    pub fn new(
        coupons_per_year: u32,
        redemption: Payment,
        coupons: Vec<Payment>,
    ) -> BondResult<Self> {
        let frequency = Frequency::from_periods_per_year(coupons_per_year)?;
        Ok(Self {
            coupons,
            redemption,
            frequency: Some(frequency),
            compounding: frequency.into(),
        })
    }

    /// Creates a bond with an explicit default compounding convention.
    #[must_use]
    pub fn with_compounding(
        compounding: Compounding,
        redemption: Payment,
        coupons: Vec<Payment>,
    ) -> Self {
        Self {
            coupons,
            redemption,
            frequency: None,
            compounding,
        }
    }

    /// Returns the coupon payments.
    #[must_use]
    pub fn coupons(&self) -> &[Payment] {
        &self.coupons
    }

    /// Returns the redemption payment.
    #[must_use]
    pub fn redemption(&self) -> Payment {
        self.redemption
    }

    /// Returns the coupon frequency, if the bond was built from one.
    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    /// Returns the compounding used by [`price`](Self::price) and
    /// [`ytm`](Self::ytm).
    #[must_use]
    pub fn default_compounding(&self) -> Compounding {
        self.compounding
    }

    /// Returns the redemption time in years.
    #[must_use]
    pub fn maturity(&self) -> f64 {
        self.redemption.t
    }

    /// All payments: the coupons in order, then the redemption.
    #[must_use]
    pub fn payments(&self) -> Vec<Payment> {
        let mut payments = Vec::with_capacity(self.coupons.len() + 1);
        payments.extend_from_slice(&self.coupons);
        payments.push(self.redemption);
        payments
    }

    /// A new stream over [`payments`](Self::payments).
    ///
    /// Each call builds a fresh stream, so mutating it leaves the bond
    /// untouched.
    #[must_use]
    pub fn stream(&self) -> Stream {
        Stream::from_payments(self.payments())
    }

    /// Price at `rate` under the bond's default compounding, in currency
    /// units (not scaled to a redemption of 100).
    pub fn price(&self, rate: f64) -> BondResult<f64> {
        self.price_with(rate, self.compounding)
    }

    /// Price at `rate` under `compounding`: the NPV of the bond's payments.
    pub fn price_with(&self, rate: f64, compounding: Compounding) -> BondResult<f64> {
        Ok(self.stream().npv(rate, compounding)?)
    }

    /// Yield to maturity for `price`, quoted per 100 of redemption amount,
    /// under the bond's default compounding.
    pub fn ytm(&self, price: f64) -> BondResult<f64> {
        self.ytm_with(price, self.compounding)
    }

    /// Yield to maturity for `price` under `compounding`.
    pub fn ytm_with(&self, price: f64, compounding: Compounding) -> BondResult<f64> {
        let config = IrrConfig::default().with_compounding(compounding);
        self.ytm_with_config(price, &config).map(|result| result.rate)
    }

    /// Yield to maturity with explicit solver configuration.
    ///
    /// Buying at `price` costs `price / 100 · redemption.amount` at time zero;
    /// the yield is the IRR of that outlay followed by the bond's payments.
    pub fn ytm_with_config(&self, price: f64, config: &IrrConfig) -> BondResult<IrrResult> {
        if !price.is_finite() {
            let reason = format!("price must be finite, got {price}");
            return Err(AccrueError::invalid_input(reason).into());
        }

        let outlay = price / 100.0 * self.redemption.amount;
        let mut stream = Stream::new();
        stream.add(-outlay, 0.0);
        stream.extend(self.payments());

        let result = stream.irr_with_config(config)?;
        debug!(
            "ytm {} for price {price} ({} payments, {})",
            result.rate,
            self.coupons.len() + 1,
            config.compounding
        );
        Ok(result)
    }

    /// [`price`](Self::price) rounded half away from zero to `decimal_places`.
    pub fn price_quote(&self, rate: f64, decimal_places: u32) -> BondResult<Decimal> {
        quote(self.price(rate)?, decimal_places)
    }

    /// [`ytm`](Self::ytm) rounded half away from zero to `decimal_places`.
    pub fn ytm_quote(&self, price: f64, decimal_places: u32) -> BondResult<Decimal> {
        quote(self.ytm(price)?, decimal_places)
    }
}

fn quote(value: f64, decimal_places: u32) -> BondResult<Decimal> {
    let invalid = || BondError::InvalidQuote {
        value,
        decimal_places,
    };
    if decimal_places > MAX_QUOTE_DECIMALS {
        return Err(invalid());
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(invalid)
}
