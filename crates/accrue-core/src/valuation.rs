//! Net present value and internal rate of return over parallel slices.
//!
//! These functions work directly on amounts and times without building a
//! [`Stream`](crate::Stream); the stream methods reduce to them.

use std::cell::RefCell;

use accrue_math::solvers::{NewtonSolver, SecantSolver, Solver};
use log::{debug, warn};

use crate::accumulation::Accumulation;
use crate::config::{IrrConfig, RootMethod};
use crate::error::{AccrueError, AccrueResult};
use crate::types::Compounding;

/// Result of an IRR solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrResult {
    /// The rate at which NPV is zero.
    pub rate: f64,
    /// Solver iterations used.
    pub iterations: u32,
    /// NPV at `rate`.
    pub residual: f64,
}

fn check_lengths(cashflows: &[f64], timestamps: &[f64]) -> AccrueResult<()> {
    if cashflows.len() != timestamps.len() {
        return Err(AccrueError::invalid_input(format!(
            "{} cashflows but {} timestamps",
            cashflows.len(),
            timestamps.len()
        )));
    }
    Ok(())
}

fn has_sign_change(cashflows: &[f64]) -> bool {
    cashflows.iter().any(|&x| x > 0.0) && cashflows.iter().any(|&x| x < 0.0)
}

/// Each cashflow divided by the growth factor at its timestamp.
pub fn discounted_values(
    accumulation: &Accumulation,
    cashflows: &[f64],
    timestamps: &[f64],
) -> AccrueResult<Vec<f64>> {
    check_lengths(cashflows, timestamps)?;
    cashflows
        .iter()
        .zip(timestamps)
        .map(|(amount, &t)| accumulation.fv(t).map(|growth| amount / growth))
        .collect()
}

/// Net present value of `cashflows` at `interest_rate`.
///
/// When `timestamps` is `None` the cashflows are one year apart starting at
/// zero (`0, 1, 2, …`). An empty set of cashflows is worth zero.
///
/// # Example
///
/// ```rust
/// use accrue_core::{valuation::npv, Compounding};
///
/// // -100 today, 110 in a year: zero NPV at 10%
/// let value = npv(0.1, &[-100.0, 110.0], None, Compounding::ANNUAL).unwrap();
/// assert!(value.abs() < 1e-12);
/// ```
pub fn npv(
    interest_rate: f64,
    cashflows: &[f64],
    timestamps: Option<&[f64]>,
    compounding: Compounding,
) -> AccrueResult<f64> {
    let accumulation = Accumulation::new(interest_rate, compounding);
    match timestamps {
        Some(timestamps) => Ok(discounted_values(&accumulation, cashflows, timestamps)?
            .into_iter()
            .sum()),
        None => cashflows
            .iter()
            .enumerate()
            .map(|(period, amount)| {
                accumulation
                    .fv(period as f64)
                    .map(|growth| amount / growth)
            })
            .sum(),
    }
}

/// Internal rate of return of `cashflows` paid at `timestamps`, using the
/// default solver settings from [`IrrConfig`].
pub fn irr(cashflows: &[f64], timestamps: &[f64], compounding: Compounding) -> AccrueResult<f64> {
    let config = IrrConfig::default().with_compounding(compounding);
    irr_with_config(cashflows, timestamps, &config).map(|result| result.rate)
}

/// Internal rate of return with explicit configuration.
///
/// Finds `r` with `npv(r, cashflows, timestamps) = 0`, starting from
/// `config.initial_guess`. No bracketing or step damping is done, so two
/// preconditions are the caller's:
///
/// * the cashflows should contain at least one inflow and one outflow.
///   Without a sign change the iterate runs off towards an infinite rate and
///   the solve fails with [`AccrueError::NonConvergence`].
/// * the root should be reachable from the initial guess. A deeply negative
///   root (say -90% annually, as for `-100` now and `10` in a year) makes
///   the first Newton step from 0.1 overshoot below -100%, which ends in
///   [`AccrueError::DomainError`]; start closer to the root instead.
///
/// # Errors
///
/// * [`AccrueError::InvalidInput`] for an invalid configuration, empty
///   cashflows or mismatched slice lengths
/// * [`AccrueError::DomainError`] when an iterate leaves the domain of the
///   compounding convention (for example a rate at or below -100% annually)
/// * [`AccrueError::NonConvergence`] when the solver gives up, including
///   when the iterate grows until the growth factors overflow
pub fn irr_with_config(
    cashflows: &[f64],
    timestamps: &[f64],
    config: &IrrConfig,
) -> AccrueResult<IrrResult> {
    config.validate()?;
    if cashflows.is_empty() {
        return Err(AccrueError::invalid_input(
            "IRR requires at least one cashflow",
        ));
    }
    check_lengths(cashflows, timestamps)?;
    if !has_sign_change(cashflows) {
        warn!(
            "IRR of {} cashflows without a sign change is unlikely to converge",
            cashflows.len()
        );
    }

    // The solver works on plain f64 functions; the first evaluation outside
    // the convention's domain is parked here and reported in place of the
    // solver's failure. An overflowing growth factor is left to the solver,
    // which reports it as non-convergence.
    let evaluation_error: RefCell<Option<AccrueError>> = RefCell::new(None);
    let objective = |rate: f64| match npv(rate, cashflows, Some(timestamps), config.compounding) {
        Ok(value) => value,
        Err(err) => {
            let defined = timestamps
                .iter()
                .all(|&t| config.compounding.is_defined(rate, t));
            if !defined {
                evaluation_error.borrow_mut().get_or_insert(err);
            }
            f64::NAN
        }
    };

    let solver_config = config.solver_config();
    let no_derivative: Option<fn(f64) -> f64> = None;
    let outcome = match config.method {
        RootMethod::Newton => NewtonSolver.solve(
            &objective,
            no_derivative,
            config.initial_guess,
            None,
            &solver_config,
        ),
        RootMethod::Secant => SecantSolver.solve(
            &objective,
            no_derivative,
            config.initial_guess,
            None,
            &solver_config,
        ),
    };

    match outcome {
        Ok(result) => {
            debug!(
                "IRR {} ({}, {}) after {} iterations, residual {:e}",
                result.root, config.compounding, config.method, result.iterations, result.residual
            );
            Ok(IrrResult {
                rate: result.root,
                iterations: result.iterations,
                residual: result.residual,
            })
        }
        Err(err) => {
            if let Some(evaluation) = evaluation_error.borrow_mut().take() {
                warn!("IRR solve aborted: {evaluation}");
                return Err(evaluation);
            }
            warn!("IRR solve failed ({}, {}): {err}", config.compounding, config.method);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const AMOUNTS: [f64; 4] = [-100.0, 7.0, 7.0, 100.0];
    const TIMES: [f64; 4] = [0.0, 0.5, 1.0, 1.0];

    #[test]
    fn test_npv_empty_is_zero() {
        assert_eq!(npv(0.1, &[], None, Compounding::ANNUAL).unwrap(), 0.0);
        assert_eq!(npv(0.1, &[], Some(&[]), Compounding::Simple).unwrap(), 0.0);
    }

    #[test]
    fn test_npv_default_timestamps() {
        let implicit = npv(0.05, &[-10.0, 4.0, 4.0, 4.0], None, Compounding::ANNUAL).unwrap();
        let explicit = npv(
            0.05,
            &[-10.0, 4.0, 4.0, 4.0],
            Some(&[0.0, 1.0, 2.0, 3.0]),
            Compounding::ANNUAL,
        )
        .unwrap();

        assert_relative_eq!(implicit, explicit, epsilon = 1e-14);
    }

    #[test]
    fn test_npv_length_mismatch() {
        let result = npv(0.05, &[1.0, 2.0], Some(&[1.0]), Compounding::ANNUAL);
        assert!(matches!(result, Err(AccrueError::InvalidInput { .. })));
    }

    #[test]
    fn test_discounted_values() {
        let values =
            discounted_values(&Accumulation::annual(0.1), &[110.0, 121.0], &[1.0, 2.0]).unwrap();
        assert_relative_eq!(values[0], 100.0, epsilon = 1e-10);
        assert_relative_eq!(values[1], 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_irr_root_zeroes_npv() {
        for compounding in crate::accumulation::ALL_CONVENTIONS {
            let result = irr_with_config(
                &AMOUNTS,
                &TIMES,
                &IrrConfig::default().with_compounding(compounding),
            )
            .unwrap();
            let value = npv(result.rate, &AMOUNTS, Some(&TIMES), compounding).unwrap();

            assert!(value.abs() < 1e-8, "{compounding}: npv {value}");
            assert!(result.iterations <= 50);
        }
    }

    #[test]
    fn test_secant_matches_newton() {
        let config = IrrConfig::default().with_compounding(Compounding::SEMI_ANNUAL);
        let newton = irr_with_config(&AMOUNTS, &TIMES, &config).unwrap();
        let secant =
            irr_with_config(&AMOUNTS, &TIMES, &config.with_method(RootMethod::Secant)).unwrap();

        assert_relative_eq!(newton.rate, 0.14, epsilon = 1e-9);
        assert_relative_eq!(secant.rate, newton.rate, epsilon = 1e-9);
    }

    #[test]
    fn test_irr_empty_rejected() {
        let result = irr(&[], &[], Compounding::ANNUAL);
        assert!(matches!(result, Err(AccrueError::InvalidInput { .. })));
    }

    #[test]
    fn test_irr_iteration_cap() {
        let config = IrrConfig::default()
            .with_compounding(Compounding::SEMI_ANNUAL)
            .with_max_iterations(1);

        match irr_with_config(&AMOUNTS, &TIMES, &config) {
            Err(AccrueError::NonConvergence {
                iterations,
                last_estimate,
                ..
            }) => {
                assert_eq!(iterations, 1);
                assert!(last_estimate.is_finite());
            }
            other => panic!("expected NonConvergence, got {other:?}"),
        }
    }

    #[test]
    fn test_irr_domain_error_surfaces() {
        // Starting below -100% puts the very first evaluation out of domain
        let config = IrrConfig::default().with_initial_guess(-1.5);

        let result = irr_with_config(&AMOUNTS, &TIMES, &config);
        assert!(matches!(result, Err(AccrueError::DomainError { .. })));
    }

    #[test]
    fn test_irr_all_positive_does_not_converge() {
        let result = irr(&[5.0, 5.0, 105.0], &[1.0, 2.0, 3.0], Compounding::ANNUAL);
        assert!(matches!(result, Err(AccrueError::NonConvergence { .. })));
    }

    #[test]
    fn test_irr_long_all_positive_stream_does_not_converge() {
        // Monthly coupons over 30 years: the iterate grows until the growth
        // factors overflow
        let mut amounts = vec![5.0 / 12.0; 360];
        amounts.push(100.0);
        let mut times: Vec<f64> = (1..=360).map(|k| f64::from(k) / 12.0).collect();
        times.push(30.0);

        for method in [RootMethod::Newton, RootMethod::Secant] {
            let config = IrrConfig::default()
                .with_compounding(Compounding::MONTHLY)
                .with_method(method);
            match irr_with_config(&amounts, &times, &config) {
                Err(AccrueError::NonConvergence { last_estimate, .. }) => {
                    assert!(last_estimate > 0.1, "{method}: {last_estimate}");
                }
                other => panic!("{method}: expected NonConvergence, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_irr_deep_negative_root_needs_close_guess() {
        let amounts = [-100.0, 10.0];
        let times = [0.0, 1.0];

        let from_default = irr(&amounts, &times, Compounding::ANNUAL);
        assert!(matches!(from_default, Err(AccrueError::DomainError { .. })));

        let config = IrrConfig::default().with_initial_guess(-0.85);
        let result = irr_with_config(&amounts, &times, &config).unwrap();
        assert_relative_eq!(result.rate, -0.9, epsilon = 1e-9);
    }

    #[test]
    fn test_sign_change() {
        assert!(has_sign_change(&AMOUNTS));
        assert!(!has_sign_change(&[5.0, 5.0, 105.0]));
        assert!(!has_sign_change(&[-1.0, 0.0, -2.0]));
        assert!(!has_sign_change(&[]));
    }

    #[test]
    fn test_irr_continuous() {
        // -100 now, 100·e^0.08 in one year
        let amounts = [-100.0, 100.0 * 0.08_f64.exp()];
        let rate = irr(&amounts, &[0.0, 1.0], Compounding::Continuous).unwrap();
        assert_relative_eq!(rate, 0.08, epsilon = 1e-9);
    }
}
