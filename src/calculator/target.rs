//! Reverse solver: monthly SIP needed to reach a target corpus

use log::debug;

use super::future_value::{annuity_due_factor, monthly_rate, round_currency, saturate, MONTHS_PER_YEAR};
use crate::error::{CalculatorError, Result};

/// Monthly contribution whose SIP future value equals `target_amount`
///
/// Inverts the annuity-due formula: `target / (((1 + r)^n - 1) / r * (1 + r))`,
/// dividing by `n` when the monthly rate is zero. Fails with
/// `CalculatorError::UndefinedResult` when the annuity factor is zero, which
/// happens at a -100% monthly rate or with a zero-year horizon. A factor close
/// to zero can push the quotient past `f64::MAX`; it saturates there.
pub fn required_monthly_contribution(
    target_amount: f64,
    years: u32,
    annual_rate_percent: f64,
) -> Result<f64> {
    let periods = years.saturating_mul(MONTHS_PER_YEAR);
    let factor = annuity_due_factor(monthly_rate(annual_rate_percent), periods);

    if factor == 0.0 {
        return Err(CalculatorError::UndefinedResult {
            years,
            annual_rate_percent,
        });
    }

    let monthly = round_currency(saturate(target_amount / factor));
    debug!(
        "Target {:.2} over {} years at {}% needs {:.0}/month (factor {:.6})",
        target_amount, years, annual_rate_percent, monthly, factor
    );

    Ok(monthly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::sip_future_value;

    #[test]
    fn test_inverts_reference_scenario() {
        let monthly = required_monthly_contribution(1_161_695.0, 10, 12.0).unwrap();
        assert_eq!(monthly, 5000.0);
        assert_eq!(sip_future_value(monthly, 10, 12.0), 1_161_695.0);
    }

    #[test]
    fn test_zero_rate_divides_by_months() {
        let monthly = required_monthly_contribution(600_000.0, 10, 0.0).unwrap();
        assert_eq!(monthly, 5000.0);
    }

    #[test]
    fn test_round_trip_within_rounding_tolerance() {
        for &target in &[50_000.0, 1_000_000.0, 25_000_000.0] {
            for years in [1, 5, 15, 30] {
                for &rate in &[-10.0, 0.0, 1.0, 8.5, 12.0, 30.0] {
                    let monthly = required_monthly_contribution(target, years, rate).unwrap();
                    let factor = annuity_due_factor(monthly_rate(rate), years * 12);
                    // half a unit of contribution rounding, scaled by the factor, plus FV rounding
                    let tolerance = factor / 2.0 + 1.0;

                    let fv = sip_future_value(monthly, years, rate);
                    assert!(
                        (fv - target).abs() <= tolerance,
                        "target {} years {} rate {}: got {} (tolerance {})",
                        target, years, rate, fv, tolerance
                    );
                }
            }
        }
    }

    #[test]
    fn test_minus_hundred_percent_monthly_is_undefined() {
        // -1200% p.a. is -100% per month
        let result = required_monthly_contribution(1_000_000.0, 10, -1200.0);
        assert!(matches!(result, Err(CalculatorError::UndefinedResult { years: 10, .. })));
    }

    #[test]
    fn test_near_minus_hundred_percent_saturates() {
        // Monthly rate just above -100% leaves a tiny but non-zero factor
        let monthly = required_monthly_contribution(1e306, 10, -1199.99).unwrap();
        assert!(monthly.is_finite());
        assert_eq!(monthly, f64::MAX);
    }

    #[test]
    fn test_zero_years_is_undefined() {
        assert!(matches!(
            required_monthly_contribution(1_000_000.0, 0, 12.0),
            Err(CalculatorError::UndefinedResult { .. })
        ));
        assert!(matches!(
            required_monthly_contribution(1_000_000.0, 0, 0.0),
            Err(CalculatorError::UndefinedResult { .. })
        ));
    }
}
