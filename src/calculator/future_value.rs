//! Closed-form future value calculations
//!
//! Rates are nominal annual percentages (12.0 means 12% p.a.). SIP contributions
//! compound monthly and are made at the start of each month (annuity-due); lump
//! sums compound annually. Results are rounded to whole currency units.
//!
//! Non-finite inputs are not validated and propagate to the result. Infinite
//! intermediate values saturate to `f64::MAX` with their sign preserved.

/// Monthly rates smaller than this are treated as zero to avoid dividing by ~0
pub const RATE_EPSILON: f64 = 1e-10;

/// Compounding periods per year for SIP contributions
pub const MONTHS_PER_YEAR: u32 = 12;

/// Convert a nominal annual percentage into a monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / MONTHS_PER_YEAR as f64 / 100.0
}

/// Round to the nearest whole unit, halves toward positive infinity
pub fn round_currency(amount: f64) -> f64 {
    (amount + 0.5).floor()
}

/// Clamp infinities to the largest finite value of the same sign; NaN passes through
pub fn saturate(value: f64) -> f64 {
    if value.is_infinite() {
        f64::MAX.copysign(value)
    } else {
        value
    }
}

/// Future value of one unit contributed at the start of each of `periods` periods
///
/// `((1 + r)^n - 1) / r * (1 + r)`, or `n` when the periodic rate is zero.
pub fn annuity_due_factor(periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate.abs() < RATE_EPSILON {
        return periods as f64;
    }

    let growth = (1.0 + periodic_rate).powf(periods as f64);
    saturate((growth - 1.0) / periodic_rate * (1.0 + periodic_rate))
}

/// Projected value of a monthly SIP after `years`
///
/// ```
/// use fund_calculator::calculator::sip_future_value;
///
/// assert_eq!(sip_future_value(5000.0, 10, 12.0), 1_161_695.0);
/// ```
pub fn sip_future_value(monthly_amount: f64, years: u32, annual_rate_percent: f64) -> f64 {
    let periods = years.saturating_mul(MONTHS_PER_YEAR);
    let factor = annuity_due_factor(monthly_rate(annual_rate_percent), periods);

    round_currency(saturate(monthly_amount * factor))
}

/// Projected value of a single deposit after `years` (fractional years allowed)
pub fn lump_sum_future_value(principal: f64, years: f64, annual_rate_percent: f64) -> f64 {
    let growth = saturate((1.0 + annual_rate_percent / 100.0).powf(years));

    round_currency(saturate(principal * growth))
}

/// Total cash contributed by a SIP over `years`
pub fn total_sip_contribution(monthly_amount: f64, years: u32) -> f64 {
    monthly_amount * years as f64 * MONTHS_PER_YEAR as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sip_reference_scenario() {
        // 5000/month for 10 years at 12% p.a.
        assert_eq!(sip_future_value(5000.0, 10, 12.0), 1_161_695.0);
    }

    #[test]
    fn test_sip_zero_amount_is_zero() {
        for &rate in &[-50.0, 0.0, 1.0, 12.0, 30.0, 500.0] {
            for years in [1, 5, 30] {
                assert_eq!(sip_future_value(0.0, years, rate), 0.0);
            }
        }
    }

    #[test]
    fn test_sip_zero_rate_is_linear() {
        assert_eq!(sip_future_value(5000.0, 10, 0.0), 600_000.0);
        assert_eq!(sip_future_value(1234.0, 3, 0.0), 1234.0 * 36.0);
        assert_eq!(sip_future_value(5000.0, 10, 0.0), total_sip_contribution(5000.0, 10));
    }

    #[test]
    fn test_sip_single_month_annuity_due() {
        // One year at 12%: every contribution earns at least one month
        let fv = sip_future_value(1000.0, 1, 12.0);
        let expected = 1000.0 * ((1.01_f64.powi(12) - 1.0) / 0.01) * 1.01;
        assert_eq!(fv, expected.round());
    }

    #[test]
    fn test_sip_negative_rate_decays() {
        let fv = sip_future_value(5000.0, 10, -5.0);
        assert!(fv < total_sip_contribution(5000.0, 10));
        assert!(fv > 0.0);
    }

    #[test]
    fn test_lump_sum_reference_scenario() {
        assert_eq!(lump_sum_future_value(100_000.0, 10.0, 12.0), 310_585.0);
    }

    #[test]
    fn test_lump_sum_zero_years_is_identity() {
        assert_eq!(lump_sum_future_value(100_000.0, 0.0, 12.0), 100_000.0);
        assert_eq!(lump_sum_future_value(100_000.0, 0.0, -40.0), 100_000.0);
    }

    #[test]
    fn test_lump_sum_fractional_years() {
        let fv = lump_sum_future_value(100_000.0, 0.5, 21.0);
        // sqrt(1.21) = 1.1
        assert_relative_eq!(fv, 110_000.0, epsilon = 1.0);
    }

    #[test]
    fn test_round_currency_halves_up() {
        assert_eq!(round_currency(2.5), 3.0);
        assert_eq!(round_currency(-2.5), -2.0);
        assert_eq!(round_currency(1_161_695.38), 1_161_695.0);
    }

    #[test]
    fn test_overflow_saturates() {
        let fv = sip_future_value(1_000_000.0, 1000, 1000.0);
        assert_eq!(fv, f64::MAX);

        let fv = lump_sum_future_value(1e300, 1000.0, 1000.0);
        assert_eq!(fv, f64::MAX);
    }

    #[test]
    fn test_annuity_factor_tiny_rate_falls_back_to_periods() {
        assert_eq!(annuity_due_factor(1e-300, 120), 120.0);
        assert_eq!(annuity_due_factor(0.0, 0), 0.0);
    }

    #[test]
    fn test_monthly_rate_conversion() {
        assert_relative_eq!(monthly_rate(12.0), 0.01);
        assert_relative_eq!(monthly_rate(6.0), 0.005);
    }
}
