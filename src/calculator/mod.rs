//! Projection engine for SIP and lump sum investments
//!
//! All functions are pure: identical inputs always give identical outputs.

mod future_value;
mod series;
mod summary;
mod target;

pub use future_value::{
    annuity_due_factor, lump_sum_future_value, monthly_rate, round_currency, saturate,
    sip_future_value, total_sip_contribution, MONTHS_PER_YEAR, RATE_EPSILON,
};
pub use series::{generate_series, ProjectionPoint, ProjectionSeries};
pub use summary::{calculate_returns, CalculationSummary};
pub use target::required_monthly_contribution;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::params::{InvestmentMode, InvestmentParameters};

/// Everything derived from one set of parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub parameters: InvestmentParameters,
    pub summary: CalculationSummary,
    pub series: ProjectionSeries,
}

/// Future value for the selected mode over the full horizon
pub fn future_value(params: &InvestmentParameters) -> f64 {
    match params.mode {
        InvestmentMode::Sip => sip_future_value(params.amount, params.years, params.annual_rate_percent),
        InvestmentMode::LumpSum => {
            lump_sum_future_value(params.amount, params.years as f64, params.annual_rate_percent)
        }
    }
}

/// Run the summary and the yearly series for `params`
pub fn calculate(params: &InvestmentParameters) -> Calculation {
    let summary = CalculationSummary::new(future_value(params), params.total_contributed());
    let series = generate_series(params);

    debug!(
        "{} of {:.2} for {} years at {}%: invested {:.0}, value {:.0}",
        params.mode.label(),
        params.amount,
        params.years,
        params.annual_rate_percent,
        summary.total_contributed,
        summary.future_value
    );

    Calculation {
        parameters: params.clone(),
        summary,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_sip() {
        let calc = calculate(&InvestmentParameters::sip(5000.0, 10, 12.0));

        assert_eq!(calc.summary.future_value, 1_161_695.0);
        assert_eq!(calc.summary.total_contributed, 600_000.0);
        assert_eq!(calc.summary.total_returns, 561_695.0);
        assert_eq!(calc.series.len(), 10);
        assert_eq!(calc.series.last().unwrap().projected_value, calc.summary.future_value);
    }

    #[test]
    fn test_calculate_lump_sum() {
        let calc = calculate(&InvestmentParameters::lump_sum(100_000.0, 10, 12.0));

        assert_eq!(calc.summary.future_value, 310_585.0);
        assert_eq!(calc.summary.total_contributed, 100_000.0);
        assert_eq!(calc.summary.total_returns, 210_585.0);
        assert_eq!(calc.series.last().unwrap().projected_value, calc.summary.future_value);
    }

    #[test]
    fn test_final_point_consistency_across_inputs() {
        for &rate in &[-20.0, 0.0, 0.5, 7.0, 15.0, 30.0] {
            for years in [1, 2, 10, 30] {
                for params in [
                    InvestmentParameters::sip(2500.0, years, rate),
                    InvestmentParameters::lump_sum(250_000.0, years, rate),
                ] {
                    let calc = calculate(&params);
                    let last = calc.series.last().unwrap();
                    assert!((last.projected_value - calc.summary.future_value).abs() <= 1.0);
                    assert_eq!(last.contributed_to_date, calc.summary.total_contributed);
                }
            }
        }
    }
}
