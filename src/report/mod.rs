//! Calculation reports for download and delivery
//!
//! A report carries the parameters and headline figures of one calculation.
//! It renders as a plain-text table, and the yearly series exports as CSV or JSON.

mod export;
mod text;

pub use export::{to_json, write_json, write_series_csv, write_series_csv_path, ReportPayload};
pub use text::{render_text, TextReport, DISCLAIMER, REPORT_TITLE};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculator::{Calculation, CalculationSummary};
use crate::params::InvestmentMode;

/// Snapshot of one calculation for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub investment_type: String,
    pub monthly_investment: f64,
    pub investment_amount: f64,
    pub years: u32,
    pub expected_return: f64,
    pub future_value: f64,
    pub total_returns: f64,
    pub calculation_date: NaiveDate,
}

impl CalculationReport {
    pub fn from_calculation(calculation: &Calculation, calculation_date: NaiveDate) -> Self {
        let params = &calculation.parameters;
        Self {
            investment_type: params.mode.label().to_string(),
            monthly_investment: params.monthly_investment(),
            investment_amount: calculation.summary.total_contributed,
            years: params.years,
            expected_return: params.annual_rate_percent,
            future_value: calculation.summary.future_value,
            total_returns: calculation.summary.total_returns,
            calculation_date,
        }
    }

    /// Report dated with the local calendar day
    pub fn today(calculation: &Calculation) -> Self {
        Self::from_calculation(calculation, Local::now().date_naive())
    }

    pub fn is_sip(&self) -> bool {
        self.investment_type == InvestmentMode::Sip.label()
    }

    /// Returns as a percentage of the amount invested
    pub fn returns_ratio(&self) -> Option<f64> {
        CalculationSummary::new(self.future_value, self.investment_amount).returns_ratio()
    }
}
