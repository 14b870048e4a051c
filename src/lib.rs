//! Fund Calculator - projection engine for mutual fund investments
//!
//! This library provides:
//! - Future value of monthly SIP contributions and lump sum deposits
//! - Year-by-year projection series for charting
//! - Reverse solving for the monthly SIP needed to reach a target
//! - Rupee formatting, text/CSV/JSON report export and simulated email delivery
//! - Batch and rate-sweep scenarios

pub mod calculator;
pub mod config;
pub mod delivery;
pub mod error;
pub mod format;
pub mod params;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use calculator::{
    calculate, generate_series, lump_sum_future_value, required_monthly_contribution,
    sip_future_value, Calculation, CalculationSummary, ProjectionPoint, ProjectionSeries,
};
pub use config::{CalculatorConfig, InputLimits};
pub use delivery::{DeliveryError, ReportDelivery, SimulatedDelivery};
pub use error::{CalculatorError, Result};
pub use format::format_inr;
pub use params::{InvestmentMode, InvestmentParameters};
pub use report::CalculationReport;
pub use scenario::ScenarioRunner;
