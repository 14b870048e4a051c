//! Investment parameters supplied by the caller

use serde::{Deserialize, Serialize};

/// How money enters the investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentMode {
    /// Systematic Investment Plan: fixed contribution at the start of every month
    Sip,
    /// Single deposit at time zero
    LumpSum,
}

impl InvestmentMode {
    /// Label used in summaries and exported reports
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentMode::Sip => "SIP (Monthly)",
            InvestmentMode::LumpSum => "Lump Sum",
        }
    }
}

/// Inputs for a single calculation
///
/// `amount` is the monthly contribution in SIP mode and the deposit in lump sum mode.
/// Nothing here is validated; range limits are applied by the caller (see `config::InputLimits`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentParameters {
    pub mode: InvestmentMode,
    pub amount: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
}

impl InvestmentParameters {
    pub fn sip(monthly_amount: f64, years: u32, annual_rate_percent: f64) -> Self {
        Self {
            mode: InvestmentMode::Sip,
            amount: monthly_amount,
            years,
            annual_rate_percent,
        }
    }

    pub fn lump_sum(principal: f64, years: u32, annual_rate_percent: f64) -> Self {
        Self {
            mode: InvestmentMode::LumpSum,
            amount: principal,
            years,
            annual_rate_percent,
        }
    }

    /// Cash put in over the whole horizon, excluding growth
    pub fn total_contributed(&self) -> f64 {
        match self.mode {
            InvestmentMode::Sip => crate::calculator::total_sip_contribution(self.amount, self.years),
            InvestmentMode::LumpSum => self.amount,
        }
    }

    /// Monthly contribution, or 0 for a lump sum
    pub fn monthly_investment(&self) -> f64 {
        match self.mode {
            InvestmentMode::Sip => self.amount,
            InvestmentMode::LumpSum => 0.0,
        }
    }

    /// Same parameters with a different rate (used by rate sweeps)
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..self.clone()
        }
    }
}
