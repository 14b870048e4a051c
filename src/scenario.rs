//! Scenario runner for batch calculations
//!
//! Runs many parameter sets (or one parameter set across many rates) in
//! parallel. Results always come back in input order.

use log::{info, warn};
use rayon::prelude::*;

use crate::calculator::{calculate, Calculation};
use crate::config::InputLimits;
use crate::params::InvestmentParameters;

/// Batch runner with optional form-style clamping of inputs
///
/// # Example
/// ```
/// use fund_calculator::{InvestmentParameters, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = InvestmentParameters::sip(5000.0, 10, 12.0);
/// let results = runner.run_rate_sweep(&base, &[8.0, 10.0, 12.0]);
/// assert_eq!(results[2].summary.future_value, 1_161_695.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    limits: Option<InputLimits>,
}

impl ScenarioRunner {
    /// Runner that passes parameters through untouched
    pub fn new() -> Self {
        Self { limits: None }
    }

    /// Runner that clamps every parameter set before calculating
    pub fn with_limits(limits: InputLimits) -> Self {
        Self { limits: Some(limits) }
    }

    pub fn limits(&self) -> Option<&InputLimits> {
        self.limits.as_ref()
    }

    fn prepare(&self, params: &InvestmentParameters) -> InvestmentParameters {
        match &self.limits {
            Some(limits) => {
                let clamped = limits.clamp(params);
                if clamped != *params {
                    warn!("Clamped {:?} to {:?}", params, clamped);
                }
                clamped
            }
            None => params.clone(),
        }
    }

    /// Calculate a single parameter set
    pub fn run(&self, params: &InvestmentParameters) -> Calculation {
        calculate(&self.prepare(params))
    }

    /// Calculate many parameter sets in parallel
    pub fn run_batch(&self, params: &[InvestmentParameters]) -> Vec<Calculation> {
        info!("Running {} calculations", params.len());
        params.par_iter().map(|p| self.run(p)).collect()
    }

    /// Calculate `base` once per annual rate
    pub fn run_rate_sweep(&self, base: &InvestmentParameters, rates: &[f64]) -> Vec<Calculation> {
        let scenarios: Vec<InvestmentParameters> = rates.iter().map(|&r| base.with_rate(r)).collect();
        self.run_batch(&scenarios)
    }
}

/// Upper bound on the number of rates a single sweep may produce
pub const MAX_SWEEP_RATES: usize = 10_000;

/// Rates from `from` to `to` inclusive in increments of `step`
///
/// Returns an empty list for non-finite bounds, a non-positive step, an empty
/// range, or a range that would exceed `MAX_SWEEP_RATES` entries.
pub fn rate_range(from: f64, to: f64, step: f64) -> Vec<f64> {
    if !from.is_finite() || !to.is_finite() || !step.is_finite() || step <= 0.0 || from > to {
        return Vec::new();
    }

    let intervals = ((to - from) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_SWEEP_RATES as f64 {
        warn!("Rate range {}..={} step {} exceeds {} rates", from, to, step, MAX_SWEEP_RATES);
        return Vec::new();
    }

    let count = (intervals as usize).saturating_add(1);
    (0..count).map(|i| from + step * i as f64).collect()
}
