//! Calculator defaults, input limits and environment configuration
//!
//! Defaults can be overridden with environment variables:
//!   FUND_CALC_MONTHLY_INVESTMENT, FUND_CALC_LUMP_SUM, FUND_CALC_YEARS,
//!   FUND_CALC_EXPECTED_RETURN, FUND_CALC_EMAIL_DELAY_MS

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

use crate::delivery::DEFAULT_SIMULATED_DELAY;
use crate::params::{InvestmentMode, InvestmentParameters};

pub const DEFAULT_MONTHLY_INVESTMENT: f64 = 5000.0;
pub const DEFAULT_LUMP_SUM: f64 = 100_000.0;
pub const DEFAULT_YEARS: u32 = 10;
pub const DEFAULT_EXPECTED_RETURN: f64 = 12.0;

/// Ranges offered by the input form
///
/// The engine accepts anything; these are applied only where user input enters.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLimits {
    pub monthly_investment: RangeInclusive<f64>,
    pub lump_sum: RangeInclusive<f64>,
    pub years: RangeInclusive<u32>,
    pub expected_return: RangeInclusive<f64>,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            monthly_investment: 500.0..=100_000.0,
            lump_sum: 1000.0..=10_000_000.0,
            years: 1..=30,
            expected_return: 1.0..=30.0,
        }
    }
}

impl InputLimits {
    /// Apply the form's clamping: amounts floored at zero, years and rate clamped
    ///
    /// Never panics: with inverted bounds the upper bound wins, and a NaN bound is ignored.
    pub fn clamp(&self, params: &InvestmentParameters) -> InvestmentParameters {
        InvestmentParameters {
            mode: params.mode,
            amount: params.amount.max(0.0),
            years: params.years.max(*self.years.start()).min(*self.years.end()),
            annual_rate_percent: params
                .annual_rate_percent
                .max(*self.expected_return.start())
                .min(*self.expected_return.end()),
        }
    }

    /// Whether the amount sits inside the suggested range for its mode
    pub fn amount_in_range(&self, params: &InvestmentParameters) -> bool {
        match params.mode {
            InvestmentMode::Sip => self.monthly_investment.contains(&params.amount),
            InvestmentMode::LumpSum => self.lump_sum.contains(&params.amount),
        }
    }
}

/// Runtime configuration for the calculator front ends
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub monthly_investment: f64,
    pub lump_sum: f64,
    pub years: u32,
    pub expected_return: f64,
    pub email_delay: Duration,
    pub limits: InputLimits,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            monthly_investment: DEFAULT_MONTHLY_INVESTMENT,
            lump_sum: DEFAULT_LUMP_SUM,
            years: DEFAULT_YEARS,
            expected_return: DEFAULT_EXPECTED_RETURN,
            email_delay: DEFAULT_SIMULATED_DELAY,
            limits: InputLimits::default(),
        }
    }
}

impl CalculatorConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to the default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let delay_ms = read_var(
            &lookup,
            "FUND_CALC_EMAIL_DELAY_MS",
            defaults.email_delay.as_millis() as u64,
        );

        Self {
            monthly_investment: read_var(&lookup, "FUND_CALC_MONTHLY_INVESTMENT", defaults.monthly_investment),
            lump_sum: read_var(&lookup, "FUND_CALC_LUMP_SUM", defaults.lump_sum),
            years: read_var(&lookup, "FUND_CALC_YEARS", defaults.years),
            expected_return: read_var(&lookup, "FUND_CALC_EXPECTED_RETURN", defaults.expected_return),
            email_delay: Duration::from_millis(delay_ms),
            limits: defaults.limits,
        }
    }

    /// Default parameters for a mode
    pub fn default_parameters(&self, mode: InvestmentMode) -> InvestmentParameters {
        match mode {
            InvestmentMode::Sip => {
                InvestmentParameters::sip(self.monthly_investment, self.years, self.expected_return)
            }
            InvestmentMode::LumpSum => {
                InvestmentParameters::lump_sum(self.lump_sum, self.years, self.expected_return)
            }
        }
    }
}

fn read_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::from_lookup(|_| None);
        assert_eq!(config.monthly_investment, 5000.0);
        assert_eq!(config.lump_sum, 100_000.0);
        assert_eq!(config.years, 10);
        assert_eq!(config.expected_return, 12.0);
        assert_eq!(config.email_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let config = CalculatorConfig::from_lookup(lookup_from(&[
            ("FUND_CALC_MONTHLY_INVESTMENT", "2500"),
            ("FUND_CALC_YEARS", " 20 "),
            ("FUND_CALC_EXPECTED_RETURN", "lots"),
            ("FUND_CALC_EMAIL_DELAY_MS", "0"),
        ]));

        assert_eq!(config.monthly_investment, 2500.0);
        assert_eq!(config.years, 20);
        assert_eq!(config.expected_return, 12.0);
        assert_eq!(config.email_delay, Duration::ZERO);
    }

    #[test]
    fn test_default_parameters_per_mode() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.default_parameters(InvestmentMode::Sip),
            InvestmentParameters::sip(5000.0, 10, 12.0)
        );
        assert_eq!(
            config.default_parameters(InvestmentMode::LumpSum),
            InvestmentParameters::lump_sum(100_000.0, 10, 12.0)
        );
    }

    #[test]
    fn test_clamp_mirrors_form() {
        let limits = InputLimits::default();

        let clamped = limits.clamp(&InvestmentParameters::sip(-100.0, 45, 0.0));
        assert_eq!(clamped.amount, 0.0);
        assert_eq!(clamped.years, 30);
        assert_eq!(clamped.annual_rate_percent, 1.0);

        let clamped = limits.clamp(&InvestmentParameters::lump_sum(5000.0, 0, 45.0));
        assert_eq!(clamped.years, 1);
        assert_eq!(clamped.annual_rate_percent, 30.0);
        assert_eq!(clamped.mode, InvestmentMode::LumpSum);
    }

    #[test]
    fn test_clamp_tolerates_bad_limits() {
        let limits = InputLimits {
            years: 30..=1,
            expected_return: f64::NAN..=20.0,
            ..InputLimits::default()
        };

        let clamped = limits.clamp(&InvestmentParameters::sip(5000.0, 10, 25.0));
        assert_eq!(clamped.years, 1);
        assert_eq!(clamped.annual_rate_percent, 20.0);

        let inverted_rate = InputLimits {
            expected_return: 30.0..=1.0,
            ..InputLimits::default()
        };
        assert_eq!(inverted_rate.clamp(&InvestmentParameters::sip(5000.0, 10, 12.0)).annual_rate_percent, 1.0);
    }

    #[test]
    fn test_amount_in_range() {
        let limits = InputLimits::default();
        assert!(limits.amount_in_range(&InvestmentParameters::sip(500.0, 1, 12.0)));
        assert!(!limits.amount_in_range(&InvestmentParameters::sip(200_000.0, 1, 12.0)));
        assert!(limits.amount_in_range(&InvestmentParameters::lump_sum(200_000.0, 1, 12.0)));
        assert!(!limits.amount_in_range(&InvestmentParameters::lump_sum(500.0, 1, 12.0)));
    }
}
