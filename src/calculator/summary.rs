//! Aggregated results of a calculation

use serde::{Deserialize, Serialize};

/// Net returns: future value minus what was put in
///
/// Negative when the projection used a negative rate.
pub fn calculate_returns(future_value: f64, total_contributed: f64) -> f64 {
    future_value - total_contributed
}

/// Headline figures for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationSummary {
    pub total_contributed: f64,
    pub total_returns: f64,
    pub future_value: f64,
}

impl CalculationSummary {
    pub fn new(future_value: f64, total_contributed: f64) -> Self {
        Self {
            total_contributed,
            total_returns: calculate_returns(future_value, total_contributed),
            future_value,
        }
    }

    /// Returns as a percentage of contributions, `None` when nothing was contributed
    pub fn returns_ratio(&self) -> Option<f64> {
        if self.total_contributed == 0.0 {
            None
        } else {
            Some(self.total_returns / self.total_contributed * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_returns_reference_scenario() {
        assert_eq!(calculate_returns(1_161_695.0, 600_000.0), 561_695.0);
    }

    #[test]
    fn test_summary_invariant() {
        let summary = CalculationSummary::new(310_585.0, 100_000.0);
        assert_eq!(summary.total_returns, summary.future_value - summary.total_contributed);
    }

    #[test]
    fn test_negative_returns() {
        let summary = CalculationSummary::new(80_000.0, 100_000.0);
        assert_eq!(summary.total_returns, -20_000.0);
        assert_relative_eq!(summary.returns_ratio().unwrap(), -20.0);
    }

    #[test]
    fn test_returns_ratio() {
        let summary = CalculationSummary::new(1_161_695.0, 600_000.0);
        assert_relative_eq!(summary.returns_ratio().unwrap(), 93.615_833, epsilon = 1e-5);

        let empty = CalculationSummary::new(0.0, 0.0);
        assert!(empty.returns_ratio().is_none());
    }
}
