//! Error types for the calculator library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// The annuity factor collapsed to zero, so no contribution can reach the target
    #[error("undefined result: annuity factor is zero for {years} years at {annual_rate_percent}% p.a.")]
    UndefinedResult { years: u32, annual_rate_percent: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
