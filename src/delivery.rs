//! Report delivery collaborators
//!
//! Only a simulated transport exists: it validates the recipient, waits, and
//! acknowledges without sending anything. Real transports plug in behind
//! [`ReportDelivery`].

use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{info, warn};
use regex::Regex;
use thiserror::Error;

use crate::report::CalculationReport;

/// Delay used by the simulated transport, matching the web form's spinner
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("invalid email address: {0}")]
    InvalidRecipient(String),

    #[error("delivery failed: {0}")]
    Transport(String),
}

/// Acknowledgement of a delivered report
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub recipient: String,
    pub subject: String,
    pub sent_at: DateTime<Utc>,
}

/// Something that can send a report to an email address
pub trait ReportDelivery {
    fn deliver(
        &self,
        recipient: &str,
        report: &CalculationReport,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Check that `recipient` looks like an email address
pub fn validate_recipient(recipient: &str) -> Result<(), DeliveryError> {
    if email_pattern().is_match(recipient) {
        Ok(())
    } else {
        Err(DeliveryError::InvalidRecipient(recipient.to_string()))
    }
}

/// Subject line for a delivered report
pub fn report_subject(report: &CalculationReport) -> String {
    format!(
        "{} calculation report ({} years at {}% p.a.)",
        report.investment_type, report.years, report.expected_return
    )
}

/// Transport that pretends to send after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl ReportDelivery for SimulatedDelivery {
    fn deliver(
        &self,
        recipient: &str,
        report: &CalculationReport,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        if let Err(e) = validate_recipient(recipient) {
            warn!("Rejected report delivery: {}", e);
            return Err(e);
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let receipt = DeliveryReceipt {
            recipient: recipient.to_string(),
            subject: report_subject(report),
            sent_at: Utc::now(),
        };
        info!("Simulated delivery of '{}' to {}", receipt.subject, receipt.recipient);

        Ok(receipt)
    }
}
