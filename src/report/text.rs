//! Plain-text rendering of a calculation report

use std::fmt;

use super::CalculationReport;
use crate::format::{format_inr, format_percent};

pub const REPORT_TITLE: &str = "Mutual Fund Calculator Report";

pub const DISCLAIMER: &str = "Disclaimer: This calculation is based on the information provided and \
assumes a constant rate of return. Actual returns may vary and past performance is not indicative \
of future results. This is not investment advice. Please consult with a financial advisor before \
making investment decisions.";

const DISCLAIMER_WIDTH: usize = 90;

/// Parameter/value rows in display order
fn table_rows(report: &CalculationReport) -> Vec<(&'static str, String)> {
    let ratio = report
        .returns_ratio()
        .map(|r| format_percent(r, 2))
        .unwrap_or_else(|| "n/a".to_string());

    vec![
        ("Investment Type", report.investment_type.clone()),
        ("Monthly Investment", format_inr(report.monthly_investment)),
        ("Investment Period", format!("{} years", report.years)),
        ("Expected Return Rate", format!("{}% p.a.", report.expected_return)),
        ("Total Investment Amount", format_inr(report.investment_amount)),
        ("Expected Future Value", format_inr(report.future_value)),
        ("Total Expected Returns", format_inr(report.total_returns)),
        ("Returns to Investment Ratio", ratio),
    ]
}

/// Report wrapper that renders as a bordered two-column table with title and disclaimer
pub struct TextReport<'a>(pub &'a CalculationReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rows = table_rows(report);
        let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0).max("Parameter".len());
        let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0).max("Value".len());
        let rule = format!("+{}+{}+", "-".repeat(key_width + 2), "-".repeat(value_width + 2));

        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(f, "Generated on: {}", report.calculation_date.format("%d/%m/%Y"))?;
        writeln!(f)?;
        writeln!(f, "Investment Summary")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "| {:<kw$} | {:<vw$} |", "Parameter", "Value", kw = key_width, vw = value_width)?;
        writeln!(f, "{}", rule)?;
        for (key, value) in &rows {
            writeln!(f, "| {:<kw$} | {:<vw$} |", key, value, kw = key_width, vw = value_width)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        for line in wrap(DISCLAIMER, DISCLAIMER_WIDTH) {
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

/// Render the report as text
pub fn render_text(report: &CalculationReport) -> String {
    TextReport(report).to_string()
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
