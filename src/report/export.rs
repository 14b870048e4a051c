//! CSV and JSON export of reports and yearly series

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use super::CalculationReport;
use crate::calculator::ProjectionSeries;
use crate::error::Result;

/// CSV row for the chart feed
#[derive(Debug, Serialize)]
struct SeriesRow {
    #[serde(rename = "Year")]
    year: u32,
    #[serde(rename = "Invested")]
    invested: f64,
    #[serde(rename = "FutureValue")]
    future_value: f64,
}

/// Write the series as `Year,Invested,FutureValue` rows
pub fn write_series_csv<W: Write>(writer: W, series: &ProjectionSeries) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in series {
        csv_writer.serialize(SeriesRow {
            year: point.year,
            invested: point.contributed_to_date,
            future_value: point.projected_value,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the series CSV to a file
pub fn write_series_csv_path<P: AsRef<Path>>(path: P, series: &ProjectionSeries) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_series_csv(file, series)?;
    info!("Series ({} years) written to {}", series.len(), path.as_ref().display());
    Ok(())
}

/// JSON document combining the report and its series
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub report: &'a CalculationReport,
    pub returns_ratio_pct: Option<f64>,
    pub series: &'a ProjectionSeries,
}

/// Pretty-printed JSON for API or file output
pub fn to_json(report: &CalculationReport, series: &ProjectionSeries) -> Result<String> {
    let payload = ReportPayload {
        report,
        returns_ratio_pct: report.returns_ratio(),
        series,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Write the JSON document to any writer
pub fn write_json<W: Write>(mut writer: W, report: &CalculationReport, series: &ProjectionSeries) -> Result<()> {
    let json = to_json(report, series)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}
