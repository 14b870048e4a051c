//! Year-by-year projection series for charting

use serde::{Deserialize, Serialize};

use super::future_value::{lump_sum_future_value, sip_future_value, total_sip_contribution};
use crate::params::{InvestmentMode, InvestmentParameters};

/// Position of the investment at the end of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub contributed_to_date: f64,
    pub projected_value: f64,
}

/// One point per year, `1..=years`, ascending
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Build the full-horizon series
///
/// Each year is recomputed from scratch with the horizon truncated to that year,
/// so the final point always matches a direct calculation over the full horizon.
pub fn generate_series(params: &InvestmentParameters) -> ProjectionSeries {
    let points = (1..=params.years)
        .map(|year| projection_point(params, year))
        .collect();

    ProjectionSeries { points }
}

fn projection_point(params: &InvestmentParameters, year: u32) -> ProjectionPoint {
    match params.mode {
        InvestmentMode::Sip => ProjectionPoint {
            year,
            contributed_to_date: total_sip_contribution(params.amount, year),
            projected_value: sip_future_value(params.amount, year, params.annual_rate_percent),
        },
        InvestmentMode::LumpSum => ProjectionPoint {
            year,
            contributed_to_date: params.amount,
            projected_value: lump_sum_future_value(
                params.amount,
                year as f64,
                params.annual_rate_percent,
            ),
        },
    }
}
