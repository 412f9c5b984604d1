//! Multi-year projection.
//!
//! A fixed-formula heuristic, not validated forecasting: each indicator's
//! most recent growth rate is damped to 80% and compounded forward.

use super::types::{IndicatorBreakdown, ProjectionPoint, YearProjection};

/// Fraction of the latest growth rate assumed to persist.
const DAMPING_FACTOR: f64 = 0.8;
/// Number of years projected beyond the current one.
const HORIZON_YEARS: i32 = 3;

/// Project every breakdown row `HORIZON_YEARS` years past `current_year`.
///
/// Values are rounded to the nearest integer. No floor is applied: a
/// growth rate at or below -125% flips the compounding base negative and
/// the forecast follows it.
pub(crate) fn project(breakdown: &[IndicatorBreakdown], current_year: i32) -> Vec<YearProjection> {
    (1..=HORIZON_YEARS)
        .map(|offset| {
            let points = breakdown
                .iter()
                .map(|item| {
                    let rate = item.growth / 100.0 * DAMPING_FACTOR;
                    let predicted = item.last_value * (1.0 + rate).powi(offset);
                    ProjectionPoint {
                        indicator_id: item.id.clone(),
                        indicator_name: item.name.clone(),
                        predicted_value: predicted.round(),
                    }
                })
                .collect();
            YearProjection {
                year: current_year + offset,
                points,
            }
        })
        .collect()
}
