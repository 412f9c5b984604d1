//! Indicator analysis engine.
//!
//! A single-shot, fetch-then-compute pipeline over a snapshot of annual
//! indicator statistics:
//!
//! 1. **Filter** - restrict to indicators of the selected category
//! 2. **Metrics** - latest value, year-over-year growth, trend series,
//!    classification per indicator
//! 3. **Aggregation** - SWOT buckets, insights, recommendations, health
//!    score
//! 4. **Projection** - damped compound-growth forecast three years out
//!
//! The engine is pure given its inputs. It performs no I/O and reads no
//! clocks; the projection base year is an explicit parameter so results
//! are reproducible in tests.

mod aggregation;
mod metrics;
mod projection;
mod types;

pub use types::{
    ActionType, AnalysisResult, IndicatorBreakdown, Insight, InsightKind, ProjectionPoint,
    Recommendation, Severity, Swot, TrendStatus, YearProjection,
};

use sipeka_common::{Indicator, StatCategory, YearlyValue};
use thiserror::Error;

use self::aggregation::Aggregation;
use self::metrics::CategoryAggregate;

/// Errors produced by the analysis engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The selected category has no indicators; downstream stages never
    /// run on an empty set.
    #[error("no indicators for category {0}")]
    NoDataForCategory(StatCategory),
}

/// Run the full analysis for one category snapshot.
///
/// `current_year` anchors the projection years; the HTTP layer fills it
/// from the calendar, tests pin it.
pub fn analyze(
    category: StatCategory,
    indicators: &[Indicator],
    values: &[YearlyValue],
    current_year: i32,
) -> Result<AnalysisResult, EngineError> {
    let selected: Vec<&Indicator> = indicators
        .iter()
        .filter(|indicator| indicator.category == category)
        .collect();

    if selected.is_empty() {
        return Err(EngineError::NoDataForCategory(category));
    }

    let breakdown: Vec<IndicatorBreakdown> = selected
        .iter()
        .map(|indicator| metrics::breakdown_for(indicator, values))
        .collect();

    let aggregate = CategoryAggregate::from_breakdown(&breakdown);
    let Aggregation {
        swot,
        insights,
        anomaly_count,
    } = aggregation::derive_swot_insights(&breakdown);

    let recommendations = aggregation::recommendations(category, &aggregate, &swot);
    let predictions = projection::project(&breakdown, current_year);

    let avg_growth = aggregate.avg_growth();
    let score = aggregation::health_score(avg_growth, anomaly_count);
    let summary = aggregation::summary_text(category, score, avg_growth, &aggregate);
    let score_factors = aggregation::score_factors(avg_growth, anomaly_count, &aggregate);

    tracing::debug!(
        category = %category,
        indicators = breakdown.len(),
        insights = insights.len(),
        score,
        "Analysis complete"
    );

    Ok(AnalysisResult {
        insights,
        predictions,
        recommendations,
        breakdown,
        swot,
        summary,
        score,
        score_factors,
    })
}
