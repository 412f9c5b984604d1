//! Analysis result types.
//!
//! Everything here is derived output: constructed fresh on each engine
//! invocation, never mutated afterwards, and consumed by the rendering
//! and export collaborators. Statuses and insight kinds serialize with
//! the labels the presentation layer renders (NAIK/TURUN/STABIL, badge
//! colors keyed on ANOMALY/TREND_DOWN, etc.).

use serde::{Deserialize, Serialize};

// ============================================================================
// Trend Classification
// ============================================================================

/// Trend classification of one indicator's year-over-year growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendStatus {
    /// Growth above +5% (naik)
    #[serde(rename = "NAIK")]
    Rising,
    /// Growth below -5% (turun)
    #[serde(rename = "TURUN")]
    Falling,
    /// Growth within the ±5% band, boundaries included (stabil)
    #[serde(rename = "STABIL")]
    Stable,
}

impl std::fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rising => write!(f, "NAIK"),
            Self::Falling => write!(f, "TURUN"),
            Self::Stable => write!(f, "STABIL"),
        }
    }
}

// ============================================================================
// Insights
// ============================================================================

/// Kind of automated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    /// Sustained upward trend
    TrendUp,
    /// Sharp decline requiring investigation
    TrendDown,
    /// Suspicious spike, data validity should be checked
    Anomaly,
    /// No notable movement
    Stable,
}

/// Severity of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// One automated observation about an indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Insight kind
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Name of the indicator the insight refers to
    pub indicator_name: String,
    /// Human-readable message
    pub message: String,
    /// Severity level
    pub severity: Severity,
}

// ============================================================================
// Recommendations
// ============================================================================

/// Urgency classification of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Needs immediate follow-up
    Urgent,
    /// Worth pursuing, not time-critical
    Suggestion,
    /// Multi-year horizon
    LongTerm,
}

/// A generated recommendation for the agency's program planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Planning area (e.g. "Strategi Pemulihan")
    pub category: String,
    /// Short title
    pub title: String,
    /// Full description
    pub description: String,
    /// Expected impact if followed
    pub expected_impact: String,
    /// Urgency classification
    pub action_type: ActionType,
}

// ============================================================================
// Per-Indicator Breakdown
// ============================================================================

/// Computed metrics for one indicator in the selected category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBreakdown {
    /// Indicator id
    pub id: String,
    /// Indicator display name
    pub name: String,
    /// Latest recorded value (0 when no values exist)
    pub last_value: f64,
    /// Year-over-year growth in percent (0 without a usable baseline)
    pub growth: f64,
    /// Trend classification
    pub status: TrendStatus,
    /// Values of up to the last 3 chronological entries
    pub trend_series: Vec<f64>,
    /// Unit label, empty when the indicator has none
    pub unit: String,
}

// ============================================================================
// SWOT
// ============================================================================

/// SWOT buckets derived from the per-indicator metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

// ============================================================================
// Projections
// ============================================================================

/// Projected value for one indicator in one future year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Indicator id (stable key for chart series)
    pub indicator_id: String,
    /// Indicator name (resolved for presentation convenience)
    pub indicator_name: String,
    /// Forecast value, rounded to the nearest integer
    pub predicted_value: f64,
}

/// All indicator projections for one future year.
///
/// Points keep breakdown order, so chart series stay aligned across years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearProjection {
    /// Projected calendar year
    pub year: i32,
    /// One point per indicator in the breakdown
    pub points: Vec<ProjectionPoint>,
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Anomaly and trend insights
    pub insights: Vec<Insight>,
    /// Three-year forecast
    pub predictions: Vec<YearProjection>,
    /// Generated recommendations (at least one)
    pub recommendations: Vec<Recommendation>,
    /// Per-indicator metrics, one row per indicator in the category
    pub breakdown: Vec<IndicatorBreakdown>,
    /// SWOT buckets
    pub swot: Swot,
    /// Executive summary sentence
    pub summary: String,
    /// Composite health score, integer in [0, 100]
    pub score: u32,
    /// Human-readable factors behind the score
    pub score_factors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_with_ui_labels() {
        assert_eq!(
            serde_json::to_string(&TrendStatus::Rising).unwrap(),
            "\"NAIK\""
        );
        assert_eq!(
            serde_json::to_string(&TrendStatus::Falling).unwrap(),
            "\"TURUN\""
        );
        assert_eq!(
            serde_json::to_string(&TrendStatus::Stable).unwrap(),
            "\"STABIL\""
        );
    }

    #[test]
    fn test_insight_kind_wire_format() {
        assert_eq!(
            serde_json::to_string(&InsightKind::TrendDown).unwrap(),
            "\"TREND_DOWN\""
        );
        assert_eq!(
            serde_json::to_string(&InsightKind::Anomaly).unwrap(),
            "\"ANOMALY\""
        );
        assert_eq!(
            serde_json::to_string(&ActionType::LongTerm).unwrap(),
            "\"LONG_TERM\""
        );
    }

    #[test]
    fn test_insight_type_field_name() {
        let insight = Insight {
            kind: InsightKind::Anomaly,
            indicator_name: "Jumlah Koleksi Buku".into(),
            message: "msg".into(),
            severity: Severity::Medium,
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["type"], "ANOMALY");
        assert_eq!(json["severity"], "MEDIUM");
    }
}
