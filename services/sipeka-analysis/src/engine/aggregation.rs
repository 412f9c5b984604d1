//! Category-level aggregation: SWOT buckets, insights, recommendations,
//! and the composite health score.
//!
//! All thresholds are fixed product decisions. The bands deliberately
//! overlap: an indicator past the anomaly band also lands in the strength
//! band, and a sharp drop lands in both the weakness and threat bands.

use sipeka_common::StatCategory;

use super::metrics::CategoryAggregate;
use super::types::{
    ActionType, IndicatorBreakdown, Insight, InsightKind, Recommendation, Severity, Swot,
};

/// Growth above this is a strength (percent).
const STRENGTH_THRESHOLD: f64 = 15.0;
/// Growth below this is a weakness (percent).
const WEAKNESS_THRESHOLD: f64 = -10.0;
/// Growth above this flags an anomaly and an opportunity (percent).
const ANOMALY_THRESHOLD: f64 = 30.0;
/// Growth below this flags a sharp drop and a threat (percent).
const SHARP_DROP_THRESHOLD: f64 = -20.0;

/// Health score baseline.
const BASE_SCORE: f64 = 70.0;
/// Score points per percent of average growth.
const GROWTH_WEIGHT: f64 = 2.0;
/// Score points deducted per detected anomaly.
const ANOMALY_PENALTY: f64 = 5.0;

/// SWOT buckets and insights derived in one pass over the breakdown.
#[derive(Debug, Clone)]
pub(crate) struct Aggregation {
    pub swot: Swot,
    pub insights: Vec<Insight>,
    pub anomaly_count: usize,
}

/// Derive SWOT entries and anomaly/trend insights from the breakdown rows.
pub(crate) fn derive_swot_insights(breakdown: &[IndicatorBreakdown]) -> Aggregation {
    let mut swot = Swot::default();
    let mut insights = Vec::new();
    let mut anomaly_count = 0;

    for item in breakdown {
        if item.growth > STRENGTH_THRESHOLD {
            swot.strengths.push(format!(
                "Pertumbuhan {} sangat positif (+{:.1}%)",
                item.name, item.growth
            ));
        } else if item.growth < WEAKNESS_THRESHOLD {
            swot.weaknesses.push(format!(
                "Penurunan kinerja pada {} ({:.1}%)",
                item.name, item.growth
            ));
        }

        if item.growth > ANOMALY_THRESHOLD {
            insights.push(Insight {
                kind: InsightKind::Anomaly,
                indicator_name: item.name.clone(),
                message: format!(
                    "Lonjakan signifikan {:.1}% terdeteksi. Pastikan validitas data.",
                    item.growth
                ),
                severity: Severity::Medium,
            });
            anomaly_count += 1;
            swot.opportunities.push(format!(
                "Momentum pertumbuhan {} dapat dimaksimalkan.",
                item.name
            ));
        } else if item.growth < SHARP_DROP_THRESHOLD {
            insights.push(Insight {
                kind: InsightKind::TrendDown,
                indicator_name: item.name.clone(),
                message: format!(
                    "Penurunan tajam {:.1}%. Perlu investigasi penyebab.",
                    item.growth.abs()
                ),
                severity: Severity::High,
            });
            swot.threats.push(format!(
                "Risiko stagnasi jangka panjang pada {}.",
                item.name
            ));
        }
    }

    Aggregation {
        swot,
        insights,
        anomaly_count,
    }
}

/// Generate recommendations from the category totals and SWOT buckets.
///
/// Exactly one of the first two fires; a threat-mitigation entry is added
/// whenever any threat was detected.
pub(crate) fn recommendations(
    category: StatCategory,
    aggregate: &CategoryAggregate,
    swot: &Swot,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if aggregate.falling > aggregate.rising {
        recommendations.push(Recommendation {
            category: "Strategi Pemulihan".to_string(),
            title: "Evaluasi Program".to_string(),
            description: format!(
                "Mayoritas indikator ({}) mengalami penurunan. Lakukan evaluasi mendalam pada program kerja terkait {}.",
                aggregate.falling, category
            ),
            expected_impact: "Menghentikan tren penurunan dan menstabilkan kinerja.".to_string(),
            action_type: ActionType::Urgent,
        });
    } else {
        let top_gainer = aggregate
            .top_gainer
            .as_ref()
            .map(|best| best.name.as_str())
            .unwrap_or("");
        recommendations.push(Recommendation {
            category: "Pengembangan".to_string(),
            title: "Ekspansi Program Unggulan".to_string(),
            description: format!(
                "Indikator seperti {} tumbuh pesat. Alokasikan sumber daya tambahan untuk mempertahankan momentum.",
                top_gainer
            ),
            expected_impact: "Akselerasi pencapaian target tahun depan.".to_string(),
            action_type: ActionType::Suggestion,
        });
    }

    if !swot.threats.is_empty() {
        recommendations.push(Recommendation {
            category: "Mitigasi Risiko".to_string(),
            title: "Penanganan Indikator Kritis".to_string(),
            description: format!(
                "Terdapat {} ancaman kinerja yang terdeteksi. Segera susun rencana tindak lanjut.",
                swot.threats.len()
            ),
            expected_impact: "Mencegah kegagalan pencapaian target strategis.".to_string(),
            action_type: ActionType::Urgent,
        });
    }

    recommendations
}

/// Composite health score: baseline plus weighted average growth minus
/// anomaly penalties, rounded and clamped to [0, 100].
pub(crate) fn health_score(avg_growth: f64, anomaly_count: usize) -> u32 {
    let raw = BASE_SCORE + avg_growth * GROWTH_WEIGHT - anomaly_count as f64 * ANOMALY_PENALTY;
    raw.round().clamp(0.0, 100.0) as u32
}

/// Executive summary sentence for the rendering layer.
pub(crate) fn summary_text(
    category: StatCategory,
    score: u32,
    avg_growth: f64,
    aggregate: &CategoryAggregate,
) -> String {
    format!(
        "Analisis AI untuk kategori {} menunjukkan skor kesehatan {}/100. Tren rata-rata pertumbuhan adalah {:.1}%. Ditemukan {} indikator naik dan {} indikator turun.",
        category, score, avg_growth, aggregate.rising, aggregate.falling
    )
}

/// Fixed factor strings reporting what drove the score.
pub(crate) fn score_factors(
    avg_growth: f64,
    anomaly_count: usize,
    aggregate: &CategoryAggregate,
) -> Vec<String> {
    vec![
        format!("Pertumbuhan rata-rata: {:.1}%", avg_growth),
        format!("Anomali terdeteksi: {}", anomaly_count),
        format!("Rasio Naik/Turun: {}/{}", aggregate.rising, aggregate.falling),
    ]
}
