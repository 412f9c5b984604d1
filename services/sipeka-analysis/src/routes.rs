//! HTTP routes for the analysis service.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sipeka_common::{Indicator, StatCategory};

use crate::engine::{self, AnalysisResult, EngineError};
use crate::AnalysisState;

/// User-facing notice for a category without indicators.
const NO_DATA_NOTICE: &str = "Belum ada indikator untuk kategori ini.";

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct IndicatorsResponse {
    pub indicators: Vec<Indicator>,
    pub count: usize,
}

/// Query parameters for an analysis run.
#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    /// Category to analyze (Perpustakaan | Kearsipan | Umum)
    pub category: String,
    /// Base year for projections; defaults to the current calendar year
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(err: sipeka_common::Error) -> ErrorReply {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: "sipeka-analysis".to_string(),
    })
}

/// List all indicators from the store
pub async fn list_indicators(
    State(state): State<Arc<AnalysisState>>,
) -> Result<Json<IndicatorsResponse>, ErrorReply> {
    let indicators = state.store.list_indicators().await.map_err(error_reply)?;
    let count = indicators.len();

    Ok(Json(IndicatorsResponse { indicators, count }))
}

/// Run the analysis engine for one category.
///
/// Fetches the full snapshot from the store, then computes. A category
/// without indicators is a 404 carrying the notice the UI displays.
pub async fn run_analysis(
    State(state): State<Arc<AnalysisState>>,
    Query(query): Query<AnalysisQuery>,
) -> Result<Json<AnalysisResult>, ErrorReply> {
    let category: StatCategory = query.category.parse().map_err(error_reply)?;
    let current_year = query.year.unwrap_or_else(|| chrono::Local::now().year());

    let indicators = state.store.list_indicators().await.map_err(error_reply)?;
    let values = state.store.list_yearly_values().await.map_err(error_reply)?;

    tracing::info!(
        category = %category,
        year = current_year,
        indicators = indicators.len(),
        values = values.len(),
        "Running indicator analysis"
    );

    match engine::analyze(category, &indicators, &values, current_year) {
        Ok(result) => Ok(Json(result)),
        Err(EngineError::NoDataForCategory(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: NO_DATA_NOTICE.to_string(),
            }),
        )),
    }
}
