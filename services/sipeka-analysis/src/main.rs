//! Sipeka Analysis - Indicator analysis service for the Sipeka ecosystem.
//!
//! Serves the heuristic analysis (trends, SWOT, recommendations,
//! projections, health score) over the agency's annual statistics.

use anyhow::Result;
use sipeka_analysis::AnalysisService;
use sipeka_common::config::Config;
use sipeka_common::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Start timing immediately for cold-start measurement
    let startup_start = std::time::Instant::now();

    // Load configuration
    let config = Config::load_with_env()?;

    // Initialize logging
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("Sipeka Analysis v{}", env!("CARGO_PKG_VERSION"));

    // Start the analysis service
    let service = AnalysisService::new(config);

    // Log startup timing before entering the serve loop
    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    service.start().await
}
