//! Sipeka Analysis Library
//!
//! Heuristic analysis service for the annual performance indicators of the
//! library and archives agency. Consumes indicator snapshots from the
//! shared Supabase store and serves structured analysis results to the
//! dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 sipeka-analysis (Rust Service)              │
//! │                          :4451                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐     │
//! │  │  Supabase    │──▶│  Analysis    │──▶│  HTTP        │     │
//! │  │  Store       │   │  Engine      │   │  Routes      │     │
//! │  └──────────────┘   └──────────────┘   └──────────────┘     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Concepts
//!
//! ## Fetch-then-compute
//! One invocation fetches a full snapshot (indicators + yearly values),
//! then runs the engine to completion. No streaming, no caching across
//! runs, no mid-computation cancellation.
//!
//! ## Heuristic, not statistical
//! Trend classification, SWOT, and projections come from fixed-threshold
//! rules and a damped compound-growth formula. There is no model fitting.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod engine;
pub mod routes;
pub mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use sipeka_common::config::Config;

use crate::storage::{IndicatorStore, SupabaseStore};

/// Default HTTP port for the analysis service
const DEFAULT_PORT: u16 = 4451;

/// Analysis service state
pub struct AnalysisState {
    /// Configuration
    pub config: Config,
    /// Indicator store client
    pub store: Arc<dyn IndicatorStore>,
}

impl AnalysisState {
    /// Create state backed by the configured Supabase store
    pub fn new(config: Config) -> Self {
        let store: Arc<dyn IndicatorStore> = Arc::new(SupabaseStore::new(&config.storage));
        Self { config, store }
    }

    /// Create state with a custom store implementation
    pub fn with_store(config: Config, store: Arc<dyn IndicatorStore>) -> Self {
        Self { config, store }
    }
}

/// Main analysis service
pub struct AnalysisService {
    state: Arc<AnalysisState>,
}

impl AnalysisService {
    /// Create a new analysis service
    pub fn new(config: Config) -> Self {
        let state = Arc::new(AnalysisState::new(config));
        Self { state }
    }

    /// Start the analysis service
    pub async fn start(self) -> Result<()> {
        let port = self
            .state
            .config
            .services
            .analysis
            .port
            .unwrap_or(DEFAULT_PORT);
        let host = self.state.config.network.bind.clone();

        // Build HTTP routes. CORS is permissive: the dashboard SPA calls
        // this service directly from the browser.
        let app = Router::new()
            .route("/health", get(routes::health))
            .route("/api/v1/indicators", get(routes::list_indicators))
            .route("/api/v1/analysis", get(routes::run_analysis))
            .layer(TimeoutLayer::new(Duration::from_secs(30)))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone());

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        tracing::info!(address = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
