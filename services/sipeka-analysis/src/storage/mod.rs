//! Storage access for annual statistics.
//!
//! The agency's indicator data lives in a remote Supabase project; this
//! module provides the read side the analysis engine consumes. The engine
//! filters by category and year locally, so the store only needs two
//! whole-table listings.

mod supabase;

pub use supabase::SupabaseStore;

use async_trait::async_trait;
use sipeka_common::{Indicator, Result, YearlyValue};

/// Read access to indicators and their yearly values.
///
/// Retries, if any, belong to implementations; callers treat a failure as
/// fatal for the current analysis run.
#[async_trait]
pub trait IndicatorStore: Send + Sync {
    /// List all indicators, all categories.
    async fn list_indicators(&self) -> Result<Vec<Indicator>>;

    /// List all yearly values, all indicators and years.
    async fn list_yearly_values(&self) -> Result<Vec<YearlyValue>>;
}
