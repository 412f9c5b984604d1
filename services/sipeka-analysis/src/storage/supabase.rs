//! Supabase (PostgREST) client for the statistics tables.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sipeka_common::config::StorageConfig;
use sipeka_common::{Error, Indicator, Result, YearlyValue};

use super::IndicatorStore;

const INDICATORS_TABLE: &str = "statistic_indicators";
const YEARLY_VALUES_TABLE: &str = "statistic_yearly_values";

/// Read-only PostgREST client for the agency's Supabase project.
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Create a client from the storage configuration.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.anon_key.clone(),
        }
    }

    /// Fetch every row of a table through the PostgREST endpoint.
    async fn fetch_rows<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = format!("{}/rest/v1/{}?select=*", self.base_url, table);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Error::External(format!("Storage request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::External(format!(
                "Storage returned status {status} for table {table}"
            )));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| Error::External(format!("Invalid storage payload for {table}: {e}")))
    }
}

#[async_trait]
impl IndicatorStore for SupabaseStore {
    async fn list_indicators(&self) -> Result<Vec<Indicator>> {
        self.fetch_rows(INDICATORS_TABLE).await
    }

    async fn list_yearly_values(&self) -> Result<Vec<YearlyValue>> {
        self.fetch_rows(YEARLY_VALUES_TABLE).await
    }
}
