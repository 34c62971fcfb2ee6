use finverse_core_types::{ChatHealth, FinancialSummary, TransactionsPage};
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::FinverseResult;
use crate::store::AppStore;

/// Thin client for the backend's non-streaming endpoints.
///
/// This is the dashboard data path. It writes transactions and the summary
/// to the store independently of the chat session controller; the two never
/// touch the same fields.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET /api/chat/health` — backend liveness probe.
    pub async fn health(&self) -> FinverseResult<ChatHealth> {
        let health = self
            .http
            .get(format!("{}/api/chat/health", self.config.base_url))
            .timeout(self.config.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(health)
    }

    /// `GET /api/transactions/` — the most recent `limit` records, passed
    /// through unmodified.
    pub async fn transactions(&self, limit: u32) -> FinverseResult<TransactionsPage> {
        let page = self
            .http
            .get(format!("{}/api/transactions/", self.config.base_url))
            .query(&[("limit", limit)])
            .timeout(self.config.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    /// `GET /api/transactions/summary` — aggregated spending summary.
    pub async fn summary(&self) -> FinverseResult<FinancialSummary> {
        let summary = self
            .http
            .get(format!("{}/api/transactions/summary", self.config.base_url))
            .timeout(self.config.request_timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(summary)
    }

    /// Fetches the transaction list and the summary and writes both to the
    /// store. Returns the first failure; whatever was fetched before it
    /// stays applied.
    pub async fn refresh_dashboard(&self, store: &AppStore) -> FinverseResult<()> {
        let page = self.transactions(50).await?;
        store.set_transactions(page.transactions);

        let summary = self.summary().await?;
        store.set_summary(summary);
        Ok(())
    }
}
