use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page of raw transaction records from `GET /api/transactions/`.
///
/// Records are passed through to the render layer unmodified, so they stay
/// untyped here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionsPage {
    #[serde(default)]
    pub transactions: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// Aggregated spending summary from `GET /api/transactions/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub net: f64,
    /// Per-category spend, in the order sent by the backend (descending).
    #[serde(default)]
    pub categories: IndexMap<String, f64>,
    #[serde(default)]
    pub transaction_count: u64,
    #[serde(default)]
    pub flagged_count: u64,
}

/// Response of `GET /api/chat/health`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub orchestrator: bool,
    #[serde(default)]
    pub transactions_loaded: u64,
    #[serde(default)]
    pub user_profile_loaded: bool,
}
