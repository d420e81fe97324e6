//! Wire types for the `/transactions/*` endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A ledger entry. Never mutated client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionSummary {
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionStats {
    pub total_transactions: u64,
    pub total_amount: Decimal,
    #[serde(default)]
    pub success_rate: Option<f64>,
}
