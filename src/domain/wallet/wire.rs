//! Wire types for the `/wallet/*` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct WalletBalance {
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    /// Recipient user id or mobile number.
    pub to: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferResponse {
    pub transaction_id: String,
    pub status: String,
}
