//! Wire types for the `/payment/*` endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    /// Amount in minor currency units (paise).
    pub amount: u64,
    pub currency: String,
    /// Correlates the order with the recharge flow that produced it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

/// A server-side payment order, consumed immediately by the gateway widget.
/// Never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentOrder {
    pub razorpay_order_id: String,
    pub razorpay_key_id: String,
    pub amount: u64,
    pub currency: String,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentResponse {
    pub verified: bool,
    #[serde(default)]
    pub message: Option<String>,
}
