//! The payment-gateway widget seam.
//!
//! The real widget is a third-party script running in the host UI; the SDK
//! only defines the contract. Hosts implement [`PaymentGateway`] by opening
//! their checkout surface and resolving with what the widget reported.

use super::wire::PaymentOrder;
use crate::error::SdkError;

/// What the checkout widget is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOptions {
    pub key_id: String,
    pub order_id: String,
    /// Minor currency units (paise).
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub prefill_contact: String,
    pub theme_color: String,
}

impl CheckoutOptions {
    pub fn for_order(order: &PaymentOrder, prefill_contact: &str) -> Self {
        Self {
            key_id: order.razorpay_key_id.clone(),
            order_id: order.razorpay_order_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            name: "Paylite".to_string(),
            description: "Mobile recharge".to_string(),
            prefill_contact: prefill_contact.to_string(),
            theme_color: "#0f62fe".to_string(),
        }
    }
}

/// What the widget reported back.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayEvent {
    /// The user paid; the gateway handed back its ids and signature.
    Completed(GatewayPayment),
    /// The user closed the widget without paying.
    Dismissed,
}

/// The success callback payload from the gateway widget.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayPayment {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Host-implemented checkout surface.
#[allow(async_fn_in_trait)]
pub trait PaymentGateway {
    /// Open the widget for `options` and resolve once the user completes or
    /// dismisses it. Errors mean the widget could not open at all.
    async fn open(&self, options: &CheckoutOptions) -> Result<GatewayEvent, SdkError>;
}
