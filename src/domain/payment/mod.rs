//! Payment domain — backend order creation/verification plus the gateway
//! widget seam.

pub mod client;
pub mod gateway;
pub mod wire;

pub use client::Payments;
pub use gateway::{CheckoutOptions, GatewayEvent, GatewayPayment, PaymentGateway};
pub use wire::{CreateOrderRequest, PaymentOrder, VerifyPaymentRequest, VerifyPaymentResponse};
