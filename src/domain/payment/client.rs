//! Payments sub-client — order creation and verification.

use super::wire::{CreateOrderRequest, PaymentOrder, VerifyPaymentRequest, VerifyPaymentResponse};
use crate::client::PayliteClient;
use crate::error::SdkError;
use crate::flow::PaymentBackend;

/// Sub-client for payment operations.
pub struct Payments {
    pub(crate) client: PayliteClient,
}

impl Payments {
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<PaymentOrder, SdkError> {
        Ok(self
            .client
            .http
            .post("/payment/create-order", request, None)
            .await?)
    }

    pub async fn verify(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, SdkError> {
        Ok(self.client.http.post("/payment/verify", request, None).await?)
    }
}

impl PaymentBackend for Payments {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<PaymentOrder, SdkError> {
        Payments::create_order(self, request).await
    }

    async fn verify(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, SdkError> {
        Payments::verify(self, request).await
    }
}
