//! Wallet sub-client.

use super::wire::{TransferRequest, TransferResponse, WalletBalance};
use crate::client::PayliteClient;
use crate::domain::transaction::TransactionsResponse;
use crate::error::SdkError;

/// Sub-client for wallet operations.
pub struct Wallet {
    pub(crate) client: PayliteClient,
}

impl Wallet {
    pub async fn balance(&self) -> Result<WalletBalance, SdkError> {
        Ok(self.client.http.get("/wallet/balance", None).await?)
    }

    pub async fn transactions(&self) -> Result<TransactionsResponse, SdkError> {
        Ok(self.client.http.get("/wallet/transactions", None).await?)
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse, SdkError> {
        Ok(self.client.http.post("/wallet/transfer", request, None).await?)
    }
}
