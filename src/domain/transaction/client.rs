//! Transactions sub-client — list, lookup, summaries.

use super::wire::{Transaction, TransactionStats, TransactionSummary, TransactionsResponse};
use crate::client::PayliteClient;
use crate::error::SdkError;

/// Sub-client for transaction queries.
pub struct Transactions {
    pub(crate) client: PayliteClient,
}

impl Transactions {
    pub async fn list(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<TransactionsResponse, SdkError> {
        let mut endpoint = "/transactions".to_string();
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if !params.is_empty() {
            endpoint = format!("{}?{}", endpoint, params.join("&"));
        }
        Ok(self.client.http.get(&endpoint, None).await?)
    }

    pub async fn by_id(&self, id: &str) -> Result<Transaction, SdkError> {
        let endpoint = format!("/transactions/{}", urlencoding::encode(id));
        Ok(self.client.http.get(&endpoint, None).await?)
    }

    pub async fn summary(&self) -> Result<TransactionSummary, SdkError> {
        Ok(self.client.http.get("/transactions/summary", None).await?)
    }

    pub async fn recent(&self, limit: u32) -> Result<Vec<Transaction>, SdkError> {
        let endpoint = format!("/transactions/recent?limit={}", limit);
        let resp: TransactionsResponse = self.client.http.get(&endpoint, None).await?;
        Ok(resp.transactions)
    }

    pub async fn by_category(&self, category: &str) -> Result<TransactionsResponse, SdkError> {
        let endpoint = format!(
            "/transactions/category/{}",
            urlencoding::encode(category)
        );
        Ok(self.client.http.get(&endpoint, None).await?)
    }

    pub async fn search(&self, query: &str) -> Result<TransactionsResponse, SdkError> {
        let endpoint = format!("/transactions/search?q={}", urlencoding::encode(query));
        Ok(self.client.http.get(&endpoint, None).await?)
    }

    pub async fn stats(&self) -> Result<TransactionStats, SdkError> {
        Ok(self.client.http.get("/transactions/stats", None).await?)
    }
}
