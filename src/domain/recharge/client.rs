//! Recharge sub-client — one method per `/recharge/*` endpoint.

use super::wire::{
    AddFavoriteRequest, DetectOperatorRequest, Favorite, FavoritesResponse, HistoryResponse,
    OperatorDetection, Plan, PlansResponse, ProcessRechargeRequest, ProviderBalance,
    ProviderRechargeRequest, ProviderRechargeResponse, ProviderStatusResponse, RechargeRecord,
    ValidateRechargeRequest, ValidateRechargeResponse,
};
use super::{Circle, Operator, PlanCategory};
use crate::client::PayliteClient;
use crate::error::SdkError;
use crate::flow::RechargeBackend;
use crate::shared::{CircleCode, MobileNumber, OperatorCode};

/// Sub-client for recharge operations.
pub struct Recharges {
    pub(crate) client: PayliteClient,
}

impl Recharges {
    /// Pure passthrough: callers persist the returned identifiers themselves
    /// (the flow writes them into its ticket).
    pub async fn detect_operator(
        &self,
        mobile_number: &MobileNumber,
    ) -> Result<OperatorDetection, SdkError> {
        let request = DetectOperatorRequest {
            mobile_number: mobile_number.clone(),
        };
        Ok(self
            .client
            .http
            .post("/recharge/detect-operator", &request, None)
            .await?)
    }

    pub async fn operators(&self) -> Result<Vec<Operator>, SdkError> {
        Ok(self.client.http.get("/recharge/operators", None).await?)
    }

    pub async fn circles(&self) -> Result<Vec<Circle>, SdkError> {
        Ok(self.client.http.get("/recharge/circles", None).await?)
    }

    pub async fn plans(
        &self,
        operator_code: &OperatorCode,
        operator_id: &str,
        circle_code: &CircleCode,
        category: PlanCategory,
    ) -> Result<Vec<Plan>, SdkError> {
        let endpoint = format!(
            "/recharge/plans?operator_code={}&operator_id={}&circle_code={}&category={}",
            urlencoding::encode(operator_code.as_str()),
            urlencoding::encode(operator_id),
            urlencoding::encode(circle_code.as_str()),
            category.as_str()
        );
        let resp: PlansResponse = self.client.http.get(&endpoint, None).await?;
        Ok(resp.plans)
    }

    pub async fn validate(
        &self,
        request: &ValidateRechargeRequest,
    ) -> Result<ValidateRechargeResponse, SdkError> {
        Ok(self
            .client
            .http
            .post("/recharge/validate", request, None)
            .await?)
    }

    pub async fn process(
        &self,
        request: &ProcessRechargeRequest,
    ) -> Result<RechargeRecord, SdkError> {
        Ok(self
            .client
            .http
            .post("/recharge/process", request, None)
            .await?)
    }

    pub async fn history(&self) -> Result<Vec<RechargeRecord>, SdkError> {
        let resp: HistoryResponse = self.client.http.get("/recharge/history", None).await?;
        Ok(resp.recharges)
    }

    pub async fn favorites(&self) -> Result<Vec<Favorite>, SdkError> {
        let resp: FavoritesResponse = self.client.http.get("/recharge/favorites", None).await?;
        Ok(resp.favorites)
    }

    pub async fn add_favorite(&self, request: &AddFavoriteRequest) -> Result<Favorite, SdkError> {
        Ok(self
            .client
            .http
            .post("/recharge/favorites", request, None)
            .await?)
    }

    pub async fn remove_favorite(&self, id: &str) -> Result<(), SdkError> {
        let endpoint = format!("/recharge/favorites/{}", urlencoding::encode(id));
        let _: serde_json::Value = self.client.http.delete(&endpoint, None).await?;
        Ok(())
    }

    // ── Provider (KWIKAPI) pass-through ──────────────────────────────────

    pub async fn provider_balance(&self) -> Result<ProviderBalance, SdkError> {
        Ok(self
            .client
            .http
            .get("/recharge/kwikapi/balance", None)
            .await?)
    }

    /// Single-shot by contract: the provider endpoint is not guaranteed
    /// idempotent, so nothing above this layer may retry it.
    pub async fn provider_recharge(
        &self,
        request: &ProviderRechargeRequest,
    ) -> Result<ProviderRechargeResponse, SdkError> {
        Ok(self
            .client
            .http
            .post("/recharge/kwikapi/recharge", request, None)
            .await?)
    }

    pub async fn provider_status(
        &self,
        order_id: &str,
    ) -> Result<ProviderStatusResponse, SdkError> {
        let endpoint = format!(
            "/recharge/kwikapi/status?order_id={}",
            urlencoding::encode(order_id)
        );
        Ok(self.client.http.get(&endpoint, None).await?)
    }
}

impl RechargeBackend for Recharges {
    async fn detect_operator(
        &self,
        mobile_number: &MobileNumber,
    ) -> Result<OperatorDetection, SdkError> {
        Recharges::detect_operator(self, mobile_number).await
    }

    async fn plans(
        &self,
        operator_code: &OperatorCode,
        operator_id: &str,
        circle_code: &CircleCode,
        category: PlanCategory,
    ) -> Result<Vec<Plan>, SdkError> {
        Recharges::plans(self, operator_code, operator_id, circle_code, category).await
    }

    async fn provider_recharge(
        &self,
        request: &ProviderRechargeRequest,
    ) -> Result<ProviderRechargeResponse, SdkError> {
        Recharges::provider_recharge(self, request).await
    }

    async fn provider_status(&self, order_id: &str) -> Result<ProviderStatusResponse, SdkError> {
        Recharges::provider_status(self, order_id).await
    }
}
