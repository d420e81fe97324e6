//! Wire types for the `/recharge/*` endpoints, including the provider
//! (KWIKAPI) pass-through endpoints.

use super::ProviderStatus;
use crate::shared::{CircleCode, MobileNumber, OperatorCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Detection ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct DetectOperatorRequest {
    pub mobile_number: MobileNumber,
}

/// What detection yields: everything the plans and checkout steps need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorDetection {
    pub operator_code: OperatorCode,
    pub operator_id: String,
    pub operator_name: String,
    pub circle_code: CircleCode,
    pub circle_name: String,
}

// ─── Catalogs ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operator {
    pub code: OperatorCode,
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circle {
    pub code: CircleCode,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talktime: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlansResponse {
    pub plans: Vec<Plan>,
}

// ─── Validation / processing ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ValidateRechargeRequest {
    pub mobile_number: MobileNumber,
    pub operator_code: OperatorCode,
    pub circle_code: CircleCode,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRechargeResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessRechargeRequest {
    pub mobile_number: MobileNumber,
    pub operator_id: String,
    pub circle_code: CircleCode,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// A recharge as the backend records it (history entries).
#[derive(Debug, Clone, Deserialize)]
pub struct RechargeRecord {
    pub id: String,
    pub mobile_number: String,
    pub operator_code: OperatorCode,
    pub amount: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub recharges: Vec<RechargeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub mobile_number: String,
    pub operator_code: OperatorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddFavoriteRequest {
    pub mobile_number: MobileNumber,
    pub operator_code: OperatorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

// ─── Provider (KWIKAPI) pass-through ─────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderBalance {
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderRechargeRequest {
    /// Client-minted correlation id; the status endpoint is keyed by it.
    pub order_id: String,
    pub mobile_number: String,
    pub operator_code: OperatorCode,
    pub circle_code: CircleCode,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRechargeResponse {
    pub status: ProviderStatus,
    #[serde(default)]
    pub provider_order_id: Option<String>,
    #[serde(default)]
    pub operator_ref: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderStatusResponse {
    pub status: ProviderStatus,
    #[serde(default)]
    pub provider_order_id: Option<String>,
    #[serde(default)]
    pub operator_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_status_parses_screaming_case() {
        let resp: ProviderStatusResponse =
            serde_json::from_str(r#"{"status":"PENDING"}"#).unwrap();
        assert_eq!(resp.status, ProviderStatus::Pending);
        assert!(resp.provider_order_id.is_none());
    }

    #[test]
    fn detection_round_trips() {
        let det = OperatorDetection {
            operator_code: "AIRTEL".into(),
            operator_id: "11".to_string(),
            operator_name: "Airtel".to_string(),
            circle_code: "KA".into(),
            circle_name: "Karnataka".to_string(),
        };
        let json = serde_json::to_string(&det).unwrap();
        let back: OperatorDetection = serde_json::from_str(&json).unwrap();
        assert_eq!(det, back);
    }

    #[test]
    fn plan_amount_parses_decimal_string() {
        let plan: Plan = serde_json::from_str(
            r#"{"amount":"299","validity":"28 days","description":"Unlimited calls"}"#,
        )
        .unwrap();
        assert_eq!(plan.amount, rust_decimal::Decimal::from(299));
    }
}
