//! Recharge domain — operator detection, plan catalogs, provider execution.

pub mod client;
pub mod wire;

pub use client::Recharges;
pub use wire::{
    Circle, Favorite, Operator, OperatorDetection, Plan, PlansResponse, ProviderBalance,
    ProviderRechargeRequest, ProviderRechargeResponse, ProviderStatusResponse, RechargeRecord,
    ValidateRechargeRequest, ValidateRechargeResponse,
};

use serde::{Deserialize, Serialize};

// ─── PlanCategory ────────────────────────────────────────────────────────────

/// Plan catalog tab. The plans page fetches one category at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanCategory {
    #[default]
    Popular,
    Data,
    Unlimited,
    TopUp,
    Roaming,
    Special,
}

impl PlanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanCategory::Popular => "POPULAR",
            PlanCategory::Data => "DATA",
            PlanCategory::Unlimited => "UNLIMITED",
            PlanCategory::TopUp => "TOP_UP",
            PlanCategory::Roaming => "ROAMING",
            PlanCategory::Special => "SPECIAL",
        }
    }
}

impl std::fmt::Display for PlanCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── ProviderStatus ──────────────────────────────────────────────────────────

/// Status the telecom aggregator reports for a recharge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderStatus {
    Pending,
    Success,
    Failed,
}

impl std::fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProviderStatus::Pending => "PENDING",
            ProviderStatus::Success => "SUCCESS",
            ProviderStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}
