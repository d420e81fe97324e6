//! Authentication — session state, login/OTP/logout operations.

pub mod client;
pub mod state;
pub mod wire;

pub use client::Auth;
pub use state::{GuardDecision, RouteKind, SessionData, SessionState};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user, as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
