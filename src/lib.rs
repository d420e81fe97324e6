//! # Paylite SDK
//!
//! A Rust client SDK for the Paylite recharge & payments backend.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Shared** — validated newtypes (mobile numbers, operator/circle codes)
//! 2. **Store** — pluggable key-value persistence (local/session storage analogs)
//! 3. **HTTP** — `HttpClient` with bearer auth, timeouts, normalized errors
//! 4. **Domain** — Auth, User, Wallet, Recharge, Transactions, Payments sub-clients
//! 5. **Flow** — `RechargeFlow`: the multi-page recharge orchestration with
//!    ticket persistence and bounded status polling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paylite_sdk::prelude::*;
//!
//! let client = PayliteClient::builder()
//!     .base_url("https://api.paylite.in/api/v1")
//!     .build()?;
//!
//! client.auth().login("asha@example.com", "secret").await?;
//!
//! let mut flow = client.recharge_flow();
//! let detection = flow.detect_operator("9876543210").await?;
//! let plans = flow.load_plans(PlanCategory::Popular).await?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network constants and environment configuration keys.
pub mod network;

// ── Layer 2: Store ───────────────────────────────────────────────────────────

/// Client-side key-value persistence.
pub mod store;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with normalized errors.
pub mod http;

// ── Layer 4: Domain ──────────────────────────────────────────────────────────

/// Authentication: session state, login/OTP/logout.
pub mod auth;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

// ── Layer 5: Flow + High-Level Client ────────────────────────────────────────

/// Recharge orchestration flow.
pub mod flow;

/// `PayliteClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CircleCode, MobileNumber, OperatorCode};

    // Stores
    pub use crate::store::{AuthStore, KvStore, MemoryStore, NullStore, Store};

    // Auth
    pub use crate::auth::{
        GuardDecision, RouteKind, SessionData, SessionState, UserProfile,
    };

    // Domain types — recharge
    pub use crate::domain::recharge::{
        Circle, Operator, OperatorDetection, Plan, PlanCategory, ProviderStatus,
    };

    // Domain types — payment
    pub use crate::domain::payment::{
        CheckoutOptions, GatewayEvent, GatewayPayment, PaymentGateway, PaymentOrder,
    };

    // Domain types — wallet + transactions
    pub use crate::domain::transaction::{Transaction, TransactionSummary};
    pub use crate::domain::wallet::WalletBalance;

    // Flow
    pub use crate::flow::{
        CheckoutOutcome, FixedPoll, FlowTicket, OutcomeStatus, PaymentBackend, PollPolicy,
        RechargeBackend, RechargeFlow, RechargeOutcome, StatusRoute,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{PayliteClient, PayliteClientBuilder};
    pub use crate::domain::payment::client::Payments;
    pub use crate::domain::recharge::client::Recharges;
    pub use crate::domain::transaction::client::Transactions;
    pub use crate::domain::user::client::Users;
    pub use crate::domain::wallet::client::Wallet;
}
