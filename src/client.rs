//! High-level client — `PayliteClient` with nested sub-client accessors.
//!
//! Keeps the builder, the shared HTTP client, the two stores, and the
//! session state. Each domain has its own sub-client in `domain/<name>/client.rs`.

use crate::auth::client::Auth;
use crate::auth::SessionState;
use crate::domain::payment::client::Payments;
use crate::domain::recharge::client::Recharges;
use crate::domain::transaction::client::Transactions;
use crate::domain::user::client::Users;
use crate::domain::wallet::client::Wallet;
use crate::error::SdkError;
use crate::flow::{FixedPoll, PollPolicy, RechargeFlow};
use crate::http::HttpClient;
use crate::store::{AuthStore, KvStore, MemoryStore, Store};

use std::sync::Arc;
use std::time::Duration;

/// The primary entry point for the Paylite SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.recharges()`, etc. Cloning is cheap; all clones
/// share the HTTP connection pool, stores, and session state.
pub struct PayliteClient {
    pub(crate) http: HttpClient,
    pub(crate) auth_store: AuthStore,
    pub(crate) session_store: Store,
    pub(crate) session: SessionState,
}

impl PayliteClient {
    pub fn builder() -> PayliteClientBuilder {
        PayliteClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth {
        Auth {
            client: self.clone(),
        }
    }

    pub fn users(&self) -> Users {
        Users {
            client: self.clone(),
        }
    }

    pub fn wallet(&self) -> Wallet {
        Wallet {
            client: self.clone(),
        }
    }

    pub fn recharges(&self) -> Recharges {
        Recharges {
            client: self.clone(),
        }
    }

    pub fn transactions(&self) -> Transactions {
        Transactions {
            client: self.clone(),
        }
    }

    pub fn payments(&self) -> Payments {
        Payments {
            client: self.clone(),
        }
    }

    /// Tab-wide auth state: `is_authenticated`, route guards.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// A recharge flow with the production polling schedule.
    pub fn recharge_flow(&self) -> RechargeFlow<Recharges, Payments> {
        self.recharge_flow_with(Box::new(FixedPoll::default()))
    }

    /// A recharge flow with a custom polling policy.
    pub fn recharge_flow_with(
        &self,
        poll: Box<dyn PollPolicy>,
    ) -> RechargeFlow<Recharges, Payments> {
        RechargeFlow::new(
            self.recharges(),
            self.payments(),
            self.session_store.clone(),
            poll,
        )
    }
}

impl Clone for PayliteClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            auth_store: self.auth_store.clone(),
            session_store: self.session_store.clone(),
            session: self.session.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PayliteClientBuilder {
    base_url: String,
    timeout: Duration,
    durable_store: Arc<dyn KvStore>,
    session_store: Arc<dyn KvStore>,
}

impl Default for PayliteClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            durable_store: Arc::new(MemoryStore::new()),
            session_store: Arc::new(MemoryStore::new()),
        }
    }
}

impl PayliteClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Backing for tokens + profile (the browser's local-storage analog).
    pub fn durable_store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.durable_store = store;
        self
    }

    /// Backing for in-progress recharge state (session-storage analog).
    pub fn session_store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.session_store = store;
        self
    }

    /// Apply `PAYLITE_API_URL` / `PAYLITE_HTTP_TIMEOUT_MS` when set.
    pub fn from_env(mut self) -> Self {
        if let Ok(url) = std::env::var(crate::network::ENV_API_URL) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Some(ms) = std::env::var(crate::network::ENV_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.timeout = Duration::from_millis(ms);
        }
        self
    }

    /// Build the client, hydrating session state from the durable store.
    pub fn build(self) -> Result<PayliteClient, SdkError> {
        let auth_store = AuthStore::new(Store::new(self.durable_store));
        let session = SessionState::hydrate(&auth_store);
        let initial_token = auth_store.access_token();

        Ok(PayliteClient {
            http: HttpClient::new(&self.base_url, self.timeout, initial_token),
            auth_store,
            session_store: Store::new(self.session_store),
            session,
        })
    }
}
