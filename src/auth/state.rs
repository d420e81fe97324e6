//! Session state container — app-owned, hydrated once at client build.
//!
//! `Option<SessionData>` encodes the core invariant in the type: there is no
//! representable state with a user but no access token. Both arrive together
//! on login and leave together on logout.

use super::UserProfile;
use crate::store::AuthStore;

use async_lock::RwLock;
use std::sync::Arc;

/// Everything that makes up a signed-in session.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

/// Tab-wide authentication state, shared by all sub-clients.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<RwLock<Option<SessionData>>>,
}

impl SessionState {
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Rebuild the session from the durable store. A profile without an
    /// access token (or vice versa) counts as signed out.
    pub fn hydrate(store: &AuthStore) -> Self {
        let data = match (store.user(), store.access_token(), store.refresh_token()) {
            (Some(user), Some(access_token), refresh) => Some(SessionData {
                user,
                access_token,
                refresh_token: refresh.unwrap_or_default(),
            }),
            _ => None,
        };
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.inner.read().await.as_ref().map(|d| d.user.clone())
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|d| d.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|d| d.refresh_token.clone())
    }

    pub(crate) async fn set(&self, data: SessionData) {
        *self.inner.write().await = Some(data);
    }

    pub(crate) async fn set_user(&self, user: UserProfile) {
        if let Some(data) = self.inner.write().await.as_mut() {
            data.user = user;
        }
    }

    pub(crate) async fn set_tokens(&self, access_token: String, refresh_token: String) {
        if let Some(data) = self.inner.write().await.as_mut() {
            data.access_token = access_token;
            data.refresh_token = refresh_token;
        }
    }

    pub(crate) async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// Route-guard decision for the current auth state.
    pub async fn guard(&self, route: RouteKind) -> GuardDecision {
        let authed = self.is_authenticated().await;
        match (route, authed) {
            (RouteKind::Protected, false) => GuardDecision::RedirectToLogin,
            (RouteKind::AuthOnly, true) => GuardDecision::RedirectToDashboard,
            _ => GuardDecision::Allow,
        }
    }
}

/// How a page relates to authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires a signed-in user (dashboard, checkout).
    Protected,
    /// Only for signed-out users (login, register).
    AuthOnly,
    /// Anyone (marketing pages).
    Public,
}

/// What the router should do before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}
