//! Durable-store layout for auth state.
//!
//! Tokens and the user profile live under fixed keys. `save_session` writes
//! all three together so a stored user always has a stored access token.

use crate::auth::UserProfile;
use crate::store::Store;

pub const KEY_ACCESS_TOKEN: &str = "access_token";
pub const KEY_REFRESH_TOKEN: &str = "refresh_token";
pub const KEY_USER_DATA: &str = "user_data";

/// Typed view over the durable store's auth keys.
#[derive(Clone)]
pub struct AuthStore {
    store: Store,
}

impl AuthStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Persist tokens + profile as one unit. Tokens first, profile last, so a
    /// stored profile never exists without a token.
    pub fn save_session(&self, access_token: &str, refresh_token: &str, user: &UserProfile) {
        self.store.set_json(KEY_ACCESS_TOKEN, &access_token);
        self.store.set_json(KEY_REFRESH_TOKEN, &refresh_token);
        self.store.set_json(KEY_USER_DATA, user);
    }

    /// Replace just the token pair (refresh-token rotation).
    pub fn save_tokens(&self, access_token: &str, refresh_token: &str) {
        self.store.set_json(KEY_ACCESS_TOKEN, &access_token);
        self.store.set_json(KEY_REFRESH_TOKEN, &refresh_token);
    }

    pub fn save_user(&self, user: &UserProfile) {
        self.store.set_json(KEY_USER_DATA, user);
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get_json(KEY_ACCESS_TOKEN)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get_json(KEY_REFRESH_TOKEN)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.store.get_json(KEY_USER_DATA)
    }

    pub fn clear_tokens(&self) {
        self.store.remove(KEY_ACCESS_TOKEN);
        self.store.remove(KEY_REFRESH_TOKEN);
    }

    pub fn clear_user(&self) {
        self.store.remove(KEY_USER_DATA);
    }

    /// Tokens + user in one sweep.
    pub fn clear_auth(&self) {
        self.clear_tokens();
        self.clear_user();
    }
}
