//! User sub-client.

use super::wire::{Preferences, UpdateProfileRequest};
use crate::auth::UserProfile;
use crate::client::PayliteClient;
use crate::error::SdkError;

/// Sub-client for user profile operations.
pub struct Users {
    pub(crate) client: PayliteClient,
}

impl Users {
    pub async fn profile(&self) -> Result<UserProfile, SdkError> {
        Ok(self.client.http.get("/user/profile", None).await?)
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<UserProfile, SdkError> {
        let user: UserProfile = self
            .client
            .http
            .patch("/user/profile", request, None)
            .await?;
        // Keep the cached session profile in sync with what the backend accepted.
        self.client.auth_store.save_user(&user);
        self.client.session.set_user(user.clone()).await;
        Ok(user)
    }

    pub async fn preferences(&self) -> Result<Preferences, SdkError> {
        Ok(self.client.http.get("/user/preferences", None).await?)
    }

    pub async fn update_preferences(
        &self,
        preferences: &Preferences,
    ) -> Result<Preferences, SdkError> {
        Ok(self
            .client
            .http
            .put("/user/preferences", preferences, None)
            .await?)
    }
}
