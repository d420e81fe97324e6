//! Auth sub-client — register, login, OTP, refresh, logout.
//!
//! Mutating operations update three places in a fixed order: the durable
//! store first, then the HTTP client's bearer token, then the in-memory
//! session. Logout clears all three even when the remote call fails.

use super::wire::{
    AuthResponse, LoginRequest, MessageResponse, OtpLoginRequest, OtpRequest,
    RefreshTokenRequest, RefreshTokenResponse, RegisterRequest, VerifyEmailRequest,
};
use super::{SessionData, UserProfile};
use crate::client::PayliteClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth {
    pub(crate) client: PayliteClient,
}

impl Auth {
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        mobile_number: Option<&str>,
    ) -> Result<UserProfile, SdkError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            mobile_number: mobile_number.map(str::to_string),
        };
        let resp: AuthResponse = self
            .client
            .http
            .post("/auth/register", &request, None)
            .await?;
        self.adopt_session(resp).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, SdkError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthResponse = self.client.http.post("/auth/login", &request, None).await?;
        self.adopt_session(resp).await
    }

    /// Ask the backend to send a login OTP to the given mobile number.
    pub async fn request_otp(&self, mobile_number: &str) -> Result<String, SdkError> {
        let request = OtpRequest {
            mobile_number: mobile_number.to_string(),
        };
        let resp: MessageResponse = self
            .client
            .http
            .post("/auth/otp/request", &request, None)
            .await?;
        Ok(resp.message)
    }

    pub async fn login_with_otp(
        &self,
        mobile_number: &str,
        otp: &str,
    ) -> Result<UserProfile, SdkError> {
        let request = OtpLoginRequest {
            mobile_number: mobile_number.to_string(),
            otp: otp.to_string(),
        };
        let resp: AuthResponse = self
            .client
            .http
            .post("/auth/otp/verify", &request, None)
            .await?;
        self.adopt_session(resp).await
    }

    pub async fn verify_email(&self, token: &str) -> Result<String, SdkError> {
        let request = VerifyEmailRequest {
            token: token.to_string(),
        };
        let resp: MessageResponse = self
            .client
            .http
            .post("/auth/verify-email", &request, None)
            .await?;
        Ok(resp.message)
    }

    /// Rotate the token pair using the stored refresh token.
    ///
    /// The refresh token rides in the body and as the bearer override, so the
    /// (possibly expired) access token never guards its own renewal.
    pub async fn refresh_token(&self) -> Result<(), SdkError> {
        let refresh = self
            .client
            .session
            .refresh_token()
            .await
            .or_else(|| self.client.auth_store.refresh_token())
            .ok_or_else(|| SdkError::Validation("no refresh token available".to_string()))?;

        let request = RefreshTokenRequest {
            refresh_token: refresh.clone(),
        };
        let resp: RefreshTokenResponse = self
            .client
            .http
            .post("/auth/refresh-token", &request, Some(refresh.as_str()))
            .await?;

        self.client
            .auth_store
            .save_tokens(&resp.access_token, &resp.refresh_token);
        self.client
            .http
            .set_access_token(Some(resp.access_token.clone()))
            .await;
        self.client
            .session
            .set_tokens(resp.access_token, resp.refresh_token)
            .await;
        Ok(())
    }

    /// Best-effort remote, guaranteed local: the backend call may fail, the
    /// local sign-out never does.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let remote: Result<MessageResponse, _> = self
            .client
            .http
            .post("/auth/logout", &serde_json::json!({}), None)
            .await;
        if let Err(e) = remote {
            tracing::warn!(error = %e, "remote logout failed, clearing local session anyway");
        }

        self.client.auth_store.clear_auth();
        self.client.http.clear_access_token().await;
        self.client.session.clear().await;
        Ok(())
    }

    /// Re-fetch the profile and fold it into session + store.
    pub async fn refresh_user(&self) -> Result<UserProfile, SdkError> {
        let user: UserProfile = self.client.http.get("/user/profile", None).await?;
        self.client.auth_store.save_user(&user);
        self.client.session.set_user(user.clone()).await;
        Ok(user)
    }

    /// Persist a successful auth response everywhere it belongs.
    async fn adopt_session(&self, resp: AuthResponse) -> Result<UserProfile, SdkError> {
        self.client
            .auth_store
            .save_session(&resp.access_token, &resp.refresh_token, &resp.user);
        self.client
            .http
            .set_access_token(Some(resp.access_token.clone()))
            .await;
        self.client
            .session
            .set(SessionData {
                user: resp.user.clone(),
                access_token: resp.access_token,
                refresh_token: resp.refresh_token,
            })
            .await;
        Ok(resp.user)
    }
}
