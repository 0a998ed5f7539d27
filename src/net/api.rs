//! REST client for the remote coverage API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net` with the bearer token
//! attached. Native builds get inert stubs that fail as transport errors so
//! the classification and invalidation logic stays testable without a
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401 observed outside an auth attempt invalidates the credential store
//! and redirects to the login view exactly once; a 401 during login or
//! signup propagates untouched, because a wrong password is not a session
//! expiry. No call is ever retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    AdminUser, AdminUsersResponse, AuthStatus, LoginRequest, ProfileResponse, SignupRequest,
    TokenResponse, UpdateProfileRequest,
};
use crate::util::guard;
use crate::util::nav::Navigator;
use crate::util::token_store::CredentialStore;

/// Base URL of the remote API. Overridable at compile time for deployments;
/// the default matches the development server.
pub fn api_base() -> &'static str {
    option_env!("GETCOVERED_API_URL").unwrap_or("http://127.0.0.1:5000")
}

/// Absolute URL for an API path.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// OAuth entry point on the API origin. Navigating here starts the Google
/// flow; the provider calls back to `/auth/callback?token=...` on the client.
pub fn oauth_login_url() -> String {
    api_url("/login")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether `path` is itself an authentication attempt. A 401 from these
/// endpoints means "bad credentials", not "expired session".
fn is_auth_attempt(path: &str) -> bool {
    matches!(path, "/api/login/password" | "/api/signup")
}

/// API paths that are pointless to call without a credential. A tokenless
/// call here short-circuits to the login view without touching the network.
fn is_protected_api_path(path: &str) -> bool {
    path == "/api/dashboard"
        || path == "/api/profile"
        || path == "/api/account"
        || path.starts_with("/api/admin/")
}

/// HTTP methods used by the API surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Client for the remote REST API. Cheap to clone; clones share the
/// credential store and navigator.
#[derive(Clone)]
pub struct ApiClient {
    pub store: CredentialStore,
    pub nav: Navigator,
}

impl ApiClient {
    pub fn new(store: CredentialStore, nav: Navigator) -> Self {
        Self { store, nav }
    }

    /// Read the credential for an outbound call. With no token and a
    /// protected target, redirect to login and fail without sending.
    fn preflight(&self, path: &str) -> Result<Option<String>, ApiError> {
        match self.store.get() {
            Some(token) => Ok(Some(token)),
            None if is_protected_api_path(path) => {
                self.nav.redirect_to(guard::LOGIN_PATH);
                Err(ApiError::Unauthorized)
            }
            None => Ok(None),
        }
    }

    /// Centralized reaction to a 401 response. Outside an auth attempt, and
    /// unless the user is already on a public auth view, the credential is
    /// purged and the client redirects to login; `redirect_to` is loop-guarded
    /// so repeated 401s cannot bounce the view. The call itself always fails
    /// as `Unauthorized`.
    fn handle_unauthorized(&self, request_path: &str) -> ApiError {
        if !is_auth_attempt(request_path) && !guard::is_public_auth_view(&self.nav.current_path()) {
            self.store.clear();
            self.nav.redirect_to(guard::LOGIN_PATH);
        }
        ApiError::Unauthorized
    }

    /// Perform a JSON request against the API and decode the response.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let token = self.preflight(path)?;
        #[cfg(feature = "csr")]
        {
            self.send(method, path, token, body).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, token, body);
            Err(ApiError::Network("HTTP is only available in the browser".to_owned()))
        }
    }

    #[cfg(feature = "csr")]
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<String>,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = api_url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = match token {
            Some(value) => builder.header("Authorization", &bearer(&value)),
            None => builder,
        };
        let response = match body {
            Some(json) => builder
                .json(&json)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == 401 {
            return Err(self.handle_unauthorized(path));
        }
        if status >= 400 {
            let message = response
                .json::<super::types::ServerMessage>()
                .await
                .ok()
                .and_then(|envelope| envelope.error);
            return Err(ApiError::from_status(status, message));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /api/signup` — create an account; the issued token is returned
    /// to the caller, which decides when to store it.
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::Post, "/api/signup", Some(body)).await
    }

    /// `POST /api/login/password` — email/password login.
    pub async fn login_password(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::Post, "/api/login/password", Some(body)).await
    }

    /// `GET /api/auth/status` — ask the server whether the current token is
    /// valid and whether its holder is an admin.
    ///
    /// Never fails from the caller's point of view: any transport, server,
    /// or decode failure maps to the fail-closed denial.
    pub async fn auth_status(&self) -> AuthStatus {
        match self
            .request::<AuthStatus>(Method::Get, "/api/auth/status", None)
            .await
        {
            Ok(status) => status,
            Err(error) => {
                log::warn!("auth status check failed, treating as anonymous: {error}");
                AuthStatus::denied()
            }
        }
    }

    /// `GET /api/dashboard` — profile for a regular user session.
    pub async fn user_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.request(Method::Get, "/api/dashboard", None).await
    }

    /// `GET /api/admin/dashboard` — profile for an admin session.
    pub async fn admin_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.request(Method::Get, "/api/admin/dashboard", None).await
    }

    /// `GET /api/admin/users` — full account list for the admin dashboard.
    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let envelope: AdminUsersResponse =
            self.request(Method::Get, "/api/admin/users", None).await?;
        Ok(envelope.users)
    }

    /// `PUT /api/profile` — update the profile. The server reissues the
    /// session token; the replacement is a single `set` on the store, so a
    /// request already in flight keeps whichever token it captured at send
    /// time.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let reissued: TokenResponse = self
            .request(Method::Put, "/api/profile", Some(body))
            .await?;
        self.store.set(&reissued.token);
        Ok(())
    }

    /// `DELETE /api/account` — delete the account. The caller signs the
    /// session out afterwards.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.request(Method::Delete, "/api/account", None).await?;
        Ok(())
    }
}
