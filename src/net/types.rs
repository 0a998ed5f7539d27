//! Wire DTOs for the remote REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! round-trips stay lossless. Any endpoint may include a `redirect` field
//! instructing the client to navigate before rendering the fetched data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Verdict from `GET /api/auth/status`.
///
/// The default is the fail-closed denial: ambiguous or error states must
/// never read as "authenticated".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the presented token is a valid session credential.
    #[serde(default)]
    pub authenticated: bool,
    /// Whether the token holder has admin rights.
    #[serde(default)]
    pub is_admin: bool,
}

impl AuthStatus {
    /// The fail-closed default: not authenticated, not admin.
    pub fn denied() -> Self {
        Self::default()
    }
}

/// Session token issued by login, signup, and profile updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token.
    pub token: String,
}

/// Profile payload from `GET /api/dashboard` and `GET /api/admin/dashboard`.
/// The admin variant omits `email`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_img: Option<String>,
    /// Server-directed navigation target, honored before rendering.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// Envelope from `GET /api/admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUser>,
}

/// One account row in the admin user list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_img: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp of the most recent login, if the user ever
    /// logged in.
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Body for `POST /api/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Body for `POST /api/login/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `PUT /api/profile`. The server may reissue the session token in
/// response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
    pub email: String,
}

/// Error envelope the server attaches to 4xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub error: Option<String>,
}
