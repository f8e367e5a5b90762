//! Request and response payloads for the REST contract.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Payload for `POST /signup`. Does not authenticate; no token is issued.
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Payload for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LogInRequest {
    pub email: String,
    pub password: String,
}

/// Success payload of `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Payload for `PUT /profile`.
///
/// `image` carries a base64-encoded JPEG or PNG, already validated by
/// [`crate::profile::encode_profile_image`]. `skills` must be included only
/// when `role` is mentor; the caller enforces this, not the store.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub id: i64,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Payload for `POST /match-requests`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub mentor_id: i64,
    pub mentee_id: i64,
    pub message: String,
}
