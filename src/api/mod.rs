//! REST client for the matching backend.
//!
//! One method per endpoint; every method issues exactly one HTTP call and
//! maps non-2xx responses into [`ApiError`]. Bearer auth is attached to
//! everything except signup and login.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{CreateMatchRequest, LogInRequest, ProfileUpdate, SignUpRequest, TokenResponse};
