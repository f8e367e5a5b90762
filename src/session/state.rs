use crate::models::User;
use crate::store::StoreState;

/// Session slice state.
///
/// Invariant: after any settled transition, `is_authenticated` equals
/// `token.is_some()`. `user` stays `None` until explicitly fetched, even
/// when a token is present.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub user: Option<User>,
    /// True strictly between dispatch and settlement of signup, login, or
    /// the current-user fetch; never true at rest.
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for SessionState {}

impl SessionState {
    /// Initial state seeded from durable storage at process start.
    pub fn restored(token: Option<String>) -> Self {
        Self {
            is_authenticated: token.is_some(),
            token,
            ..Self::default()
        }
    }
}
