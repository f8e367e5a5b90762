use crate::models::User;
use crate::store::Event;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignUpStarted,
    /// Signup succeeded. No token is issued; the user logs in separately.
    SignUpSucceeded,
    SignUpFailed { message: String },

    LogInStarted,
    LogInSucceeded { token: String },
    /// Login failed; prior auth state is left untouched.
    LogInFailed { message: String },

    FetchUserStarted,
    FetchUserSucceeded { user: User },
    FetchUserFailed { message: String },

    /// The backend rejected the current token. Clears identity but keeps
    /// the failure message visible. Dispatched by the composition root
    /// after an unauthorized current-user fetch.
    SessionInvalidated,

    /// User-initiated logout. Clears identity and error.
    LoggedOut,

    ErrorCleared,
}

impl Event for SessionEvent {}
