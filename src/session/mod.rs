//! Authentication lifecycle and current-identity cache.
//!
//! Holds the bearer token, the authenticated user, and the loading/error
//! flags for auth operations. The token is mirrored into durable storage
//! so a restart can restore `is_authenticated` before any network call
//! resolves.
//!
//! The 401-forces-logout policy is NOT encoded here: the reducer only
//! records the fetch failure, and [`crate::client::MatchClient`] inspects
//! the API error to decide whether to also dispatch
//! [`SessionEvent::SessionInvalidated`].

mod event;
mod reducer;
mod state;
mod storage;

pub use event::SessionEvent;
pub use reducer::SessionReducer;
pub use state::SessionState;
pub use storage::{StorageError, TokenStorage};
