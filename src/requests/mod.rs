//! Incoming and outgoing match requests and their status transitions.
//!
//! Accept/reject operate on the incoming (mentor-side) collection, cancel
//! on the outgoing (mentee-side) one. Settled decisions mutate only the
//! matching entry's status in place; an id that is not found locally leaves
//! the collection unchanged. The composition root reports that case as
//! [`crate::client::DecisionOutcome::NotFoundLocally`] while the backend
//! call still stands.

mod event;
pub mod query;
mod reducer;
mod state;

pub use event::MatchRequestEvent;
pub use reducer::MatchRequestReducer;
pub use state::MatchRequestState;
