//! Mentor directory: a thin cache over the server-filtered listing.
//!
//! Filtering and sorting are server-authoritative. The slice holds the
//! fetched list plus the filter/sort the UI should reflect; it never
//! re-sorts or re-filters `mentors` client-side.

mod event;
mod reducer;
mod state;

pub use event::MentorEvent;
pub use reducer::MentorReducer;
pub use state::{MentorDirectoryState, SortBy};
