//! Pure queries over the outgoing collection.
//!
//! The "at most one pending request per mentor" rule lives in the UI: the
//! send affordance is disabled while a pending request exists. These
//! helpers implement that lookup independently of any view so the rule is
//! unit-testable.

use crate::models::{MatchRequest, RequestStatus};

/// Status of the first outgoing request addressed to this mentor, if any.
pub fn request_status_for(outgoing: &[MatchRequest], mentor_id: i64) -> Option<RequestStatus> {
    outgoing
        .iter()
        .find(|r| r.mentor_id == Some(mentor_id))
        .map(|r| r.status)
}

/// Whether an outgoing request to this mentor is still pending.
///
/// Governs whether the UI permits sending a new request.
pub fn has_pending_request(outgoing: &[MatchRequest], mentor_id: i64) -> bool {
    request_status_for(outgoing, mentor_id) == Some(RequestStatus::Pending)
}
