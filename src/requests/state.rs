use crate::models::MatchRequest;
use crate::store::StoreState;

/// Match-request slice state.
///
/// Mentor-role views read `incoming`, mentee-role views read `outgoing`;
/// the slice itself does not gate by role, callers do.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchRequestState {
    pub incoming: Vec<MatchRequest>,
    pub outgoing: Vec<MatchRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for MatchRequestState {}

impl MatchRequestState {
    /// Whether a request with this id exists in the incoming collection.
    pub fn has_incoming(&self, id: i64) -> bool {
        self.incoming.iter().any(|r| r.id == id)
    }

    /// Whether a request with this id exists in the outgoing collection.
    pub fn has_outgoing(&self, id: i64) -> bool {
        self.outgoing.iter().any(|r| r.id == id)
    }
}
