use crate::models::MatchRequest;
use crate::store::Event;

#[derive(Debug, Clone)]
pub enum MatchRequestEvent {
    CreateStarted,
    /// Appends the server-returned request to the outgoing collection.
    CreateSucceeded { request: MatchRequest },
    CreateFailed { message: String },

    FetchIncomingStarted,
    FetchIncomingSucceeded { requests: Vec<MatchRequest> },
    FetchIncomingFailed { message: String },

    FetchOutgoingStarted,
    FetchOutgoingSucceeded { requests: Vec<MatchRequest> },
    FetchOutgoingFailed { message: String },

    /// Settled decisions. Each sets the status of the matching local entry
    /// in place; an absent id is a no-op.
    Accepted { id: i64 },
    Rejected { id: i64 },
    Cancelled { id: i64 },

    ErrorCleared,
}

impl Event for MatchRequestEvent {}
