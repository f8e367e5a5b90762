use crate::models::{MatchRequest, RequestStatus};
use crate::requests::event::MatchRequestEvent;
use crate::requests::state::MatchRequestState;
use crate::store::Reducer;

pub struct MatchRequestReducer;

impl Reducer for MatchRequestReducer {
    type State = MatchRequestState;
    type Event = MatchRequestEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            MatchRequestEvent::CreateStarted
            | MatchRequestEvent::FetchIncomingStarted
            | MatchRequestEvent::FetchOutgoingStarted => MatchRequestState {
                loading: true,
                error: None,
                ..state
            },

            MatchRequestEvent::CreateSucceeded { request } => {
                let mut outgoing = state.outgoing;
                outgoing.push(request);
                MatchRequestState {
                    loading: false,
                    outgoing,
                    ..state
                }
            }

            MatchRequestEvent::FetchIncomingSucceeded { requests } => MatchRequestState {
                loading: false,
                incoming: requests,
                ..state
            },

            MatchRequestEvent::FetchOutgoingSucceeded { requests } => MatchRequestState {
                loading: false,
                outgoing: requests,
                ..state
            },

            MatchRequestEvent::CreateFailed { message }
            | MatchRequestEvent::FetchIncomingFailed { message }
            | MatchRequestEvent::FetchOutgoingFailed { message } => MatchRequestState {
                loading: false,
                error: Some(message),
                ..state
            },

            MatchRequestEvent::Accepted { id } => MatchRequestState {
                incoming: set_status(state.incoming, id, RequestStatus::Accepted),
                ..state
            },

            MatchRequestEvent::Rejected { id } => MatchRequestState {
                incoming: set_status(state.incoming, id, RequestStatus::Rejected),
                ..state
            },

            MatchRequestEvent::Cancelled { id } => MatchRequestState {
                outgoing: set_status(state.outgoing, id, RequestStatus::Cancelled),
                ..state
            },

            MatchRequestEvent::ErrorCleared => MatchRequestState {
                error: None,
                ..state
            },
        }
    }
}

/// Set the status of the entry with this id, touching nothing else.
/// Absent id leaves the collection unchanged.
fn set_status(
    mut requests: Vec<MatchRequest>,
    id: i64,
    status: RequestStatus,
) -> Vec<MatchRequest> {
    if let Some(request) = requests.iter_mut().find(|r| r.id == id) {
        request.status = status;
    }
    requests
}
