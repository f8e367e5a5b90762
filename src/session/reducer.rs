use crate::session::event::SessionEvent;
use crate::session::state::SessionState;
use crate::store::Reducer;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Event = SessionEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            SessionEvent::SignUpStarted
            | SessionEvent::LogInStarted
            | SessionEvent::FetchUserStarted => SessionState {
                loading: true,
                error: None,
                ..state
            },

            SessionEvent::SignUpSucceeded => SessionState {
                loading: false,
                ..state
            },

            SessionEvent::LogInSucceeded { token } => SessionState {
                loading: false,
                token: Some(token),
                is_authenticated: true,
                ..state
            },

            SessionEvent::FetchUserSucceeded { user } => SessionState {
                loading: false,
                user: Some(user),
                ..state
            },

            SessionEvent::SignUpFailed { message }
            | SessionEvent::LogInFailed { message }
            | SessionEvent::FetchUserFailed { message } => SessionState {
                loading: false,
                error: Some(message),
                ..state
            },

            SessionEvent::SessionInvalidated => SessionState {
                token: None,
                is_authenticated: false,
                user: None,
                ..state
            },

            SessionEvent::LoggedOut => SessionState {
                token: None,
                is_authenticated: false,
                user: None,
                error: None,
                ..state
            },

            SessionEvent::ErrorCleared => SessionState {
                error: None,
                ..state
            },
        }
    }
}
