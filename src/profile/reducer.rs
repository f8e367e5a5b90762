use crate::profile::event::ProfileEvent;
use crate::profile::state::ProfileState;
use crate::store::Reducer;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Event = ProfileEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            ProfileEvent::UpdateStarted => ProfileState {
                loading: true,
                error: None,
                ..state
            },

            ProfileEvent::UpdateSucceeded { profile } => ProfileState {
                loading: false,
                profile: Some(profile),
                ..state
            },

            // Prior profile stays untouched on failure.
            ProfileEvent::UpdateFailed { message } => ProfileState {
                loading: false,
                error: Some(message),
                ..state
            },

            ProfileEvent::Loaded { profile } => ProfileState {
                profile: Some(profile),
                ..state
            },

            ProfileEvent::ErrorCleared => ProfileState {
                error: None,
                ..state
            },
        }
    }
}
