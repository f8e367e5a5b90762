use crate::mentors::event::MentorEvent;
use crate::mentors::state::MentorDirectoryState;
use crate::store::Reducer;

pub struct MentorReducer;

impl Reducer for MentorReducer {
    type State = MentorDirectoryState;
    type Event = MentorEvent;

    fn reduce(state: Self::State, event: Self::Event) -> Self::State {
        match event {
            MentorEvent::FetchStarted => MentorDirectoryState {
                loading: true,
                error: None,
                ..state
            },

            MentorEvent::FetchSucceeded { mentors } => MentorDirectoryState {
                loading: false,
                mentors,
                ..state
            },

            MentorEvent::FetchFailed { message } => MentorDirectoryState {
                loading: false,
                error: Some(message),
                ..state
            },

            MentorEvent::SearchSkillChanged { value } => MentorDirectoryState {
                search_skill: value,
                ..state
            },

            MentorEvent::SortByChanged { value } => MentorDirectoryState {
                sort_by: value,
                ..state
            },

            MentorEvent::ErrorCleared => MentorDirectoryState {
                error: None,
                ..state
            },
        }
    }
}
