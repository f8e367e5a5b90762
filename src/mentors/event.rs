use crate::mentors::state::SortBy;
use crate::models::Mentor;
use crate::store::Event;

#[derive(Debug, Clone)]
pub enum MentorEvent {
    FetchStarted,
    FetchSucceeded { mentors: Vec<Mentor> },
    FetchFailed { message: String },
    /// Local setter; the view layer re-fetches after changing it.
    SearchSkillChanged { value: String },
    /// Local setter; the view layer re-fetches after changing it.
    SortByChanged { value: SortBy },
    ErrorCleared,
}

impl Event for MentorEvent {}
