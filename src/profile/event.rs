use crate::models::Profile;
use crate::store::Event;

#[derive(Debug, Clone)]
pub enum ProfileEvent {
    UpdateStarted,
    /// The server's canonical profile after a successful update.
    UpdateSucceeded { profile: Profile },
    UpdateFailed { message: String },
    /// Seed the editable profile, e.g. from the fetched session user.
    Loaded { profile: Profile },
    ErrorCleared,
}

impl Event for ProfileEvent {}
