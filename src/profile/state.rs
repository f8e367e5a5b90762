use crate::models::Profile;
use crate::store::StoreState;

/// Profile slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StoreState for ProfileState {}
