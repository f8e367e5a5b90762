use crate::models::Mentor;
use crate::store::StoreState;

/// Sort order for the mentor listing.
///
/// `Id` is the sentinel for the server default: the `order_by` query
/// parameter is omitted entirely in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Id,
    Name,
    Skill,
}

impl SortBy {
    /// Value for the `order_by` query parameter; `None` means omit it.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            SortBy::Id => None,
            SortBy::Name => Some("name"),
            SortBy::Skill => Some("skill"),
        }
    }
}

/// Mentor directory slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MentorDirectoryState {
    /// Replaced wholesale on every successful fetch; never merged.
    pub mentors: Vec<Mentor>,
    pub loading: bool,
    pub error: Option<String>,
    /// Last applied skill filter; empty means no filter.
    pub search_skill: String,
    pub sort_by: SortBy,
}

impl StoreState for MentorDirectoryState {}
