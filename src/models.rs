//! Wire types shared across slices.
//!
//! Every entity here is created by a server response and replaced wholesale
//! on the next fetch; slices never synthesize ids locally. Cross-slice
//! association happens by id lookup, never by shared references.

use serde::{Deserialize, Serialize};

/// Role a user registered with. Immutable once issued by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    /// Label used in the fallback placeholder image URL.
    pub fn placeholder_label(&self) -> &'static str {
        match self {
            Role::Mentor => "MENTOR",
            Role::Mentee => "MENTEE",
        }
    }
}

/// Editable profile attached to a user.
///
/// `skills` is meaningful only when the owning user is a mentor; absent or
/// empty means no skills declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Authenticated user identity. `id`, `email` and `role` are immutable once
/// issued; `profile` is replaceable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Directory entry for a mentor listing. A read-only projection, not a full
/// [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: i64,
    pub profile: Profile,
}

/// Lifecycle status of a match request.
///
/// `Pending` is the only status that permits a transition; the other three
/// are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// Mentor-side profile summary embedded in a match request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMentorProfile {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Mentee-side profile summary embedded in a match request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMenteeProfile {
    pub name: String,
}

/// A match request between a mentee and a mentor.
///
/// The backend enforces at most one request per (mentor, mentee) pair;
/// clients must not rely on that when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: RequestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_profile: Option<RequestMentorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentee_profile: Option<RequestMenteeProfile>,
}

/// Placeholder image service, parameterized by role label.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/500x500.jpg?text=";

/// Resolve the display URL for a profile image.
///
/// Stored images are served relative to the API base (`/images/...`); a
/// missing `image_url` falls back to the fixed placeholder for the role.
pub fn profile_image_url(api_base: &str, image_url: Option<&str>, role: Role) -> String {
    match image_url {
        Some(path) => format!("{api_base}{path}"),
        None => format!("{PLACEHOLDER_IMAGE_BASE}{}", role.placeholder_label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Mentor).unwrap(), "\"mentor\"");
        assert_eq!(serde_json::to_string(&Role::Mentee).unwrap(), "\"mentee\"");
    }

    #[test]
    fn status_round_trips_lowercase() {
        let status: RequestStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, RequestStatus::Cancelled);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"cancelled\"");
    }

    #[test]
    fn pending_is_the_only_non_terminal_status() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Accepted.is_terminal());
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
    }

    #[test]
    fn match_request_accepts_camel_case_fields() {
        let json = r#"{
            "id": 3,
            "mentorId": 7,
            "status": "pending",
            "menteeProfile": {"name": "Kim"}
        }"#;
        let request: MatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mentor_id, Some(7));
        assert_eq!(request.mentee_id, None);
        assert_eq!(request.mentee_profile.unwrap().name, "Kim");
    }

    #[test]
    fn image_url_joins_api_base() {
        let url = profile_image_url(
            "http://localhost:8080/api",
            Some("/images/3.png"),
            Role::Mentor,
        );
        assert_eq!(url, "http://localhost:8080/api/images/3.png");
    }

    #[test]
    fn missing_image_falls_back_to_role_placeholder() {
        let url = profile_image_url("http://localhost:8080/api", None, Role::Mentee);
        assert_eq!(url, "https://placehold.co/500x500.jpg?text=MENTEE");
    }
}
