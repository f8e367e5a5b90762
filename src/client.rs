//! Composition root wiring slices, reducers, API client, and token storage.
//!
//! [`MatchClient`] owns one value per slice and is the only dispatcher:
//! each operation issues exactly one HTTP call, dispatches the started
//! event before awaiting and exactly one settlement event after, then
//! returns a `Result` the caller can use for one-shot UI feedback. Slices
//! stay independent; the only cross-cutting policy is the forced logout on
//! an unauthorized current-user fetch, composed here in the open rather
//! than hidden inside the session reducer.
//!
//! There is no deduplication of in-flight operations: invoking the same
//! operation twice produces two network calls and two settlements, last
//! settlement wins.

use std::mem;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{
    ApiClient, ApiError, CreateMatchRequest, LogInRequest, ProfileUpdate, SignUpRequest,
};
use crate::config::ClientConfig;
use crate::mentors::{MentorDirectoryState, MentorEvent, MentorReducer, SortBy};
use crate::models::{MatchRequest, Profile, Role};
use crate::profile::{encode_profile_image, ImageError, ProfileEvent, ProfileReducer, ProfileState};
use crate::requests::{MatchRequestEvent, MatchRequestReducer, MatchRequestState};
use crate::session::{SessionEvent, SessionReducer, SessionState, TokenStorage};
use crate::store::Reducer;

/// Errors surfaced to the caller's direct continuation.
///
/// Every failed operation also records a human-readable message on its
/// slice; this error exists so views can drive imperative one-shot
/// feedback (an alert on accept/reject/cancel/create, for instance).
#[derive(Debug, Error)]
pub enum ClientError {
    /// An authenticated operation was invoked with no token present.
    /// Detected locally; no network call is made.
    #[error("No token found")]
    MissingToken,

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Image rejected before any event dispatch or network activity.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Local outcome of a settled accept/reject/cancel.
///
/// The backend call succeeded either way; `NotFoundLocally` means the id
/// was missing from the local collection (a stale list) and nothing
/// changed client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    Updated,
    NotFoundLocally,
}

/// Client core: slice states plus the API client and token storage.
pub struct MatchClient {
    api: ApiClient,
    storage: TokenStorage,
    session: SessionState,
    profile: ProfileState,
    mentors: MentorDirectoryState,
    requests: MatchRequestState,
}

impl MatchClient {
    /// Build a client from configuration, with token storage at the
    /// default location. The persisted token, if any, seeds
    /// `is_authenticated` before any network call.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_storage(config, TokenStorage::new_default())
    }

    /// Build a client with explicit token storage. Used by tests and
    /// embedders that relocate the storage file.
    pub fn with_storage(config: &ClientConfig, storage: TokenStorage) -> Result<Self, ApiError> {
        let api = ApiClient::new(config.api_base_url.clone())?;
        let session = SessionState::restored(storage.load());
        Ok(Self {
            api,
            storage,
            session,
            profile: ProfileState::default(),
            mentors: MentorDirectoryState::default(),
            requests: MatchRequestState::default(),
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn mentors(&self) -> &MentorDirectoryState {
        &self.mentors
    }

    pub fn requests(&self) -> &MatchRequestState {
        &self.requests
    }

    pub fn api_base_url(&self) -> &str {
        self.api.base_url()
    }

    // ---- session ----------------------------------------------------

    /// `POST /signup`. Success does not authenticate; the user logs in
    /// separately.
    pub async fn sign_up(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Result<(), ClientError> {
        self.dispatch_session(SessionEvent::SignUpStarted);
        let request = SignUpRequest {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            role,
        };
        match self.api.sign_up(&request).await {
            Ok(()) => {
                self.dispatch_session(SessionEvent::SignUpSucceeded);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "signup failed");
                self.dispatch_session(SessionEvent::SignUpFailed {
                    message: slice_message(&e, "Signup failed"),
                });
                Err(e.into())
            }
        }
    }

    /// `POST /login`. On success the token is persisted synchronously with
    /// the state transition so a reload can restore the session. On
    /// failure the prior auth state is left untouched.
    pub async fn log_in(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<(), ClientError> {
        self.dispatch_session(SessionEvent::LogInStarted);
        let request = LogInRequest {
            email: email.into(),
            password: password.into(),
        };
        match self.api.log_in(&request).await {
            Ok(response) => {
                if let Err(e) = self.storage.store(&response.token) {
                    // Token stays usable in memory for this run.
                    warn!(error = %e, "failed to persist token");
                }
                self.dispatch_session(SessionEvent::LogInSucceeded {
                    token: response.token,
                });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.dispatch_session(SessionEvent::LogInFailed {
                    message: slice_message(&e, "Login failed"),
                });
                Err(e.into())
            }
        }
    }

    /// `GET /me`. Requires a token; fails locally without one. An
    /// unauthorized response additionally forces a full logout so a stale
    /// token cannot linger.
    pub async fn fetch_current_user(&mut self) -> Result<(), ClientError> {
        self.dispatch_session(SessionEvent::FetchUserStarted);

        let Some(token) = self.session.token.clone() else {
            self.dispatch_session(SessionEvent::FetchUserFailed {
                message: "No token found".to_string(),
            });
            return Err(ClientError::MissingToken);
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                self.dispatch_session(SessionEvent::FetchUserSucceeded { user });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "current-user fetch failed");
                self.dispatch_session(SessionEvent::FetchUserFailed {
                    message: slice_message(&e, "Failed to get user data"),
                });
                if e.is_unauthorized() {
                    info!("token rejected by backend, forcing logout");
                    self.dispatch_session(SessionEvent::SessionInvalidated);
                    if let Err(e) = self.storage.clear() {
                        warn!(error = %e, "failed to clear persisted token");
                    }
                }
                Err(e.into())
            }
        }
    }

    /// Synchronous, idempotent logout: clears identity, error, and the
    /// persisted token.
    pub fn log_out(&mut self) {
        self.dispatch_session(SessionEvent::LoggedOut);
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "failed to clear persisted token");
        }
    }

    pub fn clear_session_error(&mut self) {
        self.dispatch_session(SessionEvent::ErrorCleared);
    }

    // ---- profile ----------------------------------------------------

    /// Seed the editable profile, e.g. from the fetched session user.
    pub fn load_profile(&mut self, profile: Profile) {
        self.dispatch_profile(ProfileEvent::Loaded { profile });
    }

    /// `PUT /profile` with a prepared payload. `skills` must be set only
    /// when the role is mentor; that contract is the caller's, not the
    /// slice's.
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), ClientError> {
        let token = self.token()?;
        self.dispatch_profile(ProfileEvent::UpdateStarted);
        match self.api.update_profile(&token, &update).await {
            Ok(profile) => {
                self.dispatch_profile(ProfileEvent::UpdateSucceeded { profile });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "profile update failed");
                self.dispatch_profile(ProfileEvent::UpdateFailed {
                    message: slice_message(&e, "Failed to update profile"),
                });
                Err(e.into())
            }
        }
    }

    /// Like [`MatchClient::update_profile`], but validates and encodes a
    /// raw image first. Rejected images short-circuit before any event is
    /// dispatched or any network call is made.
    pub async fn update_profile_with_image(
        &mut self,
        mut update: ProfileUpdate,
        image_bytes: Option<&[u8]>,
    ) -> Result<(), ClientError> {
        if let Some(bytes) = image_bytes {
            update.image = Some(encode_profile_image(bytes)?);
        }
        self.update_profile(update).await
    }

    pub fn clear_profile_error(&mut self) {
        self.dispatch_profile(ProfileEvent::ErrorCleared);
    }

    // ---- mentor directory -------------------------------------------

    /// Local setter; call [`MatchClient::fetch_mentors`] afterwards to
    /// apply it.
    pub fn set_search_skill(&mut self, value: impl Into<String>) {
        self.dispatch_mentors(MentorEvent::SearchSkillChanged {
            value: value.into(),
        });
    }

    /// Local setter; call [`MatchClient::fetch_mentors`] afterwards to
    /// apply it.
    pub fn set_sort_by(&mut self, value: SortBy) {
        self.dispatch_mentors(MentorEvent::SortByChanged { value });
    }

    /// `GET /mentors` with the currently applied filter and sort. An empty
    /// skill filter omits `skill`; [`SortBy::Id`] omits `order_by`. The
    /// list is replaced wholesale on success.
    pub async fn fetch_mentors(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;
        self.dispatch_mentors(MentorEvent::FetchStarted);

        let skill = if self.mentors.search_skill.is_empty() {
            None
        } else {
            Some(self.mentors.search_skill.clone())
        };
        let order_by = self.mentors.sort_by.query_value();

        match self.api.mentors(&token, skill.as_deref(), order_by).await {
            Ok(mentors) => {
                self.dispatch_mentors(MentorEvent::FetchSucceeded { mentors });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "mentor fetch failed");
                self.dispatch_mentors(MentorEvent::FetchFailed {
                    message: slice_message(&e, "Failed to fetch mentors"),
                });
                Err(e.into())
            }
        }
    }

    pub fn clear_mentor_error(&mut self) {
        self.dispatch_mentors(MentorEvent::ErrorCleared);
    }

    // ---- match requests ---------------------------------------------

    /// `POST /match-requests`. Appends the server-returned request to the
    /// outgoing collection, never deduplicating; the view gates resends
    /// via [`crate::requests::query::has_pending_request`].
    pub async fn create_match_request(
        &mut self,
        mentor_id: i64,
        mentee_id: i64,
        message: impl Into<String>,
    ) -> Result<MatchRequest, ClientError> {
        let token = self.token()?;
        self.dispatch_requests(MatchRequestEvent::CreateStarted);
        let request = CreateMatchRequest {
            mentor_id,
            mentee_id,
            message: message.into(),
        };
        match self.api.create_match_request(&token, &request).await {
            Ok(created) => {
                self.dispatch_requests(MatchRequestEvent::CreateSucceeded {
                    request: created.clone(),
                });
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, "match request creation failed");
                self.dispatch_requests(MatchRequestEvent::CreateFailed {
                    message: slice_message(&e, "Failed to create match request"),
                });
                Err(e.into())
            }
        }
    }

    /// `GET /match-requests/incoming`; mentor-role views call this.
    pub async fn fetch_incoming_requests(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;
        self.dispatch_requests(MatchRequestEvent::FetchIncomingStarted);
        match self.api.incoming_requests(&token).await {
            Ok(requests) => {
                self.dispatch_requests(MatchRequestEvent::FetchIncomingSucceeded { requests });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "incoming request fetch failed");
                self.dispatch_requests(MatchRequestEvent::FetchIncomingFailed {
                    message: slice_message(&e, "Failed to fetch incoming requests"),
                });
                Err(e.into())
            }
        }
    }

    /// `GET /match-requests/outgoing`; mentee-role views call this.
    pub async fn fetch_outgoing_requests(&mut self) -> Result<(), ClientError> {
        let token = self.token()?;
        self.dispatch_requests(MatchRequestEvent::FetchOutgoingStarted);
        match self.api.outgoing_requests(&token).await {
            Ok(requests) => {
                self.dispatch_requests(MatchRequestEvent::FetchOutgoingSucceeded { requests });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "outgoing request fetch failed");
                self.dispatch_requests(MatchRequestEvent::FetchOutgoingFailed {
                    message: slice_message(&e, "Failed to fetch outgoing requests"),
                });
                Err(e.into())
            }
        }
    }

    /// `PUT /match-requests/{id}/accept`. On success sets the local
    /// incoming entry's status; a failed call leaves the slice untouched
    /// and only surfaces through the returned error.
    pub async fn accept_match_request(&mut self, id: i64) -> Result<DecisionOutcome, ClientError> {
        let token = self.token()?;
        let updated = self.api.accept_request(&token, id).await?;
        let outcome = self.incoming_outcome(updated.id);
        self.dispatch_requests(MatchRequestEvent::Accepted { id: updated.id });
        Ok(outcome)
    }

    /// `PUT /match-requests/{id}/reject`.
    pub async fn reject_match_request(&mut self, id: i64) -> Result<DecisionOutcome, ClientError> {
        let token = self.token()?;
        let updated = self.api.reject_request(&token, id).await?;
        let outcome = self.incoming_outcome(updated.id);
        self.dispatch_requests(MatchRequestEvent::Rejected { id: updated.id });
        Ok(outcome)
    }

    /// `DELETE /match-requests/{id}`; operates on the outgoing collection.
    pub async fn cancel_match_request(&mut self, id: i64) -> Result<DecisionOutcome, ClientError> {
        let token = self.token()?;
        let updated = self.api.cancel_request(&token, id).await?;
        let outcome = if self.requests.has_outgoing(updated.id) {
            DecisionOutcome::Updated
        } else {
            debug!(id = updated.id, "cancelled request not in local outgoing list");
            DecisionOutcome::NotFoundLocally
        };
        self.dispatch_requests(MatchRequestEvent::Cancelled { id: updated.id });
        Ok(outcome)
    }

    pub fn clear_request_error(&mut self) {
        self.dispatch_requests(MatchRequestEvent::ErrorCleared);
    }

    // ---- internals --------------------------------------------------

    fn incoming_outcome(&self, id: i64) -> DecisionOutcome {
        if self.requests.has_incoming(id) {
            DecisionOutcome::Updated
        } else {
            debug!(id, "settled request not in local incoming list");
            DecisionOutcome::NotFoundLocally
        }
    }

    fn token(&self) -> Result<String, ClientError> {
        self.session
            .token
            .clone()
            .ok_or(ClientError::MissingToken)
    }

    fn dispatch_session(&mut self, event: SessionEvent) {
        self.session = SessionReducer::reduce(mem::take(&mut self.session), event);
    }

    fn dispatch_profile(&mut self, event: ProfileEvent) {
        self.profile = ProfileReducer::reduce(mem::take(&mut self.profile), event);
    }

    fn dispatch_mentors(&mut self, event: MentorEvent) {
        self.mentors = MentorReducer::reduce(mem::take(&mut self.mentors), event);
    }

    fn dispatch_requests(&mut self, event: MatchRequestEvent) {
        self.requests = MatchRequestReducer::reduce(mem::take(&mut self.requests), event);
    }
}

/// Human-readable slice error: the backend message verbatim when present,
/// else the per-operation fallback.
fn slice_message(error: &ApiError, fallback: &str) -> String {
    error
        .backend_message()
        .map(str::to_owned)
        .unwrap_or_else(|| fallback.to_string())
}
