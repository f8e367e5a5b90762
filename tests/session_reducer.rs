use mentor_match::models::{Profile, Role, User};
use mentor_match::session::{SessionEvent, SessionReducer, SessionState};
use mentor_match::store::Reducer;

fn user() -> User {
    User {
        id: 1,
        email: "mentee@example.com".to_string(),
        role: Role::Mentee,
        profile: Some(Profile {
            name: "Kim".to_string(),
            bio: None,
            skills: None,
            image_url: None,
        }),
    }
}

fn authenticated() -> SessionState {
    SessionState {
        token: Some("abc".to_string()),
        is_authenticated: true,
        user: Some(user()),
        loading: false,
        error: None,
    }
}

#[test]
fn login_fulfilled_from_initial_state() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionEvent::LogInSucceeded {
            token: "abc".to_string(),
        },
    );
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(state.is_authenticated);
    assert!(!state.loading);
}

#[test]
fn login_then_logout_restores_initial_state() {
    let state = SessionReducer::reduce(SessionState::default(), SessionEvent::LogInStarted);
    let state = SessionReducer::reduce(
        state,
        SessionEvent::LogInSucceeded {
            token: "abc".to_string(),
        },
    );
    let state = SessionReducer::reduce(state, SessionEvent::LoggedOut);
    assert_eq!(state, SessionState::default());
}

#[test]
fn logout_is_idempotent() {
    let state = SessionReducer::reduce(authenticated(), SessionEvent::LoggedOut);
    let state = SessionReducer::reduce(state, SessionEvent::LoggedOut);
    assert_eq!(state, SessionState::default());
}

#[test]
fn login_failure_leaves_prior_auth_state_untouched() {
    let state = SessionReducer::reduce(authenticated(), SessionEvent::LogInStarted);
    let state = SessionReducer::reduce(
        state,
        SessionEvent::LogInFailed {
            message: "Invalid credentials".to_string(),
        },
    );
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(state.is_authenticated);
    assert_eq!(state.user, Some(user()));
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(!state.loading);
}

#[test]
fn starting_an_attempt_sets_loading_and_clears_error() {
    let mut state = SessionState::default();
    state.error = Some("old error".to_string());

    for event in [
        SessionEvent::SignUpStarted,
        SessionEvent::LogInStarted,
        SessionEvent::FetchUserStarted,
    ] {
        let next = SessionReducer::reduce(state.clone(), event);
        assert!(next.loading);
        assert_eq!(next.error, None);
    }
}

#[test]
fn loading_is_never_true_at_rest() {
    let started = SessionReducer::reduce(SessionState::default(), SessionEvent::LogInStarted);
    assert!(started.loading);

    let fulfilled = SessionReducer::reduce(
        started.clone(),
        SessionEvent::LogInSucceeded {
            token: "abc".to_string(),
        },
    );
    assert!(!fulfilled.loading);

    let rejected = SessionReducer::reduce(
        started,
        SessionEvent::LogInFailed {
            message: "nope".to_string(),
        },
    );
    assert!(!rejected.loading);
}

#[test]
fn signup_success_does_not_authenticate() {
    let state = SessionReducer::reduce(SessionState::default(), SessionEvent::SignUpStarted);
    let state = SessionReducer::reduce(state, SessionEvent::SignUpSucceeded);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert!(!state.loading);
}

#[test]
fn fetch_user_success_replaces_user() {
    let mut state = SessionState::restored(Some("abc".to_string()));
    state = SessionReducer::reduce(state, SessionEvent::FetchUserStarted);
    state = SessionReducer::reduce(state, SessionEvent::FetchUserSucceeded { user: user() });
    assert_eq!(state.user, Some(user()));
    assert!(state.is_authenticated);
    assert!(!state.loading);
}

#[test]
fn session_invalidated_clears_identity_regardless_of_prior_state() {
    let state = SessionReducer::reduce(
        authenticated(),
        SessionEvent::FetchUserFailed {
            message: "Could not validate credentials".to_string(),
        },
    );
    let state = SessionReducer::reduce(state, SessionEvent::SessionInvalidated);
    assert_eq!(state.token, None);
    assert!(!state.is_authenticated);
    assert_eq!(state.user, None);
    // The failure message stays visible; only user-initiated logout clears it.
    assert_eq!(
        state.error.as_deref(),
        Some("Could not validate credentials")
    );
}

#[test]
fn clear_error_touches_nothing_else() {
    let mut state = authenticated();
    state.error = Some("boom".to_string());
    let next = SessionReducer::reduce(state.clone(), SessionEvent::ErrorCleared);
    assert_eq!(next.error, None);
    assert_eq!(next.token, state.token);
    assert_eq!(next.user, state.user);
    assert_eq!(next.is_authenticated, state.is_authenticated);
}

#[test]
fn restored_token_seeds_authentication() {
    let state = SessionState::restored(Some("abc".to_string()));
    assert!(state.is_authenticated);
    assert_eq!(state.user, None);

    let state = SessionState::restored(None);
    assert!(!state.is_authenticated);
}
