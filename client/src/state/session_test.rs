use identity::Role;

use super::*;

fn admin() -> SessionRecord {
    SessionRecord::logged_in("u-1", "ada@example.com", Role::Admin)
}

#[test]
fn default_is_loading_and_logged_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(state.session, SessionRecord::default());
}

#[test]
fn settle_ok_stores_session_and_stops_loading() {
    let mut state = SessionState::default();
    assert!(state.settle(Ok(admin())));
    assert!(!state.loading);
    assert_eq!(state.session, admin());
}

#[test]
fn settle_ok_with_partial_record_collapses_to_logged_out() {
    let mut state = SessionState::default();
    let partial = SessionRecord { is_logged_in: true, ..SessionRecord::default() };
    assert!(state.settle(Ok(partial)));
    assert_eq!(state.session, SessionRecord::default());
}

#[test]
fn settle_on_unauthorized_status_is_logged_out() {
    let mut state = SessionState::default();
    assert!(state.settle(Err(FetchError::Status(401))));
    assert!(!state.loading);
    assert!(!state.session.is_logged_in);
}

#[test]
fn settle_on_server_error_is_logged_out() {
    let mut state = SessionState::default();
    assert!(state.settle(Err(FetchError::Status(500))));
    assert!(!state.loading);
    assert_eq!(state.session, SessionRecord::default());
}

#[test]
fn settle_on_timeout_is_logged_out() {
    let mut state = SessionState::default();
    assert!(state.settle(Err(FetchError::Timeout)));
    assert!(!state.loading);
    assert_eq!(state.session, SessionRecord::default());
}

#[test]
fn settle_transitions_only_once() {
    let mut state = SessionState::default();
    assert!(state.settle(Err(FetchError::Network("offline".to_owned()))));
    assert!(!state.settle(Ok(admin())));
    assert_eq!(state.session, SessionRecord::default());
    assert!(!state.loading);
}
