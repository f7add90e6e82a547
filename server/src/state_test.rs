use super::*;
use crate::config::{AppConfig, CLOCK_SKEW_SECS};

fn config(pairs: &[(&str, &str)]) -> AppConfig {
    AppConfig::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    })
    .unwrap()
}

#[test]
fn app_state_copies_cookie_settings() {
    let config = config(&[
        ("SESSION_SECRET", test_helpers::TEST_SECRET),
        ("SESSION_COOKIE_NAME", "sid"),
        ("COOKIE_SECURE", "true"),
        ("SESSION_TTL_SECS", "600"),
    ]);
    let state = AppState::new(&config);
    assert_eq!(state.cookie.name, "sid");
    assert!(state.cookie.secure);
    assert_eq!(state.cookie.max_age, time::Duration::seconds(600 - CLOCK_SKEW_SECS));
}

#[test]
fn app_state_copies_posts_path_and_bypass() {
    let config = config(&[
        ("SESSION_SECRET", test_helpers::TEST_SECRET),
        ("POSTS_FILE", "/srv/posts.json"),
        ("DEV_SESSION_BYPASS", "1"),
    ]);
    let state = AppState::new(&config);
    assert_eq!(state.posts_path.as_path(), std::path::Path::new("/srv/posts.json"));
    assert!(state.dev_session_bypass);
}

#[test]
fn app_state_codec_uses_configured_secret() {
    let config = config(&[("SESSION_SECRET", test_helpers::TEST_SECRET)]);
    let state = AppState::new(&config);
    let record = identity::SessionRecord::logged_in("u", "u@example.com", identity::Role::Viewer);
    let envelope = test_helpers::test_app_state().codec.encode(&record).unwrap();
    assert_eq!(state.codec.decode(&envelope), Some(record));
}
