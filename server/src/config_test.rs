use std::collections::HashMap;

use super::*;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// SessionSecret
// =============================================================================

#[test]
fn secret_accepts_minimum_length() {
    assert!(SessionSecret::new("x".repeat(MIN_SECRET_LEN)).is_ok());
}

#[test]
fn secret_rejects_short_value() {
    assert_eq!(
        SessionSecret::new("short"),
        Err(ConfigError::SecretTooShort { min: MIN_SECRET_LEN, len: 5 })
    );
}

#[test]
fn secret_debug_is_redacted() {
    let secret = SessionSecret::new(SECRET).unwrap();
    let debug = format!("{secret:?}");
    assert!(!debug.contains(SECRET));
    assert!(debug.contains("redacted"));
}

// =============================================================================
// AppConfig::from_lookup
// =============================================================================

#[test]
fn missing_secret_is_fatal() {
    let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "SESSION_SECRET" });
}

#[test]
fn empty_secret_counts_as_missing() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", "")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "SESSION_SECRET" });
}

#[test]
fn short_secret_is_fatal() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", "tooshort")])).unwrap_err();
    assert!(matches!(err, ConfigError::SecretTooShort { len: 8, .. }));
}

#[test]
fn defaults_applied() {
    let config = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET)])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.deployment, Deployment::Development);
    assert_eq!(config.session.cookie_name, DEFAULT_COOKIE_NAME);
    assert!(!config.session.secure);
    assert_eq!(config.session.ttl, Duration::seconds(DEFAULT_SESSION_TTL_SECS));
    assert!(config.session.previous_secrets.is_empty());
    assert_eq!(config.posts_path, PathBuf::from(DEFAULT_POSTS_FILE));
    assert!(!config.dev_session_bypass);
}

#[test]
fn production_defaults_to_secure_cookie() {
    let config = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("APP_ENV", "production")])).unwrap();
    assert_eq!(config.deployment, Deployment::Production);
    assert!(config.session.secure);
}

#[test]
fn cookie_secure_overrides_deployment() {
    let config = AppConfig::from_lookup(lookup(&[
        ("SESSION_SECRET", SECRET),
        ("APP_ENV", "production"),
        ("COOKIE_SECURE", "off"),
    ]))
    .unwrap();
    assert!(!config.session.secure);
}

#[test]
fn invalid_cookie_secure_is_rejected() {
    let err =
        AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "COOKIE_SECURE", value: "maybe".into() });
}

#[test]
fn unknown_app_env_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("APP_ENV", "staging")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "APP_ENV", .. }));
}

#[test]
fn previous_secrets_split_on_commas() {
    let previous = format!("{}, {}", "a".repeat(32), "b".repeat(40));
    let config =
        AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_SECRET_PREVIOUS", previous.as_str())]))
            .unwrap();
    assert_eq!(config.session.previous_secrets.len(), 2);
}

#[test]
fn short_previous_secret_is_fatal() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_SECRET_PREVIOUS", "old")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::SecretTooShort { len: 3, .. }));
}

#[test]
fn ttl_must_exceed_clock_skew() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_TTL_SECS", "60")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_TTL_SECS", .. }));
}

#[test]
fn ttl_is_capped_at_one_year() {
    let max = MAX_SESSION_TTL_SECS.to_string();
    let config = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_TTL_SECS", max.as_str())])).unwrap();
    assert_eq!(config.session.ttl, Duration::days(365));

    let over = (MAX_SESSION_TTL_SECS + 1).to_string();
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_TTL_SECS", over.as_str())])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_TTL_SECS", .. }));

    let huge = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("SESSION_TTL_SECS", "9223372036854775807")]));
    assert!(matches!(huge, Err(ConfigError::Invalid { var: "SESSION_TTL_SECS", .. })));
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("SESSION_SECRET", SECRET), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
}

#[test]
fn overrides_applied() {
    let config = AppConfig::from_lookup(lookup(&[
        ("SESSION_SECRET", SECRET),
        ("SESSION_COOKIE_NAME", "sid"),
        ("SESSION_TTL_SECS", "3600"),
        ("POSTS_FILE", "/tmp/posts.json"),
        ("DEV_SESSION_BYPASS", "yes"),
        ("PORT", "8080"),
    ]))
    .unwrap();
    assert_eq!(config.session.cookie_name, "sid");
    assert_eq!(config.session.ttl, Duration::hours(1));
    assert_eq!(config.session.cookie_max_age(), Duration::seconds(3600 - CLOCK_SKEW_SECS));
    assert_eq!(config.posts_path, PathBuf::from("/tmp/posts.json"));
    assert!(config.dev_session_bypass);
    assert_eq!(config.port, 8080);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
