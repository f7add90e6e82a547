use super::*;

fn admin() -> SessionRecord {
    SessionRecord::logged_in("u-1", "ada@example.com", Role::Admin)
}

// =============================================================================
// SessionRecord
// =============================================================================

#[test]
fn default_record_serializes_to_logged_out_shape() {
    let json = serde_json::to_string(&SessionRecord::default()).unwrap();
    assert_eq!(json, r#"{"isLoggedIn":false}"#);
}

#[test]
fn logged_in_record_uses_camel_case_fields() {
    let value = serde_json::to_value(admin()).unwrap();
    assert_eq!(value["isLoggedIn"], true);
    assert_eq!(value["userId"], "u-1");
    assert_eq!(value["email"], "ada@example.com");
    assert_eq!(value["role"], "admin");
}

#[test]
fn logged_out_body_deserializes_to_default() {
    let record: SessionRecord = serde_json::from_str(r#"{"isLoggedIn":false}"#).unwrap();
    assert_eq!(record, SessionRecord::default());
}

#[test]
fn unknown_role_fails_to_deserialize() {
    let raw = r#"{"isLoggedIn":true,"userId":"u","email":"e@x","role":"root"}"#;
    assert!(serde_json::from_str::<SessionRecord>(raw).is_err());
}

#[test]
fn normalized_keeps_complete_record() {
    assert_eq!(admin().normalized(), admin());
}

#[test]
fn normalized_drops_fields_of_logged_out_record() {
    let record = SessionRecord { is_logged_in: false, ..admin() };
    assert_eq!(record.normalized(), SessionRecord::default());
}

#[test]
fn normalized_drops_logged_in_record_without_role() {
    let record = SessionRecord { role: None, ..admin() };
    assert!(!record.is_authenticated());
    assert_eq!(record.normalized(), SessionRecord::default());
}

#[test]
fn normalized_drops_empty_user_id() {
    let record = SessionRecord::logged_in("", "ada@example.com", Role::Viewer);
    assert_eq!(record.normalized(), SessionRecord::default());
}

// =============================================================================
// Role / RoleSet
// =============================================================================

#[test]
fn role_parses_case_insensitively() {
    assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("VIEWER".parse::<Role>(), Ok(Role::Viewer));
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!("owner".parse::<Role>(), Err(RoleSetError::Unknown("owner".into())));
}

#[test]
fn role_display_matches_wire_name() {
    for role in Role::ALL {
        let wire = serde_json::to_value(role).unwrap();
        assert_eq!(wire, role.to_string());
    }
}

#[test]
fn role_set_rejects_empty() {
    assert_eq!(RoleSet::new(Vec::<Role>::new()), Err(RoleSetError::Empty));
    assert_eq!(RoleSet::parse(" , "), Err(RoleSetError::Empty));
}

#[test]
fn role_set_parse_list() {
    let set = RoleSet::parse("admin, editor").unwrap();
    assert!(set.contains(Role::Admin));
    assert!(set.contains(Role::Editor));
    assert!(!set.contains(Role::Viewer));
    assert_eq!(set.iter().count(), 2);
}

#[test]
fn role_set_parse_rejects_unknown_entry() {
    assert_eq!(RoleSet::parse("admin,guest"), Err(RoleSetError::Unknown("guest".into())));
}

#[test]
fn role_set_with_extends_the_set() {
    let set = RoleSet::only(Role::Admin).with(Role::Editor);
    assert!(set.contains(Role::Admin));
    assert!(set.contains(Role::Editor));
    assert!(!set.contains(Role::Viewer));
    assert_eq!(set, RoleSet::parse("editor, admin").unwrap());
}

#[test]
fn role_set_permits_matching_role() {
    let set = RoleSet::new([Role::Admin, Role::Editor]).unwrap();
    assert!(set.permits(&admin()));
}

#[test]
fn role_set_denies_other_role() {
    let viewer = SessionRecord::logged_in("u-2", "bo@example.com", Role::Viewer);
    assert!(!RoleSet::only(Role::Admin).permits(&viewer));
}

#[test]
fn role_set_denies_logged_out_record() {
    assert!(!RoleSet::only(Role::Admin).permits(&SessionRecord::default()));
}

// =============================================================================
// Post
// =============================================================================

#[test]
fn post_optional_fields_default() {
    let post: Post = serde_json::from_str(r#"{"id":"1","title":"Hello"}"#).unwrap();
    assert_eq!(post.body, "");
    assert!(post.author.is_none());
    assert!(post.created_at.is_none());
}

#[test]
fn post_reads_camel_case_timestamp() {
    let post: Post =
        serde_json::from_str(r#"{"id":"1","title":"Hello","body":"*hi*","createdAt":"2024-01-02"}"#).unwrap();
    assert_eq!(post.created_at.as_deref(), Some("2024-01-02"));
}
