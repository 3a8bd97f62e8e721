use super::*;

fn sample_user() -> User {
    User {
        id: "2".into(),
        name: "João Silva".into(),
        email: "usuario@financeai.com".into(),
        role: Role::User,
        avatar: None,
    }
}

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
}

#[test]
fn role_deserializes_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
}

#[test]
fn role_rejects_unknown_variant() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Admin.home_path(), "/admin");
    assert_eq!(Role::User.home_path(), "/dashboard");
}

#[test]
fn role_display_matches_serialization() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::User.to_string(), "user");
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_round_trips_through_json() {
    let user = sample_user();
    let json = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_without_avatar_omits_field() {
    let json = serde_json::to_string(&sample_user()).unwrap();
    assert!(!json.contains("avatar"));
}

#[test]
fn user_missing_avatar_deserializes_as_none() {
    let json = r#"{"id":"1","name":"Administrador","email":"admin@financeai.com","role":"admin"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.avatar, None);
    assert_eq!(user.role, Role::Admin);
}
