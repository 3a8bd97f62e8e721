use super::*;

// =============================================================================
// seeded accounts
// =============================================================================

#[test]
fn seeded_admin_matches() {
    let dir = Directory::seeded();
    let user = dir.find_by_credentials("admin@financeai.com", "admin123").unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Administrador");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn seeded_user_matches() {
    let dir = Directory::seeded();
    let user = dir.find_by_credentials("usuario@financeai.com", "user123").unwrap();
    assert_eq!(user.id, "2");
    assert_eq!(user.name, "João Silva");
    assert_eq!(user.role, Role::User);
}

// =============================================================================
// lookup semantics
// =============================================================================

#[test]
fn unknown_email_is_none() {
    let dir = Directory::seeded();
    assert!(dir.find_by_credentials("invalid@email.com", "wrongpassword").is_none());
}

#[test]
fn wrong_password_is_none() {
    let dir = Directory::seeded();
    assert!(dir.find_by_credentials("admin@financeai.com", "admin124").is_none());
}

#[test]
fn match_is_case_sensitive_on_email() {
    let dir = Directory::seeded();
    assert!(dir.find_by_credentials("Admin@financeai.com", "admin123").is_none());
}

#[test]
fn match_is_case_sensitive_on_password() {
    let dir = Directory::seeded();
    assert!(dir.find_by_credentials("admin@financeai.com", "ADMIN123").is_none());
}

#[test]
fn empty_directory_never_matches() {
    let dir = Directory::new(Vec::new());
    assert!(dir.find_by_credentials("admin@financeai.com", "admin123").is_none());
}
