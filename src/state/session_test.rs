use super::*;

// =============================================================
// SessionStatus
// =============================================================

#[test]
fn default_status_is_booting() {
    assert_eq!(SessionStatus::default(), SessionStatus::Booting);
    assert!(!SessionStatus::Booting.is_resolved());
}

#[test]
fn resolved_statuses_report_resolved() {
    assert!(SessionStatus::Anonymous.is_resolved());
    assert!(SessionStatus::User.is_resolved());
    assert!(SessionStatus::Admin.is_resolved());
}

#[test]
fn only_user_and_admin_are_authenticated() {
    assert!(!SessionStatus::Booting.is_authenticated());
    assert!(!SessionStatus::Anonymous.is_authenticated());
    assert!(SessionStatus::User.is_authenticated());
    assert!(SessionStatus::Admin.is_authenticated());
}

#[test]
fn only_admin_is_admin() {
    assert!(SessionStatus::Admin.is_admin());
    assert!(!SessionStatus::User.is_admin());
    assert!(!SessionStatus::Anonymous.is_admin());
}

// =============================================================
// settle: deriving the role from token presence + the auth check
// =============================================================

#[test]
fn no_token_resolves_anonymous_regardless_of_check() {
    let store = CredentialStore::in_memory();
    let approving = AuthStatus { authenticated: true, is_admin: true };
    assert_eq!(settle(&store, approving), SessionStatus::Anonymous);
}

#[test]
fn no_token_resolves_anonymous_after_any_mutation_history() {
    let store = CredentialStore::in_memory();
    store.set("tok-1");
    store.set("tok-2");
    store.clear();
    let approving = AuthStatus { authenticated: true, is_admin: false };
    assert_eq!(settle(&store, approving), SessionStatus::Anonymous);
}

#[test]
fn negative_check_purges_the_token() {
    // No stale-authenticated state survives a negative check.
    let store = CredentialStore::in_memory();
    store.set("tok-expired");
    assert_eq!(settle(&store, AuthStatus::denied()), SessionStatus::Anonymous);
    assert_eq!(store.get(), None);
}

#[test]
fn failed_check_resolves_anonymous_not_user() {
    // The resolver maps transport failures to the denied default, so a
    // network outage can never read as an authenticated session.
    let store = CredentialStore::in_memory();
    store.set("tok-1");
    assert_eq!(settle(&store, AuthStatus::denied()), SessionStatus::Anonymous);
}

#[test]
fn positive_check_resolves_user() {
    let store = CredentialStore::in_memory();
    store.set("tok-1");
    let checked = AuthStatus { authenticated: true, is_admin: false };
    assert_eq!(settle(&store, checked), SessionStatus::User);
    assert_eq!(store.get(), Some("tok-1".to_owned()));
}

#[test]
fn positive_admin_check_resolves_admin() {
    let store = CredentialStore::in_memory();
    store.set("tok-1");
    let checked = AuthStatus { authenticated: true, is_admin: true };
    assert_eq!(settle(&store, checked), SessionStatus::Admin);
}

// =============================================================
// Sign-out transition
// =============================================================

#[test]
fn signed_out_purges_token_and_profile() {
    let store = CredentialStore::in_memory();
    store.set("tok-1");
    let state = signed_out(&store);
    assert_eq!(state.status, SessionStatus::Anonymous);
    assert_eq!(state.profile, None);
    assert_eq!(store.get(), None);
}

#[test]
fn signed_out_is_idempotent() {
    let store = CredentialStore::in_memory();
    let state = signed_out(&store);
    assert_eq!(state.status, SessionStatus::Anonymous);
    assert_eq!(store.get(), None);
}

// =============================================================
// Profile conversion
// =============================================================

#[test]
fn profile_from_response_keeps_display_fields() {
    let response = ProfileResponse {
        full_name: "Jane Doe".to_owned(),
        email: Some("jane@example.com".to_owned()),
        avatar_img: Some("https://example.com/a.png".to_owned()),
        redirect: Some("/dashboard".to_owned()),
    };
    let profile = Profile::from(response);
    assert_eq!(profile.full_name, "Jane Doe");
    assert_eq!(profile.email, Some("jane@example.com".to_owned()));
    assert_eq!(profile.avatar_img, Some("https://example.com/a.png".to_owned()));
}

#[test]
fn admin_profile_without_email_converts() {
    let response = ProfileResponse {
        full_name: "Pat Admin".to_owned(),
        email: None,
        avatar_img: None,
        redirect: None,
    };
    let profile = Profile::from(response);
    assert_eq!(profile.email, None);
    assert_eq!(profile.avatar_img, None);
}
