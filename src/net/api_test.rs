use super::*;

fn client_at(current_view: &str) -> ApiClient {
    ApiClient::new(CredentialStore::in_memory(), Navigator::recorded(current_view))
}

// =============================================================
// URL and header construction
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/api/auth/status"), format!("{}/api/auth/status", api_base()));
}

#[test]
fn oauth_login_url_targets_the_api_origin() {
    assert_eq!(oauth_login_url(), format!("{}/login", api_base()));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}

// =============================================================
// Path classification
// =============================================================

#[test]
fn login_and_signup_are_auth_attempts() {
    assert!(is_auth_attempt("/api/login/password"));
    assert!(is_auth_attempt("/api/signup"));
}

#[test]
fn status_and_profile_calls_are_not_auth_attempts() {
    assert!(!is_auth_attempt("/api/auth/status"));
    assert!(!is_auth_attempt("/api/dashboard"));
}

#[test]
fn protected_paths_cover_dashboards_profile_and_account() {
    assert!(is_protected_api_path("/api/dashboard"));
    assert!(is_protected_api_path("/api/admin/dashboard"));
    assert!(is_protected_api_path("/api/admin/users"));
    assert!(is_protected_api_path("/api/profile"));
    assert!(is_protected_api_path("/api/account"));
}

#[test]
fn auth_endpoints_are_not_protected_paths() {
    // The status probe and credential issuance must work without a token.
    assert!(!is_protected_api_path("/api/auth/status"));
    assert!(!is_protected_api_path("/api/login/password"));
    assert!(!is_protected_api_path("/api/signup"));
}

// =============================================================
// Preflight: tokenless calls to protected paths
// =============================================================

#[test]
fn preflight_passes_existing_token_through() {
    let client = client_at("/dashboard");
    client.store.set("tok-1");
    assert_eq!(client.preflight("/api/dashboard"), Ok(Some("tok-1".to_owned())));
    assert!(client.nav.visits().is_empty());
}

#[test]
fn preflight_allows_tokenless_auth_calls() {
    let client = client_at("/signin");
    assert_eq!(client.preflight("/api/login/password"), Ok(None));
    assert!(client.nav.visits().is_empty());
}

#[test]
fn preflight_short_circuits_tokenless_protected_calls() {
    let client = client_at("/dashboard");
    assert_eq!(client.preflight("/api/dashboard"), Err(ApiError::Unauthorized));
    assert_eq!(client.nav.visits(), vec!["/login".to_owned()]);
}

// =============================================================
// Centralized 401 handling
// =============================================================

#[test]
fn unauthorized_on_protected_call_purges_and_redirects_once() {
    let client = client_at("/dashboard");
    client.store.set("tok-stale");

    let error = client.handle_unauthorized("/api/dashboard");
    assert_eq!(error, ApiError::Unauthorized);
    assert_eq!(client.store.get(), None);
    assert_eq!(client.nav.visits(), vec!["/login".to_owned()]);

    // A second 401 arriving while already on the login view must not bounce
    // the location again.
    let error = client.handle_unauthorized("/api/dashboard");
    assert_eq!(error, ApiError::Unauthorized);
    assert_eq!(client.nav.visits(), vec!["/login".to_owned()]);
}

#[test]
fn unauthorized_during_login_attempt_is_propagated_untouched() {
    // A wrong password is not a session expiry: the token (absent or not)
    // stays put and no redirect fires.
    let client = client_at("/signin");
    client.store.set("tok-existing");

    let error = client.handle_unauthorized("/api/login/password");
    assert_eq!(error, ApiError::Unauthorized);
    assert_eq!(client.store.get(), Some("tok-existing".to_owned()));
    assert!(client.nav.visits().is_empty());
}

#[test]
fn unauthorized_during_signup_attempt_is_propagated_untouched() {
    let client = client_at("/signup");
    let error = client.handle_unauthorized("/api/signup");
    assert_eq!(error, ApiError::Unauthorized);
    assert!(client.nav.visits().is_empty());
}

#[test]
fn unauthorized_while_on_public_auth_view_does_not_redirect() {
    // A stale background call resolving after the user already landed on a
    // public auth view must not purge-and-bounce again.
    let client = client_at("/login");
    client.store.set("tok-stale");

    let error = client.handle_unauthorized("/api/dashboard");
    assert_eq!(error, ApiError::Unauthorized);
    assert!(client.nav.visits().is_empty());
}
