use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    assert!(ApiError::from_status(401, None).is_unauthorized());
}

#[test]
fn status_403_maps_to_forbidden() {
    assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
}

#[test]
fn other_4xx_keeps_the_server_message() {
    assert_eq!(
        ApiError::from_status(400, Some("Email already registered".to_owned())),
        ApiError::Validation("Email already registered".to_owned())
    );
}

#[test]
fn other_4xx_without_message_gets_a_generic_one() {
    assert_eq!(
        ApiError::from_status(422, None),
        ApiError::Validation("request rejected (status 422)".to_owned())
    );
}

#[test]
fn status_5xx_maps_to_server_failure() {
    assert_eq!(ApiError::from_status(500, None), ApiError::Server(500));
    assert_eq!(ApiError::from_status(503, Some("down".to_owned())), ApiError::Server(503));
}

#[test]
fn validation_displays_the_bare_message() {
    let error = ApiError::Validation("Full name is required".to_owned());
    assert_eq!(error.to_string(), "Full name is required");
}

#[test]
fn network_failure_display_mentions_the_server() {
    let error = ApiError::Network("timed out".to_owned());
    assert_eq!(error.to_string(), "could not reach the server: timed out");
}

#[test]
fn only_unauthorized_reports_unauthorized() {
    assert!(!ApiError::Forbidden.is_unauthorized());
    assert!(!ApiError::Server(500).is_unauthorized());
    assert!(!ApiError::Network(String::new()).is_unauthorized());
}
