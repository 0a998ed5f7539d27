use super::*;

#[test]
fn valid_input_builds_the_request() {
    assert_eq!(
        validate_signup_input(" Jane Doe ", " jane@example.com ", "longenough"),
        Ok(SignupRequest {
            email: "jane@example.com".to_owned(),
            password: "longenough".to_owned(),
            full_name: "Jane Doe".to_owned(),
        })
    );
}

#[test]
fn blank_name_is_rejected() {
    assert_eq!(
        validate_signup_input("  ", "jane@example.com", "longenough"),
        Err("Enter your full name.")
    );
}

#[test]
fn invalid_email_is_rejected() {
    assert_eq!(
        validate_signup_input("Jane Doe", "nope", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_signup_input("Jane Doe", "jane@example.com", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_signup_input("Jane Doe", "jane@example.com", "1234567"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn eight_character_password_is_accepted() {
    assert!(validate_signup_input("Jane Doe", "jane@example.com", "12345678").is_ok());
}
