//! Display-name helpers for dashboard greetings.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// First name with a capitalized first letter, for "Welcome, Jane!" banners.
/// Falls back to "there" when no usable name is present.
pub fn first_name(full_name: &str) -> String {
    let first = full_name.trim().split_whitespace().next().unwrap_or("");
    if first.is_empty() {
        return "there".to_owned();
    }
    let mut chars = first.chars();
    match chars.next() {
        Some(head) => format!("{}{}", head.to_uppercase(), chars.as_str()),
        None => "there".to_owned(),
    }
}

/// Full greeting line for dashboard headers.
pub fn welcome(full_name: &str) -> String {
    format!("Welcome, {}!", first_name(full_name))
}
