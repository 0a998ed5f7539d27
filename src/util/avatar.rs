//! Avatar URL and fallback helpers.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

/// Generated-avatar fallback for accounts without an uploaded picture.
pub fn fallback_avatar_url(full_name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}",
        urlencoding::encode(full_name)
    )
}

/// Pick the account's avatar, falling back to a generated one.
pub fn avatar_url(explicit: Option<&str>, full_name: &str) -> String {
    match explicit {
        Some(url) if !url.trim().is_empty() => url.to_owned(),
        _ => fallback_avatar_url(full_name),
    }
}

/// Single-letter fallback shown while an avatar image loads.
pub fn initial(full_name: &str) -> String {
    full_name
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |first| first.to_uppercase().to_string())
}
