//! Account table for the admin dashboard.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::AdminUser;
use crate::util::avatar;

/// Render an RFC 3339 timestamp as e.g. `Aug 15, 2025 10:30`. Unparseable
/// values are shown as-is rather than hidden.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .format("%b %e, %Y %H:%M")
            .to_string()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
        Err(_) => raw.to_owned(),
    }
}

/// Last-login column value; accounts that never logged in show `Never`.
pub fn format_last_login(last_login: Option<&str>) -> String {
    match last_login {
        Some(raw) => format_timestamp(raw),
        None => "Never".to_owned(),
    }
}

fn role_label(is_admin: bool) -> &'static str {
    if is_admin { "Admin" } else { "User" }
}

#[component]
pub fn UserTable(users: Vec<AdminUser>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"User"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Joined"</th>
                    <th>"Last Login"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|user| {
                        let avatar_src = avatar::avatar_url(user.avatar_img.as_deref(), &user.full_name);
                        let role_class = if user.is_admin {
                            "user-table__role user-table__role--admin"
                        } else {
                            "user-table__role"
                        };
                        view! {
                            <tr>
                                <td>
                                    <span class="user-table__identity">
                                        <img class="user-table__avatar" src=avatar_src alt=avatar::initial(&user.full_name)/>
                                        {user.full_name.clone()}
                                    </span>
                                </td>
                                <td>{user.email.clone()}</td>
                                <td>
                                    <span class=role_class>{role_label(user.is_admin)}</span>
                                </td>
                                <td>{format_timestamp(&user.created_at)}</td>
                                <td>{format_last_login(user.last_login.as_deref())}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
