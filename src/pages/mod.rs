//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard installation, fetches,
//! form submission) and delegates rendering details to `components`.

pub mod admin_dashboard;
pub mod auth_callback;
pub mod dashboard;
pub mod home;
pub mod learn_more;
pub mod login;
pub mod signin;
pub mod signup;
