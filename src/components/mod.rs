//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers. Route-scoped orchestration stays in
//! `pages`.

pub mod footer;
pub mod navbar;
pub mod settings_panel;
pub mod stat_card;
pub mod toast;
pub mod user_table;
