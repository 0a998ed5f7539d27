//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the resolved role of the current visitor and drives the
//! route guard; `notice` owns transient user-visible messages.

pub mod notice;
pub mod session;
