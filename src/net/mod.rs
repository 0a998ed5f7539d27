//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing and the per-endpoint wrappers, `error` defines
//! the failure taxonomy, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
