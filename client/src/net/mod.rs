//! Networking modules for the authentication endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login call and classifies failures; `types` defines the
//! wire schema.

pub mod api;
pub mod types;
