//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's REST endpoints. Wire types live in the shared
//! `identity` crate so client and server agree on field names.

pub mod api;
