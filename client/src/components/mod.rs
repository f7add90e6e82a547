//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap pages with cross-cutting behavior; pages own route-level
//! content.

pub mod role_guard;
pub mod session_badge;
