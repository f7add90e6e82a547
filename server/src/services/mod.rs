//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own sealing, cookie handling, and file access so route
//! handlers can stay focused on status codes and response shapes.

pub mod codec;
pub mod posts;
pub mod session;
