//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Protected pages wrap their
//! content in `RoleGuard` and read the session it provides.

pub mod dashboard;
pub mod denied;
pub mod editor;
pub mod login;
pub mod posts;
