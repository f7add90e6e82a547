//! Client-side state snapshots.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types here are plain data so transitions can be unit tested without a
//! reactive runtime; hooks wrap them in signals.

pub mod session;
