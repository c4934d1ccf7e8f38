//! Server core functionality
//!
//! This module contains the listener, the shared server identity, and the
//! per-session context handed to every connection task.

pub mod core;
pub mod identity;

pub use core::{Server, SessionContext};
pub use identity::ServerIdentity;
