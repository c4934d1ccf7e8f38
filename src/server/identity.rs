//! Module `identity`
//!
//! The immutable identity shared by every session: the directory label
//! presented to clients and the single accepted credential pair.
//! Constructed once at startup and never mutated.

/// Read-only server identity, safely shared across sessions without locking.
#[derive(Debug, Clone)]
pub struct ServerIdentity {
    /// Directory path shown in PWD replies; not used for real file access
    pub root_label: String,
    /// The single accepted username
    pub username: String,
    /// The single accepted password
    pub password: String,
}
