//! Error handling
//!
//! Defines error types and handling for the FTP control server.

pub mod types;

pub use types::AuthError;
