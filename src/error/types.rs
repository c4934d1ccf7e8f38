//! Error types
//!
//! Defines domain-specific error types for the server modules.

use std::fmt;

/// Authentication module errors
#[derive(Debug, PartialEq)]
pub enum AuthError {
    InvalidUsername(String),
    InvalidPassword,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::InvalidPassword => write!(f, "Invalid password"),
        }
    }
}

impl std::error::Error for AuthError {}
