//! Authentication validator
//!
//! Checks usernames and passwords against the server identity. There is a
//! single fixed account; no per-user lookup exists.

use crate::error::AuthError;
use crate::server::ServerIdentity;

/// Validates that the given username is the configured one.
pub fn validate_user(username: &str, identity: &ServerIdentity) -> Result<(), AuthError> {
    if username == identity.username {
        Ok(())
    } else {
        Err(AuthError::InvalidUsername(username.to_string()))
    }
}

/// Validates that the given password is the configured one.
///
/// The username accepted earlier by USER is intentionally not re-checked
/// here; the static password is the whole gate.
pub fn validate_password(password: &str, identity: &ServerIdentity) -> Result<(), AuthError> {
    if password == identity.password {
        Ok(())
    } else {
        Err(AuthError::InvalidPassword)
    }
}
