//! Authentication system
//!
//! Validates the single configured credential pair.

pub mod validator;

pub use validator::{validate_password, validate_user};
