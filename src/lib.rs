pub mod auth;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod session;
pub mod storage;
pub mod transfer;

pub use crate::config::ServerConfig;
pub use crate::server::{Server, ServerIdentity};
