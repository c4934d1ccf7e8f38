//! Session management
//!
//! One `Session` per control connection: authentication state, the async
//! request/response loop, and connection teardown.

pub mod handler;
pub mod state;

pub use handler::handle_session;
pub use state::{Session, TransferMode};
