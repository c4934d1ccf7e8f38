//! Module `state`
//!
//! Defines the `Session` struct tracking one control connection's
//! authentication progress and transfer mode. Each session is exclusively
//! owned by its connection task; nothing here is shared.

/// Transfer representation selected via the TYPE command.
///
/// Recorded for the session but not consulted by any other command; each
/// TYPE is acknowledged independently and no default applies before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferMode {
    Ascii,
    Binary,
}

/// Per-connection protocol state.
///
/// `authenticated` moves false to true at most once, only through a
/// successful PASS that follows an accepted USER, and never reverts while
/// the connection is open.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
    pending_username: Option<String>,
    transfer_mode: Option<TransferMode>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a PASS has completed successfully.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Username accepted by USER, awaiting (or already past) PASS.
    pub fn pending_username(&self) -> Option<&str> {
        self.pending_username.as_deref()
    }

    pub fn transfer_mode(&self) -> Option<TransferMode> {
        self.transfer_mode
    }

    /// Record an accepted USER; a following PASS completes the login.
    pub fn set_pending_username(&mut self, username: String) {
        self.pending_username = Some(username);
    }

    /// Mark the login complete. Called only from the PASS handler.
    pub fn set_authenticated(&mut self) {
        self.authenticated = true;
    }

    pub fn set_transfer_mode(&mut self, mode: TransferMode) {
        self.transfer_mode = Some(mode);
    }
}
