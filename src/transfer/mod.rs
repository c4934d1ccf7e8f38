//! Data-channel collaborator
//!
//! PASV and PORT are acknowledged through a `DataChannelPlanner`: the
//! protocol core asks for a passive endpoint to advertise, or hands over
//! the client's active-mode target. Actually opening data sockets is
//! behind this seam and not exercised here.

use log::debug;
use std::net::{Ipv4Addr, SocketAddrV4};

/// Plans data connections for a session without owning any protocol state.
pub trait DataChannelPlanner: Send + Sync {
    /// Address the server would listen on for a passive-mode data connection.
    fn passive_endpoint(&self) -> SocketAddrV4;

    /// Record the client's active-mode target from a PORT argument.
    fn record_active_target(&self, spec: &str);
}

/// Planner that acknowledges PASV/PORT without opening data sockets.
///
/// Advertises a fixed loopback endpoint and logs recorded PORT targets.
pub struct PlaceholderPlanner {
    passive: SocketAddrV4,
}

impl Default for PlaceholderPlanner {
    fn default() -> Self {
        Self {
            passive: SocketAddrV4::new(Ipv4Addr::LOCALHOST, 52397),
        }
    }
}

impl DataChannelPlanner for PlaceholderPlanner {
    fn passive_endpoint(&self) -> SocketAddrV4 {
        self.passive
    }

    fn record_active_target(&self, spec: &str) {
        debug!("Recorded active-mode target (no connection made): {}", spec);
    }
}
