use log::{error, info};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::ServerIdentity;
use crate::session::handle_session;
use crate::storage::{DirectoryLister, PlaceholderLister};
use crate::transfer::{DataChannelPlanner, PlaceholderPlanner};

/// Shared, read-only context handed to every session task.
///
/// Bundles the server identity with the collaborator handles the command
/// handlers consume. There is no mutable state here, so sessions share it
/// through an `Arc` without synchronization.
pub struct SessionContext {
    pub identity: ServerIdentity,
    pub lister: Box<dyn DirectoryLister>,
    pub data_channels: Box<dyn DataChannelPlanner>,
    pub max_command_length: usize,
}

pub struct Server {
    listener: TcpListener,
    context: Arc<SessionContext>,
}

impl Server {
    /// Bind the control socket. A bind failure is a fatal startup error and
    /// is returned to the caller; the server never starts serving after one.
    pub async fn new(config: &ServerConfig) -> io::Result<Self> {
        let socket = config.control_socket();
        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(e);
            }
        };

        let context = Arc::new(SessionContext {
            identity: config.identity(),
            lister: Box::new(PlaceholderLister),
            data_channels: Box::new(PlaceholderPlanner::default()),
            max_command_length: config.max_command_length,
        });

        Ok(Self { listener, context })
    }

    /// Local address of the bound control socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the accept loop until a shutdown signal arrives.
    ///
    /// Accepting is sequential, but every accepted connection runs as an
    /// independent task; no session blocks another or the next accept.
    /// On ctrl-c the listening socket is dropped and in-flight sessions are
    /// left to finish on their own (they are never joined or cancelled).
    pub async fn start(&self) {
        info!("Serving FTP control connections");

        loop {
            tokio::select! {
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, addr)) => {
                            info!("Accepted connection from {}", addr);
                            let context = Arc::clone(&self.context);

                            // Spawn a task per client so the accept loop never blocks
                            tokio::spawn(async move {
                                handle_session(stream, addr, context).await;
                            });
                        }
                        Err(e) => {
                            error!("Error accepting connection: {}", e);
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received, closing listener");
                    break;
                }
            }
        }
    }
}
