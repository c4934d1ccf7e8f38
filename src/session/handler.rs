//! Session loop for one control connection.
//!
//! Reads one command line at a time, dispatches it, and writes the
//! resulting replies. All transport errors stop at this boundary: they are
//! logged and close only this session, never the listener or its peers.

use log::{info, warn};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::protocol::{CommandStatus, handle_command, parse_command, responses};
use crate::server::SessionContext;
use crate::session::Session;

/// Runs a client session to completion.
///
/// The socket is owned by this task and dropped on every exit path, normal
/// or not. There is no inactivity timeout: a silent client holds its task
/// open until it disconnects.
pub async fn handle_session(stream: TcpStream, addr: SocketAddr, context: Arc<SessionContext>) {
    if let Err(e) = run_session(stream, addr, &context).await {
        warn!("Session error for {}: {}", addr, e);
    }
    info!("Client {} disconnected", addr);
}

async fn run_session(
    stream: TcpStream,
    addr: SocketAddr,
    context: &SessionContext,
) -> io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    // The greeting is always the first thing on the wire.
    write_half.write_all(responses::WELCOME.as_bytes()).await?;
    write_half.flush().await?;

    let mut session = Session::new();
    let mut line = String::new();

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            info!("Connection closed by client {}", addr);
            break;
        }

        // Enforce command length limit
        if line.len() > context.max_command_length {
            write_half
                .write_all(responses::COMMAND_TOO_LONG.as_bytes())
                .await?;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            // A blank line ends the session, same as a dropped peer.
            info!("Client {} sent an empty line, closing", addr);
            break;
        }

        let command = parse_command(trimmed);
        info!("Received from {}: {:?}", addr, command);

        let result = handle_command(&mut session, &command, context);
        for reply in &result.replies {
            write_half.write_all(reply.as_bytes()).await?;
        }
        write_half.flush().await?;

        if matches!(result.status, CommandStatus::CloseConnection) {
            info!("Closing connection to {}", addr);
            break;
        }
    }

    Ok(())
}
