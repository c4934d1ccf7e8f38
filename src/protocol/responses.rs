//! Control-connection response lines
//!
//! Every reply the server can send, as complete `\r\n`-terminated wire
//! lines. Nothing beyond these strings ever crosses the wire.

use std::net::SocketAddrV4;

pub const WELCOME: &str = "220 Welcome to the FTP server\r\n";
pub const PASSWORD_REQUIRED: &str = "331 User name okay, need password.\r\n";
pub const INVALID_USERNAME: &str = "530 Invalid username.\r\n";
pub const LOGIN_SUCCESS: &str = "230 User logged in, proceed.\r\n";
pub const AUTH_FAILED: &str = "530 Authentication failed.\r\n";
pub const NOT_LOGGED_IN: &str = "530 Please login with USER and PASS.\r\n";
pub const LIST_START: &str = "150 Here comes the directory listing.\r\n";
pub const LIST_DONE: &str = "226 Directory send OK.\r\n";
pub const BINARY_MODE: &str = "200 Switching to Binary mode.\r\n";
pub const ASCII_MODE: &str = "200 Switching to ASCII mode.\r\n";
pub const TYPE_NOT_IMPLEMENTED: &str = "504 Command not implemented for that parameter.\r\n";
pub const PORT_OK: &str = "200 PORT command successful.\r\n";
pub const UNRECOGNIZED: &str = "500 Syntax error, command unrecognized.\r\n";
pub const SYNTAX_ERROR: &str = "501 Syntax error in parameters or arguments.\r\n";
pub const COMMAND_TOO_LONG: &str = "500 Command too long\r\n";

/// Format the PWD reply around the configured root label.
pub fn pwd_reply(root_label: &str) -> String {
    format!("257 \"{}\" is the current directory.\r\n", root_label)
}

/// Format the PASV reply for the given passive endpoint.
pub fn pasv_reply(endpoint: SocketAddrV4) -> String {
    format!("227 Entering Passive Mode ({}).\r\n", pasv_tuple(endpoint))
}

/// Render an address as the 6-number PASV tuple `h1,h2,h3,h4,p1,p2`,
/// where the port is split into high and low octets.
fn pasv_tuple(endpoint: SocketAddrV4) -> String {
    let [h1, h2, h3, h4] = endpoint.ip().octets();
    let port = endpoint.port();
    format!("{},{},{},{},{},{}", h1, h2, h3, h4, port / 256, port % 256)
}
