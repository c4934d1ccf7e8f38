//! Module `commands`
//!
//! Defines the control-command parsing logic and the data structures used
//! to represent commands and the results of dispatching them.

/// Represents a control command parsed from one line of client input.
///
/// Keywords are matched case-sensitively; arguments are space-delimited.
/// Commands that require arguments store them as `String` variants.
#[derive(Debug, PartialEq)]
pub enum Command {
    USER(String),          // Username for login
    PASS(String),          // Password for login
    PWD,                   // Report the current directory label
    LIST,                  // Directory listing
    TYPE(String),          // Transfer mode selection (I or A)
    PASV,                  // Enter passive mode
    PORT(String),          // Active mode data target specification
    INVALID(&'static str), // Known keyword missing its required argument
    UNKNOWN,               // Unknown or unsupported command
}

/// Represents the outcome status of executing a command.
#[derive(Debug)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
///
/// `replies` holds complete wire lines, written to the client as successive
/// writes in order. Multi-line responses (LIST) rely on that ordering.
pub struct CommandResult {
    pub status: CommandStatus,
    pub replies: Vec<String>,
}

/// Parses a raw command line received from a client into the `Command` enum.
///
/// A recognized keyword whose required argument is absent parses to
/// `INVALID` rather than `UNKNOWN`, so the dispatcher can answer with a
/// syntax error instead of treating it as an unknown verb. The handler must
/// never index past the argument list, so the guard lives here.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("").trim();

    match cmd {
        "USER" if !arg.is_empty() => Command::USER(arg.to_string()),
        "USER" => Command::INVALID("USER"),
        "PASS" if !arg.is_empty() => Command::PASS(arg.to_string()),
        "PASS" => Command::INVALID("PASS"),
        "PWD" => Command::PWD,
        "LIST" => Command::LIST,
        "TYPE" if !arg.is_empty() => Command::TYPE(arg.to_string()),
        "TYPE" => Command::INVALID("TYPE"),
        "PASV" => Command::PASV,
        "PORT" if !arg.is_empty() => Command::PORT(arg.to_string()),
        "PORT" => Command::INVALID("PORT"),
        _ => Command::UNKNOWN,
    }
}
