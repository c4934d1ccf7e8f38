//! Command handlers for the control connection.
//!
//! Dispatches parsed commands against the session state machine: the
//! login gate first, then the authenticated command set. Handlers only
//! build replies; all socket I/O stays in the session loop.

use log::info;

use crate::auth;
use crate::protocol::responses;
use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::server::SessionContext;
use crate::session::{Session, TransferMode};

/// Dispatches a received command to its corresponding handler.
///
/// Before a completed login only USER and PASS are live; everything else is
/// answered with the not-logged-in reply. Once authenticated, USER and PASS
/// are no longer part of the command set and fall through to the
/// unrecognized reply like any other unexpected verb, so a session can
/// never re-authenticate.
pub fn handle_command(
    session: &mut Session,
    command: &Command,
    context: &SessionContext,
) -> CommandResult {
    if !session.is_authenticated() {
        return handle_login_command(session, command, context);
    }

    match command {
        Command::PWD => handle_cmd_pwd(context),
        Command::LIST => handle_cmd_list(context),
        Command::TYPE(code) => handle_cmd_type(session, code),
        Command::PASV => handle_cmd_pasv(context),
        Command::PORT(spec) => handle_cmd_port(context, spec),
        Command::INVALID(keyword) => syntax_error(keyword),
        _ => CommandResult {
            status: CommandStatus::Failure("Unrecognized command".into()),
            replies: vec![responses::UNRECOGNIZED.to_string()],
        },
    }
}

/// Pre-login dispatch: only USER and PASS make progress here.
fn handle_login_command(
    session: &mut Session,
    command: &Command,
    context: &SessionContext,
) -> CommandResult {
    match command {
        Command::USER(username) => handle_cmd_user(session, username, context),
        Command::PASS(password) => handle_cmd_pass(session, password, context),
        Command::INVALID(keyword) => syntax_error(keyword),
        _ => CommandResult {
            status: CommandStatus::Failure("Authentication required".into()),
            replies: vec![responses::NOT_LOGGED_IN.to_string()],
        },
    }
}

/// Handles the USER command: checks the name against the configured
/// account. A mismatch is answered with 530 and closes the connection;
/// no retry is permitted.
fn handle_cmd_user(session: &mut Session, username: &str, context: &SessionContext) -> CommandResult {
    match auth::validate_user(username, &context.identity) {
        Ok(()) => {
            session.set_pending_username(username.to_string());
            CommandResult {
                status: CommandStatus::Success,
                replies: vec![responses::PASSWORD_REQUIRED.to_string()],
            }
        }
        Err(e) => {
            info!("Rejected login: {}", e);
            CommandResult {
                status: CommandStatus::CloseConnection,
                replies: vec![responses::INVALID_USERNAME.to_string()],
            }
        }
    }
}

/// Handles the PASS command: completes the login started by USER.
///
/// The single configured password is the whole check; the pending username
/// is not cross-checked beyond USER's own validation (single fixed
/// account). A wrong password closes the connection after the 530.
fn handle_cmd_pass(session: &mut Session, password: &str, context: &SessionContext) -> CommandResult {
    if session.pending_username().is_none() {
        return CommandResult {
            status: CommandStatus::Failure("Username not provided".into()),
            replies: vec![responses::NOT_LOGGED_IN.to_string()],
        };
    }

    match auth::validate_password(password, &context.identity) {
        Ok(()) => {
            session.set_authenticated();
            CommandResult {
                status: CommandStatus::Success,
                replies: vec![responses::LOGIN_SUCCESS.to_string()],
            }
        }
        Err(e) => {
            info!("Rejected login: {}", e);
            CommandResult {
                status: CommandStatus::CloseConnection,
                replies: vec![responses::AUTH_FAILED.to_string()],
            }
        }
    }
}

/// Handles the PWD command: reports the configured root label.
fn handle_cmd_pwd(context: &SessionContext) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        replies: vec![responses::pwd_reply(&context.identity.root_label)],
    }
}

/// Handles the LIST command: renders the lister's entries between the
/// 150 and 226 markers. Each reply line is written separately, in order.
fn handle_cmd_list(context: &SessionContext) -> CommandResult {
    let mut replies = vec![responses::LIST_START.to_string()];
    for entry in context.lister.entries(&context.identity.root_label) {
        replies.push(format!("{}\r\n", entry));
    }
    replies.push(responses::LIST_DONE.to_string());

    CommandResult {
        status: CommandStatus::Success,
        replies,
    }
}

/// Handles the TYPE command: acknowledges binary (I) or ASCII (A) mode.
/// The argument is matched case-insensitively; anything else is 504.
fn handle_cmd_type(session: &mut Session, code: &str) -> CommandResult {
    match code.to_ascii_uppercase().as_str() {
        "I" => {
            session.set_transfer_mode(TransferMode::Binary);
            CommandResult {
                status: CommandStatus::Success,
                replies: vec![responses::BINARY_MODE.to_string()],
            }
        }
        "A" => {
            session.set_transfer_mode(TransferMode::Ascii);
            CommandResult {
                status: CommandStatus::Success,
                replies: vec![responses::ASCII_MODE.to_string()],
            }
        }
        other => CommandResult {
            status: CommandStatus::Failure(format!("Unsupported type code: {}", other)),
            replies: vec![responses::TYPE_NOT_IMPLEMENTED.to_string()],
        },
    }
}

/// Handles the PASV command: acknowledges passive mode with the planner's
/// endpoint. No data listener is opened by this server.
fn handle_cmd_pasv(context: &SessionContext) -> CommandResult {
    let endpoint = context.data_channels.passive_endpoint();
    CommandResult {
        status: CommandStatus::Success,
        replies: vec![responses::pasv_reply(endpoint)],
    }
}

/// Handles the PORT command: hands the client's address spec to the
/// planner and acknowledges. No data connection is made.
fn handle_cmd_port(context: &SessionContext, spec: &str) -> CommandResult {
    context.data_channels.record_active_target(spec);
    CommandResult {
        status: CommandStatus::Success,
        replies: vec![responses::PORT_OK.to_string()],
    }
}

fn syntax_error(keyword: &str) -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure(format!("{} requires an argument", keyword)),
        replies: vec![responses::SYNTAX_ERROR.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_command;
    use crate::server::{ServerIdentity, SessionContext};
    use crate::storage::PlaceholderLister;
    use crate::transfer::PlaceholderPlanner;

    fn test_context() -> SessionContext {
        SessionContext {
            identity: ServerIdentity {
                root_label: "/srv/ftp".to_string(),
                username: "alice".to_string(),
                password: "secret".to_string(),
            },
            lister: Box::new(PlaceholderLister),
            data_channels: Box::new(PlaceholderPlanner::default()),
            max_command_length: 512,
        }
    }

    fn dispatch(session: &mut Session, line: &str, context: &SessionContext) -> CommandResult {
        handle_command(session, &parse_command(line), context)
    }

    fn login(session: &mut Session, context: &SessionContext) {
        dispatch(session, "USER alice", context);
        dispatch(session, "PASS secret", context);
        assert!(session.is_authenticated());
    }

    #[test]
    fn commands_before_login_are_rejected() {
        let context = test_context();
        let mut session = Session::new();

        for line in ["PWD", "LIST", "TYPE I", "PASV", "PORT 127,0,0,1,8,10"] {
            let result = dispatch(&mut session, line, &context);
            assert_eq!(result.replies, vec![responses::NOT_LOGGED_IN.to_string()]);
            assert!(!matches!(result.status, CommandStatus::CloseConnection));
        }
    }

    #[test]
    fn correct_credentials_authenticate() {
        let context = test_context();
        let mut session = Session::new();

        let result = dispatch(&mut session, "USER alice", &context);
        assert_eq!(
            result.replies,
            vec![responses::PASSWORD_REQUIRED.to_string()]
        );
        assert!(!session.is_authenticated());

        let result = dispatch(&mut session, "PASS secret", &context);
        assert_eq!(result.replies, vec![responses::LOGIN_SUCCESS.to_string()]);
        assert!(session.is_authenticated());
    }

    #[test]
    fn wrong_username_closes_the_connection() {
        let context = test_context();
        let mut session = Session::new();

        let result = dispatch(&mut session, "USER bob", &context);
        assert_eq!(result.replies, vec![responses::INVALID_USERNAME.to_string()]);
        assert!(matches!(result.status, CommandStatus::CloseConnection));
    }

    #[test]
    fn wrong_password_closes_the_connection() {
        let context = test_context();
        let mut session = Session::new();

        dispatch(&mut session, "USER alice", &context);
        let result = dispatch(&mut session, "PASS wrong", &context);
        assert_eq!(result.replies, vec![responses::AUTH_FAILED.to_string()]);
        assert!(matches!(result.status, CommandStatus::CloseConnection));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn pass_without_user_does_not_authenticate() {
        let context = test_context();
        let mut session = Session::new();

        let result = dispatch(&mut session, "PASS secret", &context);
        assert_eq!(result.replies, vec![responses::NOT_LOGGED_IN.to_string()]);
        assert!(!session.is_authenticated());
        assert!(!matches!(result.status, CommandStatus::CloseConnection));
    }

    #[test]
    fn user_and_pass_after_login_are_unrecognized() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        for line in ["USER alice", "PASS secret"] {
            let result = dispatch(&mut session, line, &context);
            assert_eq!(result.replies, vec![responses::UNRECOGNIZED.to_string()]);
        }
        // Authentication is monotonic: still logged in after the rebuffs.
        assert!(session.is_authenticated());
    }

    #[test]
    fn pwd_reports_the_root_label() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        let result = dispatch(&mut session, "PWD", &context);
        assert_eq!(
            result.replies,
            vec!["257 \"/srv/ftp\" is the current directory.\r\n".to_string()]
        );
    }

    #[test]
    fn list_brackets_entries_between_150_and_226() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        let result = dispatch(&mut session, "LIST", &context);
        assert_eq!(result.replies.first().unwrap(), responses::LIST_START);
        assert_eq!(result.replies.last().unwrap(), responses::LIST_DONE);
        assert!(result.replies.len() > 2);
        assert!(result.replies[1].ends_with("\r\n"));
    }

    #[test]
    fn type_accepts_i_and_a_case_insensitively() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        let result = dispatch(&mut session, "TYPE I", &context);
        assert_eq!(result.replies, vec![responses::BINARY_MODE.to_string()]);
        assert_eq!(session.transfer_mode(), Some(TransferMode::Binary));

        let result = dispatch(&mut session, "TYPE a", &context);
        assert_eq!(result.replies, vec![responses::ASCII_MODE.to_string()]);
        assert_eq!(session.transfer_mode(), Some(TransferMode::Ascii));

        let result = dispatch(&mut session, "TYPE X", &context);
        assert_eq!(
            result.replies,
            vec![responses::TYPE_NOT_IMPLEMENTED.to_string()]
        );
    }

    #[test]
    fn pasv_always_returns_the_six_number_tuple() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        // Stable regardless of prior PORT/PASV traffic.
        dispatch(&mut session, "PORT 127,0,0,1,8,10", &context);
        for _ in 0..2 {
            let result = dispatch(&mut session, "PASV", &context);
            assert_eq!(
                result.replies,
                vec!["227 Entering Passive Mode (127,0,0,1,204,173).\r\n".to_string()]
            );
        }
    }

    #[test]
    fn port_is_acknowledged() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        let result = dispatch(&mut session, "PORT 127,0,0,1,8,10", &context);
        assert_eq!(result.replies, vec![responses::PORT_OK.to_string()]);
    }

    #[test]
    fn unknown_command_after_login_is_500() {
        let context = test_context();
        let mut session = Session::new();
        login(&mut session, &context);

        let result = dispatch(&mut session, "NOOP", &context);
        assert_eq!(result.replies, vec![responses::UNRECOGNIZED.to_string()]);
    }

    #[test]
    fn missing_argument_is_a_syntax_error_in_any_state() {
        let context = test_context();
        let mut session = Session::new();

        let result = dispatch(&mut session, "USER", &context);
        assert_eq!(result.replies, vec![responses::SYNTAX_ERROR.to_string()]);
        assert!(!matches!(result.status, CommandStatus::CloseConnection));

        login(&mut session, &context);
        let result = dispatch(&mut session, "TYPE", &context);
        assert_eq!(result.replies, vec![responses::SYNTAX_ERROR.to_string()]);
    }
}
