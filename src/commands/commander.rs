//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main
//! entry point for processing bot commands. It owns the command pattern
//! table and routes parsed commands to their handlers.
//!
//! # Architecture
//!
//! The Commander follows a two-phase processing model:
//!
//! 1. **Routing Phase** - Matches raw message text against the ordered
//!    pattern table and produces a structured [`Command`]
//! 2. **Execution Phase** - Routes the command to its handler, which
//!    validates arguments, performs the lookup and formats the reply
//!
//! # Flow
//!
//! ```text
//! Telegram Message → parse() → Command → execute() → CommandOutcome
//! ```

use log::debug;

use crate::commands::{
    CommandOutcome, CommandParseError,
    actions::{handle_geo, handle_help, handle_ip, handle_ping, handle_start},
    command::{Command, CommandPattern, build_patterns},
};
use crate::ipinfo::Requester;

/// Command router for parsing and executing bot commands.
///
/// The Commander is responsible for:
/// - Matching raw message text against the command pattern table
/// - Routing commands to appropriate handlers
///
/// # Pattern Table
///
/// The pattern table is built once at construction and never mutated
/// afterwards, so a single `Commander` can be shared across concurrent
/// message tasks without locking. Patterns are evaluated in registration
/// order (`/start`, `/help`, `/ping`, `/ip`, `/geo`) and the first match
/// wins.
pub struct Commander {
    /// Ordered command pattern table
    patterns: Vec<CommandPattern>,
}

impl Commander {
    /// Creates a new Commander with the command pattern table built in
    /// precedence order.
    pub fn new() -> Self {
        Commander {
            patterns: build_patterns(),
        }
    }

    /// Parses a Telegram message body into a structured command.
    ///
    /// Walks the pattern table in order and returns the first match. The
    /// argument of `/ip` and `/geo` is extracted raw; it may be absent,
    /// which is not an error at this stage.
    ///
    /// # Arguments
    ///
    /// * `body` - The raw message text from Telegram
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - The first matching command
    /// * `Err(CommandParseError::NotForBot)` - No pattern matched; the
    ///   message is regular chat and must be silently ignored
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        for pattern in &self.patterns {
            if let Some(command) = pattern.matches(body) {
                debug!("parsed command: {:?}", command);
                return Ok(command);
            }
        }

        Err(CommandParseError::NotForBot)
    }

    /// Executes a parsed command and returns the outcome.
    ///
    /// Exactly one handler is invoked per command. Handlers never fail: a
    /// missing or invalid argument and a failed lookup each map to a
    /// user-facing reply inside the handler.
    ///
    /// # Arguments
    ///
    /// * `command` - The parsed command to execute
    /// * `requester` - Geolocation client used by the `/ip` and `/geo`
    ///   handlers
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Start`] → [`handle_start`]
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Ping`] → [`handle_ping`]
    /// - [`Command::Ip`] → [`handle_ip`]
    /// - [`Command::Geo`] → [`handle_geo`]
    pub async fn execute<R: Requester>(
        &self,
        command: &Command,
        requester: &R,
    ) -> CommandOutcome {
        match command {
            Command::Start => handle_start(),
            Command::Help => handle_help(),
            Command::Ping => handle_ping(),
            Command::Ip(argument) => handle_ip(requester, argument.as_deref()).await,
            Command::Geo(argument) => handle_geo(requester, argument.as_deref()).await,
        }
    }
}
