//! Command definitions and the pattern table.
//!
//! This module defines the [`Command`] enum and the ordered pattern table
//! the router walks to recognize commands in Telegram message text.

use regex::Regex;

/// Represents a parsed bot command.
///
/// Commands are recognized from Telegram message text. The `/ip` and `/geo`
/// commands carry their raw argument when one was supplied; argument
/// validation happens later, in the handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Display a short description of the bot
    Start,
    /// Display the list of commands with usage examples
    Help,
    /// Liveness check
    Ping,
    /// Get the full geolocation record for an IP address
    ///
    /// # Fields
    ///
    /// * `Option<String>` - Raw, not yet validated command argument
    Ip(Option<String>),
    /// Get the location on a map for an IP address
    ///
    /// # Fields
    ///
    /// * `Option<String>` - Raw, not yet validated command argument
    Geo(Option<String>),
}

/// Which command a pattern recognizes.
#[derive(Debug, Clone, Copy)]
enum CommandKind {
    Start,
    Help,
    Ping,
    Ip,
    Geo,
}

/// A single entry of the router's pattern table.
///
/// Pairs a compiled regular expression with the command it recognizes. The
/// expression is anchored at the start of the message; for `/ip` and `/geo`
/// an optional capture group holds the remainder of the line after the
/// command token.
pub(crate) struct CommandPattern {
    regex: Regex,
    kind: CommandKind,
}

impl CommandPattern {
    /// Matches the pattern against a message body.
    ///
    /// Returns `Some(Command)` when the pattern matches, with the optional
    /// argument extracted for commands that take one. An absent argument
    /// group yields a command with a missing argument rather than an error;
    /// rejecting it is the validator's job.
    pub(crate) fn matches(&self, body: &str) -> Option<Command> {
        let captures = self.regex.captures(body)?;
        let argument = captures.get(1).map(|group| group.as_str().to_owned());

        Some(match self.kind {
            CommandKind::Start => Command::Start,
            CommandKind::Help => Command::Help,
            CommandKind::Ping => Command::Ping,
            CommandKind::Ip => Command::Ip(argument),
            CommandKind::Geo => Command::Geo(argument),
        })
    }
}

/// Builds the command pattern table.
///
/// The order of the entries is the router's precedence order: patterns are
/// evaluated in this order and the first match wins.
pub(crate) fn build_patterns() -> Vec<CommandPattern> {
    [
        (r"^/start", CommandKind::Start),
        (r"^/help", CommandKind::Help),
        (r"^/ping", CommandKind::Ping),
        (r"^/ip(?:\s+(.+))?", CommandKind::Ip),
        (r"^/geo(?:\s+(.+))?", CommandKind::Geo),
    ]
    .into_iter()
    .map(|(pattern, kind)| CommandPattern {
        regex: Regex::new(pattern).expect("Failed to compile command regex"),
        kind,
    })
    .collect()
}
