//! Help command handler.
//!
//! Replies with the greeting and the list of available commands with usage
//! examples. Help requests are tracked under the `Help` label.

use log::debug;

use crate::commands::{CommandOutcome, CommandReply, markdown_response::format_usage};

/// Returns the greeting and command usage message.
pub fn handle_help() -> CommandOutcome {
    debug!("handling help command");

    CommandOutcome {
        reply: CommandReply::markdown(format_usage()),
        track: Some("Help"),
    }
}
