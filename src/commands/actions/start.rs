//! Start command handler.
//!
//! Replies with a short description of the bot and the service backing it.
//! This is a stateless command that always returns the same message.

use log::debug;

use crate::commands::{CommandOutcome, CommandReply, markdown_response::format_about};

/// Returns the short description of the bot.
pub fn handle_start() -> CommandOutcome {
    debug!("handling start command");

    CommandOutcome {
        reply: CommandReply::markdown(format_about()),
        track: None,
    }
}
