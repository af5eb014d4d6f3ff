//! Ping command handler.
//!
//! Liveness check. Replies with a fixed pong message, plain text, no
//! tracking.

use log::info;

use crate::commands::{CommandOutcome, CommandReply};

/// Replies with a pong message.
pub fn handle_ping() -> CommandOutcome {
    info!("Got /ping command, sending pong reply");

    CommandOutcome {
        reply: CommandReply::plain("test pong!"),
        track: None,
    }
}
