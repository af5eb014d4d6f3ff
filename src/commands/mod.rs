//! Bot command parsing, validation and reply formatting.
//!
//! This module provides the complete command processing pipeline for
//! ipinfobot, from raw Telegram message text to an outbound reply.
//!
//! # Overview
//!
//! The commands module handles the entire lifecycle of bot commands:
//! 1. **Routing** - Matching message text against the ordered command
//!    pattern table ([`commander`])
//! 2. **Validation** - Strict IP address literal parsing ([`validator`])
//! 3. **Execution** - Routing commands to specialized handlers ([`actions`])
//! 4. **Response** - Formatting geolocation records as Markdown or location
//!    payloads ([`markdown_response`])
//!
//! # Architecture
//!
//! ```text
//! Telegram Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + execute()
//! └─────────────┘
//!      │
//!      ├── parse() ── ordered pattern table, first match wins
//!      │                               ▼
//!      │                   ┌──────────────────┐
//!      │                   │ command::Command │
//!      │                   └──────────────────┘
//!      └── execute() ─────────────────┐
//!                                     ▼
//!                          ┌─────────────────────┐
//!                          │ Action Handlers     │
//!                          │  - handle_start     │
//!                          │  - handle_help      │
//!                          │  - handle_ping      │
//!                          │  - handle_ip        │
//!                          │  - handle_geo       │
//!                          └─────────────────────┘
//!                                     │
//!                                     ▼
//!                          ┌────────────────────┐
//!                          │  CommandOutcome    │
//!                          │  - reply           │
//!                          │  - tracking label  │
//!                          └────────────────────┘
//! ```
//!
//! # Command Structure
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `/start` | None | Display a short description of the bot |
//! | `/help` | None | Display the list of commands with examples |
//! | `/ping` | None | Liveness check |
//! | `/ip` | `{ip}` | Full geolocation record for an IP address |
//! | `/geo` | `{ip}` | Location on a map for an IP address |
//!
//! The `/ip` and `/geo` arguments are validated as strict IPv4/IPv6 literals
//! before any network call is made; a missing or invalid argument produces a
//! usage reply and never reaches the geolocation service.
//!
//! # Error Handling
//!
//! Messages that match no pattern return [`CommandParseError::NotForBot`]
//! and are silently ignored, so the bot never responds to regular chat.

mod actions;
mod command;
mod commander;
mod markdown_response;
mod validator;

pub use crate::commands::commander::Commander;

/// Rendering mode for an outbound text reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Send the body as-is.
    Plain,
    /// Send the body with Telegram Markdown formatting.
    Markdown,
}

/// An outbound message produced by a command handler.
///
/// Either a text reply with a rendering hint, or a location payload for the
/// transport's map message. Latitude and longitude are kept as strings: they
/// are passed through from the geolocation record without numeric validation.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandReply {
    /// Text reply with a rendering hint
    Text {
        /// Message body
        body: String,
        /// Rendering mode for the body
        format: TextFormat,
    },
    /// Location reply rendered as a map by the messaging platform
    Location {
        /// Latitude substring of the record's `loc` field
        latitude: String,
        /// Longitude substring of the record's `loc` field
        longitude: String,
    },
}

impl CommandReply {
    /// Builds a plain text reply.
    pub fn plain(body: impl Into<String>) -> Self {
        CommandReply::Text {
            body: body.into(),
            format: TextFormat::Plain,
        }
    }

    /// Builds a Markdown-formatted text reply.
    pub fn markdown(body: impl Into<String>) -> Self {
        CommandReply::Text {
            body: body.into(),
            format: TextFormat::Markdown,
        }
    }
}

/// Result of command execution.
///
/// Handlers don't perform side effects themselves. They return the reply to
/// send and, for tracked commands, the usage label to record once the reply
/// has actually been delivered. The caller is responsible for both.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The reply to send back to the chat
    pub reply: CommandReply,
    /// Usage tracking label, present only on tracked success paths
    pub track: Option<&'static str>,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    /// Message matches no command pattern (silent error)
    NotForBot,
}
