//! Telegram transport integration.
//!
//! This module wraps the Telegram Bot API client behind the narrow
//! interface the rest of the bot uses: an update loop delivering message
//! text with its chat, and two send operations (text and location).
//!
//! # Modules
//!
//! - `client` - High-level wrapper around the Bot API client

mod client;

pub use crate::telegram::client::TelegramClient;
