//! Telegram client wrapper for bot messaging and the update loop.
//!
//! This module provides a high-level [`TelegramClient`] interface that wraps
//! the Bot API client and handles reply sending and update dispatching. The
//! rest of the bot never talks to the Bot API directly.

use log::{error, info};
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};

use crate::commands::{CommandReply, TextFormat};

/// High-level Telegram client for bot messaging operations.
///
/// Provides the update loop and the send operations the command pipeline
/// needs, converting [`CommandReply`] values into the matching Bot API
/// calls.
pub struct TelegramClient {
    /// Underlying Bot API client
    bot: Bot,
}

impl TelegramClient {
    /// Creates a new Telegram client from a Bot API token.
    pub fn new(token: &str) -> Self {
        TelegramClient {
            bot: Bot::new(token),
        }
    }

    /// Registers the command list with Telegram so clients can offer
    /// command completion.
    ///
    /// # Errors
    ///
    /// Returns the Bot API error when the registration request fails.
    pub async fn setup_commands(&self) -> Result<(), teloxide::RequestError> {
        self.bot
            .set_my_commands(vec![
                BotCommand::new("start", "what this bot is about"),
                BotCommand::new("help", "how to use the bot"),
                BotCommand::new("ping", "check that the bot is alive"),
                BotCommand::new("ip", "get information about an IP address"),
                BotCommand::new("geo", "get location on a map for an IP address"),
            ])
            .await?;

        Ok(())
    }

    /// Starts the Telegram update loop.
    ///
    /// This method dispatches incoming updates and invokes the provided
    /// callback for each text message with its body and chat. The loop runs
    /// until the process receives SIGINT; the built-in ctrl-c handler then
    /// stops dispatching so in-flight handlers can be abandoned safely.
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each text message with
    ///   parameters:
    ///   - `body`: The message text content
    ///   - `chat_id`: The chat the message was sent in
    pub async fn sync<F>(&self, on_message: F) -> Result<(), anyhow::Error>
    where
        F: Fn(String, ChatId) + Send + Sync + Clone + 'static,
    {
        let handler = Update::filter_message().endpoint(move |message: Message| {
            let on_message = on_message.clone();
            async move {
                if let Some(text) = message.text() {
                    on_message(text.to_owned(), message.chat.id);
                }
                respond(())
            }
        });

        info!("starting telegram update loop");

        Dispatcher::builder(self.bot.clone(), handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("telegram update loop ended");

        Ok(())
    }

    /// Sends a command reply to a chat.
    ///
    /// Text replies are sent with or without Markdown according to their
    /// format hint; location replies are sent as map locations. Send
    /// failures are logged, never propagated.
    ///
    /// # Returns
    ///
    /// The chat id taken from the sent message, or `None` when the reply
    /// could not be delivered. Callers use it as the conversation
    /// identifier for usage tracking.
    pub async fn send_reply(&self, chat_id: ChatId, reply: &CommandReply) -> Option<ChatId> {
        let sent = match reply {
            CommandReply::Text { body, format } => {
                let request = self.bot.send_message(chat_id, body.as_str());
                let request = match format {
                    TextFormat::Markdown => request.parse_mode(ParseMode::Markdown),
                    TextFormat::Plain => request,
                };
                request.await
            }
            CommandReply::Location {
                latitude,
                longitude,
            } => {
                // The Bot API takes numeric coordinates; the record's
                // substrings are parsed here, at the transport boundary
                let coordinates = latitude
                    .parse::<f64>()
                    .ok()
                    .zip(longitude.parse::<f64>().ok());
                match coordinates {
                    Some((latitude, longitude)) => {
                        self.bot.send_location(chat_id, latitude, longitude).await
                    }
                    None => {
                        error!(
                            "location reply has non-numeric coordinates \"{},{}\", dropping",
                            latitude, longitude
                        );
                        return None;
                    }
                }
            }
        };

        match sent {
            Ok(message) => Some(message.chat.id),
            Err(e) => {
                error!("Failed to send reply: {:?}", e);
                None
            }
        }
    }
}
