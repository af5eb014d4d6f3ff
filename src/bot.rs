//! Bot module wiring the Telegram transport to the command pipeline.
//!
//! This module provides the main [`Bot`] implementation that connects the
//! Telegram update loop with the command router, the ipinfo.io client and
//! usage tracking.
//!
//! # Command Processing Flow
//!
//! ```text
//! Telegram Message → Commander::parse → Commander::execute → send reply → track usage
//! ```
//!
//! Each message is processed by exactly one spawned task, end to end. The
//! only state shared between tasks is the read-only command pattern table
//! and the collaborator handles, so concurrent messages never contend and
//! in-flight tasks are safe to abandon on shutdown.

use std::sync::Arc;

use teloxide::types::ChatId;

use crate::{
    commands::{CommandParseError, Commander},
    config::Config,
    ipinfo::IpInfoRequester,
    telegram::TelegramClient,
    tracking::{BotanTracker, track_usage},
};

/// Context for processing a single Telegram message.
///
/// Groups together the message data and the shared collaborator handles a
/// spawned handler task needs.
struct MessageContext {
    /// The message body text
    body: String,
    /// The chat the message was sent in
    chat_id: ChatId,
    /// Thread-safe reference to the Telegram client
    telegram_client: Arc<TelegramClient>,
    /// Thread-safe reference to the geolocation client
    requester: Arc<IpInfoRequester>,
    /// Thread-safe reference to the usage tracker
    tracker: Arc<BotanTracker>,
    /// Thread-safe reference to the command router
    commander: Arc<Commander>,
}

/// Main bot structure integrating Telegram messaging with ipinfo.io lookups.
///
/// The `Bot` owns the collaborators of the command pipeline:
///
/// - **Transport** - [`TelegramClient`] for receiving updates and sending
///   replies
/// - **Router** - [`Commander`] with the command pattern table, built once
///   at construction and read-only afterwards
/// - **Geolocation** - [`IpInfoRequester`] for the `/ip` and `/geo` lookups
/// - **Tracking** - [`BotanTracker`] for best-effort usage events
///
/// All collaborators are wrapped in `Arc` for sharing across the per-message
/// tasks; none of them holds mutable state, so no locking is involved.
pub struct Bot {
    /// Telegram client for receiving updates and sending replies
    telegram_client: Arc<TelegramClient>,
    /// Geolocation client for address lookups
    requester: Arc<IpInfoRequester>,
    /// Usage tracker, no-op without a configured token
    tracker: Arc<BotanTracker>,
    /// Command router with the read-only pattern table
    commander: Arc<Commander>,
}

impl Bot {
    /// Creates a new Bot instance from the loaded configuration.
    pub fn new(config: Config) -> Self {
        let telegram_client = Arc::new(TelegramClient::new(&config.telegram.token));
        let requester = Arc::new(IpInfoRequester::new(&config.ipinfo.url));
        let tracker = Arc::new(BotanTracker::new(
            &config.analytics.url,
            config.analytics.token,
        ));
        let commander = Arc::new(Commander::new());

        Bot {
            telegram_client,
            requester,
            tracker,
            commander,
        }
    }

    /// Starts the bot and processes messages until shutdown.
    ///
    /// Registers the command list with Telegram, then runs the update loop.
    /// Every incoming text message is handed to [`Self::handle_message`],
    /// which spawns a task for it; the update loop itself never blocks on a
    /// lookup.
    ///
    /// Returns when the update loop stops (SIGINT).
    pub async fn start(self) -> Result<(), anyhow::Error> {
        if let Err(e) = self.telegram_client.setup_commands().await {
            log::warn!("Failed to register command list with telegram: {:?}", e);
        }

        // Clone references for the message handler
        let telegram_client = Arc::clone(&self.telegram_client);
        let requester = Arc::clone(&self.requester);
        let tracker = Arc::clone(&self.tracker);
        let commander = Arc::clone(&self.commander);

        // Create message handler closure
        let on_message = move |body: String, chat_id: ChatId| {
            let ctx = MessageContext {
                body,
                chat_id,
                telegram_client: Arc::clone(&telegram_client),
                requester: Arc::clone(&requester),
                tracker: Arc::clone(&tracker),
                commander: Arc::clone(&commander),
            };
            Self::handle_message(ctx);
        };

        // Start telegram update loop
        self.telegram_client.sync(on_message).await
    }

    /// Handles an incoming Telegram message as a command.
    ///
    /// This method implements the complete command processing flow:
    /// 1. Match the message body against the command pattern table
    /// 2. Silently ignore it when no pattern matches
    /// 3. Execute the matching handler, which validates arguments and
    ///    performs the lookup
    /// 4. Send the handler's reply back to the chat
    /// 5. Record the usage event when the command is tracked and the reply
    ///    was delivered
    ///
    /// The method spawns a new async task to handle the message, allowing
    /// the update loop to continue processing other messages without
    /// blocking. Tracking is spawned separately again so a slow tracking
    /// service never delays anything user-visible.
    fn handle_message(ctx: MessageContext) {
        tokio::spawn(async move {
            // Match the body against the pattern table
            let command = match ctx.commander.parse(&ctx.body) {
                Ok(command) => command,
                // Not a bot command, nothing to do
                Err(CommandParseError::NotForBot) => return,
            };

            let outcome = ctx
                .commander
                .execute(&command, ctx.requester.as_ref())
                .await;

            let sent_chat = ctx
                .telegram_client
                .send_reply(ctx.chat_id, &outcome.reply)
                .await;

            // Tracking is keyed by the chat of the delivered reply; when the
            // send failed there is nothing to key on and it is skipped
            if let (Some(chat_id), Some(label)) = (sent_chat, outcome.track) {
                let tracker = Arc::clone(&ctx.tracker);
                tokio::spawn(async move {
                    track_usage(tracker.as_ref(), chat_id.0, label).await;
                });
            }
        });
    }
}
