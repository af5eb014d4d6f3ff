//! Best-effort usage tracking.
//!
//! Tracked commands record a usage event keyed by the chat the reply was
//! delivered to. Tracking is fire-and-forget: failures are logged at debug
//! level and never surface to the user, and without a configured token
//! every call is silently skipped.

use log::debug;
use mockall::automock;
use reqwest::{Client, Error};

/// Trait for recording usage events.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Tracker {
    /// Records one usage event for a conversation.
    async fn track(&self, chat_id: i64, label: &str) -> Result<(), Error>;
}

/// Botan-compatible tracking client.
///
/// Sends events as `POST <base>/track?token=..&uid=..&name=..` with the
/// originating chat in the body. When constructed without a token, every
/// [`Tracker::track`] call is a no-op.
pub struct BotanTracker {
    /// Base URL of the tracking service, without trailing slash
    url: String,
    /// Tracking service token; tracking is disabled when absent
    token: Option<String>,
    /// HTTP client
    client: Client,
}

impl BotanTracker {
    /// Creates a new [`BotanTracker`].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the tracking service.
    /// * `token` - The service token; pass `None` to disable tracking.
    pub fn new(url: &str, token: Option<String>) -> Self {
        let client = reqwest::Client::new();
        BotanTracker {
            url: url.to_string(),
            token,
            client,
        }
    }
}

impl Tracker for BotanTracker {
    async fn track(&self, chat_id: i64, label: &str) -> Result<(), Error> {
        let token = match &self.token {
            Some(token) => token,
            None => {
                debug!("no analytics token configured, skipping tracking");
                return Ok(());
            }
        };

        let url = format!("{}/track", &self.url);
        let uid = chat_id.to_string();
        debug!("tracking event \"{}\" for chat {}", label, chat_id);

        self.client
            .post(&url)
            .query(&[
                ("token", token.as_str()),
                ("uid", uid.as_str()),
                ("name", label),
            ])
            .json(&serde_json::json!({ "from": { "id": chat_id } }))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Records a usage event, swallowing failures.
///
/// This is the fire-and-forget entry point the bot spawns after a tracked
/// reply was delivered: a tracking error is logged at debug level and
/// otherwise ignored.
pub async fn track_usage<T: Tracker>(tracker: &T, chat_id: i64, label: &str) {
    if let Err(e) = tracker.track(chat_id, label).await {
        debug!("failed to track \"{}\": {:?}", label, e);
    }
}
