//! ipinfobot - A Telegram bot for IP geolocation lookups.
//!
//! This is the main entry point for ipinfobot, which answers Telegram commands
//! with geolocation information about IPv4/IPv6 addresses, backed by the
//! [ipinfo.io](https://ipinfo.io/) service.
//!
//! # Overview
//!
//! Users send commands to the bot in a private chat or a group. The bot
//! validates the supplied IP address, queries ipinfo.io and replies either
//! with a formatted text record or with a location on a map.
//!
//! # Bot Commands
//!
//! - `/start` - Display a short description of the bot
//! - `/help` - Display the list of commands with usage examples
//! - `/ping` - Liveness check, replies with a pong message
//! - `/ip {ip}` - Get the full geolocation record for an IP address
//! - `/geo {ip}` - Get the location on a map for an IP address
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! telegram:
//!   token: "123456:your-bot-api-token"
//!
//! ipinfo:
//!   url: "https://ipinfo.io"
//!
//! analytics:
//!   token: "your-analytics-token"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the
//! `IPINFOBOT_` prefix:
//!
//! ```bash
//! export IPINFOBOT_TELEGRAM__TOKEN="123456:your-bot-api-token"
//! export IPINFOBOT_ANALYTICS__TOKEN="your-analytics-token"
//! ipinfobot --config config.yaml
//! ```
//!
//! # Architecture
//!
//! The bot consists of several modules:
//!
//! - [`bot`] - Main bot logic coordinating the transport, router and tracking
//! - [`commands`] - Command pattern table, argument validation and handlers
//! - [`config`] - YAML configuration loading with environment variable support
//! - [`ipinfo`] - ipinfo.io API client
//! - [`telegram`] - Telegram transport wrapper around the Bot API client
//! - [`tracking`] - Best-effort usage tracking
//!
//! # Runtime Behavior
//!
//! Each incoming message is handled by exactly one spawned task, end to end.
//! There is no shared mutable state between messages; the command pattern
//! table is built once at startup and is read-only afterwards. The update
//! loop stops on SIGINT and in-flight handlers are safe to abandon.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)
//!   - Set to `debug` for verbose output including request URLs
//!   - Set to `warn` or `error` for minimal logging

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod ipinfo;
mod telegram;
mod tracking;

/// Command-line arguments for ipinfobot.
///
/// The bot takes a single argument: the path to the YAML configuration file
/// containing the Telegram token and service settings. See the [`config`]
/// module for the expected format.
///
/// # Examples
///
/// ```bash
/// ipinfobot --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `IPINFOBOT_`-prefixed environment
    /// variables, e.g. `IPINFOBOT_TELEGRAM__TOKEN`.
    #[arg(short, long)]
    config: String,
}

/// Main entry point for ipinfobot.
///
/// Initializes logging (`info` by default, overridable with `RUST_LOG`),
/// parses command-line arguments, loads the configuration file and starts
/// the bot's update loop.
///
/// Configuration errors are logged and terminate the process cleanly instead
/// of panicking. Per-message errors during operation never stop the bot.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting ipinfobot {}...", env!("CARGO_PKG_VERSION"));

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from YAML file with environment variable expansion
    let mut config: Config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    // Normalize ipinfo URL by removing trailing slash if present
    if config.ipinfo.url.ends_with('/') {
        config.ipinfo.url.pop();
    }

    // Launch bot
    let bot = Bot::new(config);
    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
    }
}
