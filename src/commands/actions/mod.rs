//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler returns a
//! [`CommandOutcome`](crate::commands::CommandOutcome) with the reply to
//! send and, on tracked success paths, the usage label to record.
//!
//! # Handler Pattern
//!
//! The `/ip` and `/geo` handlers share the [`require_address`] guard: it
//! either produces a validated address for the handler body or
//! short-circuits with the appropriate error reply. A handler body never
//! sees an unvalidated address.
//!
//! # Available Handlers
//!
//! - [`handle_start`] - Short description of the bot
//! - [`handle_help`] - Command list with usage examples
//! - [`handle_ping`] - Liveness check
//! - [`handle_ip`] - Full geolocation record lookup
//! - [`handle_geo`] - Map location lookup

use std::net::IpAddr;

use crate::commands::{
    CommandReply,
    markdown_response::{format_invalid_address, format_missing_address},
    validator::{ValidationError, validate},
};

mod geo;
mod help;
mod ip;
mod ping;
mod start;

pub use crate::commands::actions::{
    geo::handle_geo, help::handle_help, ip::handle_ip, ping::handle_ping, start::handle_start,
};

/// Validation guard shared by the address-taking handlers.
///
/// Validates the raw command argument and either returns the address or the
/// error reply the handler must short-circuit with: the usage message for a
/// missing argument, or the verbatim-quoting rejection for an invalid one.
pub(crate) fn require_address(argument: Option<&str>) -> Result<IpAddr, CommandReply> {
    match validate(argument) {
        Ok(address) => Ok(address),
        Err(ValidationError::MissingArgument) => {
            Err(CommandReply::markdown(format_missing_address()))
        }
        Err(ValidationError::InvalidAddress(raw)) => {
            Err(CommandReply::plain(format_invalid_address(&raw)))
        }
    }
}
