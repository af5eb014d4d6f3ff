//! Geo command handler.
//!
//! Validates the supplied address, fetches the location-only record and
//! replies either with a map location or with a fixed message when the
//! service knows no location for the address. Successful lookups are
//! tracked under the `Ip_Geo` label, whichever of the two outcomes occurs.

use log::{debug, error};

use crate::commands::{
    CommandOutcome, CommandReply,
    actions::require_address,
    markdown_response::{format_geo, format_lookup_failed},
};
use crate::ipinfo::Requester;

/// Handles the `/geo {ip}` command.
///
/// # Arguments
///
/// * `requester` - Geolocation client for the location-only lookup
/// * `argument` - Raw command argument, absent when the user sent `/geo`
///   without an address
pub async fn handle_geo<R: Requester>(requester: &R, argument: Option<&str>) -> CommandOutcome {
    debug!("handling geo command, validating address");

    let address = match require_address(argument) {
        Ok(address) => address,
        Err(reply) => return CommandOutcome { reply, track: None },
    };

    match requester.lookup_geo(&address).await {
        Ok(record) => CommandOutcome {
            reply: format_geo(&record),
            track: Some("Ip_Geo"),
        },
        Err(e) => {
            error!("geo lookup failed for {}: {:?}", address, e);
            CommandOutcome {
                reply: CommandReply::plain(format_lookup_failed()),
                track: None,
            }
        }
    }
}
