//! Ip command handler.
//!
//! Validates the supplied address, fetches the full geolocation record and
//! replies with the formatted five-field template. Successful lookups are
//! tracked under the `Ip` label; validation and lookup failures are not.

use log::{debug, error};

use crate::commands::{
    CommandOutcome, CommandReply,
    actions::require_address,
    markdown_response::{format_base, format_lookup_failed},
};
use crate::ipinfo::Requester;

/// Handles the `/ip {ip}` command.
///
/// # Arguments
///
/// * `requester` - Geolocation client for the full record lookup
/// * `argument` - Raw command argument, absent when the user sent `/ip`
///   without an address
pub async fn handle_ip<R: Requester>(requester: &R, argument: Option<&str>) -> CommandOutcome {
    debug!("handling ip command, validating address");

    let address = match require_address(argument) {
        Ok(address) => address,
        Err(reply) => return CommandOutcome { reply, track: None },
    };

    match requester.lookup_full(&address).await {
        Ok(record) => CommandOutcome {
            reply: CommandReply::markdown(format_base(&address, &record)),
            track: Some("Ip"),
        },
        Err(e) => {
            error!("full lookup failed for {}: {:?}", address, e);
            CommandOutcome {
                reply: CommandReply::plain(format_lookup_failed()),
                track: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::TextFormat;
    use crate::ipinfo::{GeoRecord, IpInfoRequester, MockRequester};

    #[tokio::test]
    async fn test_handle_ip_formats_full_record() {
        let mut requester = MockRequester::new();
        requester.expect_lookup_full().times(1).returning(|_| {
            Ok(GeoRecord {
                hostname: Some("dns.google".to_owned()),
                org: Some("AS15169 Google LLC".to_owned()),
                country: Some("US".to_owned()),
                city: Some("Mountain View".to_owned()),
                loc: Some("37.4056,-122.0775".to_owned()),
            })
        });

        let outcome = handle_ip(&requester, Some("8.8.8.8")).await;

        assert_eq!(outcome.track, Some("Ip"));
        match outcome.reply {
            CommandReply::Text { body, format } => {
                assert_eq!(format, TextFormat::Markdown);
                assert!(body.starts_with("*8.8.8.8*"));
                assert!(body.contains("*Hostname*: dns.google"));
                assert!(body.contains("*Network*: AS15169 Google LLC"));
            }
            other => panic!("expected text reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_ip_renders_partial_record() {
        let mut requester = MockRequester::new();
        requester
            .expect_lookup_full()
            .times(1)
            .returning(|_| Ok(GeoRecord::default()));

        let outcome = handle_ip(&requester, Some("8.8.8.8")).await;

        assert_eq!(outcome.track, Some("Ip"));
        match outcome.reply {
            CommandReply::Text { body, .. } => {
                assert!(body.contains("*Hostname*: \n"));
                assert!(body.contains("*City*: \n"));
            }
            other => panic!("expected text reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_ip_invalid_address_is_rejected_before_lookup() {
        // No expectations: any lookup call would fail the test
        let requester = MockRequester::new();

        let outcome = handle_ip(&requester, Some("256.1.1.1")).await;

        assert_eq!(outcome.track, None);
        assert_eq!(
            outcome.reply,
            CommandReply::plain("\"256.1.1.1\" is not valid ipv4 or ipv6 address")
        );
    }

    #[tokio::test]
    async fn test_handle_ip_missing_address() {
        let requester = MockRequester::new();

        let outcome = handle_ip(&requester, None).await;

        assert_eq!(outcome.track, None);
        match outcome.reply {
            CommandReply::Text { body, .. } => {
                assert!(body.contains("Please provide a valid ipv4 or ipv6 address"));
            }
            other => panic!("expected text reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_ip_lookup_failure_is_a_generic_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/8.8.8.8/json")
            .with_status(500)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&server.url());
        let outcome = handle_ip(&requester, Some("8.8.8.8")).await;

        assert_eq!(outcome.track, None);
        assert_eq!(outcome.reply, CommandReply::plain(format_lookup_failed()));
    }
}
