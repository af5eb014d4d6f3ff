//! Response formatters for bot commands.
//!
//! This module turns geolocation records and error conditions into the
//! replies the bot sends back to Telegram. Text replies use Telegram's
//! Markdown syntax for field emphasis; the location reply carries the raw
//! latitude/longitude substrings for the transport's map message.

use std::net::IpAddr;

use crate::commands::CommandReply;
use crate::ipinfo::GeoRecord;

/// Formats the usage message listing the bot commands.
///
/// This is the body of the `/help` reply.
///
/// # Examples
///
/// ```
/// # use ipinfobot::commands::markdown_response::format_usage;
/// let usage = format_usage();
/// assert!(usage.contains("/ip"));
/// assert!(usage.contains("/geo"));
/// ```
pub fn format_usage() -> String {
    "Hi! I'm ipinfo.io bot and I can give you IP geolocation \
     info about any IP address you send to me.\n\n\
     You can control me by sending these commands:\n\n\
     /ip {ip} - get infromation about the IP\n\
     /geo {ip} - get location on a map for the IP"
        .to_owned()
}

/// Formats the short description of the bot.
///
/// This is the body of the `/start` reply.
pub fn format_about() -> String {
    "This bot allows you to get a simple information about \
     giving IP address. All data provided by http://ipinfo.io/ service."
        .to_owned()
}

/// Formats the reply for an `/ip` or `/geo` command sent without an address.
pub fn format_missing_address() -> String {
    "Please provide a valid ipv4 or ipv6 \
     address for this command. \
     Use /help command for examples."
        .to_owned()
}

/// Formats the reply for a rejected address, quoting the input verbatim.
///
/// # Examples
///
/// ```
/// # use ipinfobot::commands::markdown_response::format_invalid_address;
/// assert_eq!(
///     format_invalid_address("999.1.1.1"),
///     "\"999.1.1.1\" is not valid ipv4 or ipv6 address"
/// );
/// ```
pub fn format_invalid_address(raw: &str) -> String {
    format!("\"{}\" is not valid ipv4 or ipv6 address", raw)
}

/// Formats the generic reply for a failed geolocation lookup.
pub fn format_lookup_failed() -> String {
    "Sorry, the lookup service is unavailable right now. Please try again later.".to_owned()
}

/// Formats a full geolocation record into the fixed five-field template.
///
/// Every recognized field that is absent from the record renders as the
/// empty string: partial data is always renderable and this function never
/// fails.
///
/// # Arguments
///
/// * `address` - The validated address the record describes
/// * `record` - The geolocation record, possibly missing any field
///
/// # Returns
///
/// A Markdown-formatted string with the address, hostname, network,
/// country, city and latitude/longitude lines.
pub fn format_base(address: &IpAddr, record: &GeoRecord) -> String {
    format!(
        "*{ip}*\n\n\
         *Hostname*: {hostname}\n\
         *Network*: {org}\n\
         *Country*: {country}\n\
         *City*: {city}\n\
         *Latitude/Longitude*: {loc}\n",
        ip = address,
        hostname = record.hostname.as_deref().unwrap_or(""),
        org = record.org.as_deref().unwrap_or(""),
        country = record.country.as_deref().unwrap_or(""),
        city = record.city.as_deref().unwrap_or(""),
        loc = record.loc.as_deref().unwrap_or(""),
    )
}

/// Formats a geolocation record into a location reply.
///
/// When the record carries a `loc` field, it is split on the first comma
/// into latitude and longitude substrings and returned as a location
/// payload; the substrings are passed through as-is, without numeric
/// validation. When `loc` is absent, a fixed text reply is returned
/// instead. Exactly one of the two outcomes occurs.
pub fn format_geo(record: &GeoRecord) -> CommandReply {
    match &record.loc {
        Some(loc) => {
            // A loc without a comma yields the whole string as latitude and
            // an empty longitude
            let (latitude, longitude) = loc.split_once(',').unwrap_or((loc.as_str(), ""));
            CommandReply::Location {
                latitude: latitude.to_owned(),
                longitude: longitude.to_owned(),
            }
        }
        None => CommandReply::plain("Sorry, location is unknown for this address"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> GeoRecord {
        GeoRecord {
            hostname: Some("dns.google".to_owned()),
            org: Some("AS15169 Google LLC".to_owned()),
            country: Some("US".to_owned()),
            city: Some("Mountain View".to_owned()),
            loc: Some("37.4056,-122.0775".to_owned()),
        }
    }

    #[test]
    fn test_format_base_full_record() {
        let address: IpAddr = "8.8.8.8".parse().unwrap();
        let body = format_base(&address, &full_record());

        assert_eq!(
            body,
            "*8.8.8.8*\n\n\
             *Hostname*: dns.google\n\
             *Network*: AS15169 Google LLC\n\
             *Country*: US\n\
             *City*: Mountain View\n\
             *Latitude/Longitude*: 37.4056,-122.0775\n"
        );
    }

    #[test]
    fn test_format_base_empty_record_renders_empty_fields() {
        let address: IpAddr = "8.8.8.8".parse().unwrap();
        let body = format_base(&address, &GeoRecord::default());

        assert_eq!(
            body,
            "*8.8.8.8*\n\n\
             *Hostname*: \n\
             *Network*: \n\
             *Country*: \n\
             *City*: \n\
             *Latitude/Longitude*: \n"
        );
    }

    #[test]
    fn test_format_base_partial_record() {
        let address: IpAddr = "8.8.8.8".parse().unwrap();
        let record = GeoRecord {
            country: Some("US".to_owned()),
            ..GeoRecord::default()
        };
        let body = format_base(&address, &record);

        assert!(body.contains("*Country*: US\n"));
        assert!(body.contains("*Hostname*: \n"));
    }

    #[test]
    fn test_format_geo_splits_loc_on_first_comma() {
        let record = GeoRecord {
            loc: Some("37.4,-122.1".to_owned()),
            ..GeoRecord::default()
        };

        assert_eq!(
            format_geo(&record),
            CommandReply::Location {
                latitude: "37.4".to_owned(),
                longitude: "-122.1".to_owned(),
            }
        );
    }

    #[test]
    fn test_format_geo_passes_coordinates_through_verbatim() {
        let record = GeoRecord {
            loc: Some("north,south,east".to_owned()),
            ..GeoRecord::default()
        };

        // Only the first comma splits; no numeric validation happens here
        assert_eq!(
            format_geo(&record),
            CommandReply::Location {
                latitude: "north".to_owned(),
                longitude: "south,east".to_owned(),
            }
        );
    }

    #[test]
    fn test_format_geo_without_comma() {
        let record = GeoRecord {
            loc: Some("37.4".to_owned()),
            ..GeoRecord::default()
        };

        assert_eq!(
            format_geo(&record),
            CommandReply::Location {
                latitude: "37.4".to_owned(),
                longitude: String::new(),
            }
        );
    }

    #[test]
    fn test_format_geo_missing_loc() {
        assert_eq!(
            format_geo(&GeoRecord::default()),
            CommandReply::plain("Sorry, location is unknown for this address")
        );
    }

    #[test]
    fn test_format_invalid_address_quotes_input() {
        assert_eq!(
            format_invalid_address("256.1.1.1"),
            "\"256.1.1.1\" is not valid ipv4 or ipv6 address"
        );
    }
}
