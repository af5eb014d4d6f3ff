//! Strict IP address validation for command arguments.
//!
//! The `/ip` and `/geo` handlers only ever see an address that passed this
//! validator. Parsing accepts IPv4 dotted-quad and IPv6 colon-hex literals
//! exclusively: hostnames, CIDR suffixes and anything else are rejected.

use std::net::IpAddr;

/// Errors that can occur while validating a command argument.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// No address was supplied with the command.
    MissingArgument,
    /// The supplied text is not an IPv4 or IPv6 literal. Carries the raw
    /// input so the reply can quote it verbatim.
    InvalidAddress(String),
}

/// Validates a raw command argument as an IP address literal.
///
/// # Arguments
///
/// * `raw` - The raw argument extracted by the router, absent when the user
///   sent the bare command
///
/// # Returns
///
/// * `Ok(IpAddr)` - The parsed address in canonical form
/// * `Err(ValidationError::MissingArgument)` - The argument is absent or empty
/// * `Err(ValidationError::InvalidAddress)` - The argument is not a valid
///   IPv4 or IPv6 literal
///
/// # Examples
///
/// ```
/// # use ipinfobot::commands::validator::validate;
/// assert!(validate(Some("8.8.8.8")).is_ok());
/// assert!(validate(Some("2001:4860:4860::8888")).is_ok());
/// assert!(validate(Some("999.1.1.1")).is_err());
/// assert!(validate(None).is_err());
/// ```
pub fn validate(raw: Option<&str>) -> Result<IpAddr, ValidationError> {
    let raw = match raw {
        None | Some("") => return Err(ValidationError::MissingArgument),
        Some(raw) => raw,
    };

    raw.parse::<IpAddr>()
        .map_err(|_| ValidationError::InvalidAddress(raw.to_owned()))
}
