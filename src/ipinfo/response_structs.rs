//! Response structures for the ipinfo.io API.
//!
//! This module contains the structure for deserializing JSON responses from
//! the geolocation service.

use serde::Deserialize;
use std::fmt;

/// A geolocation record for an IP address.
///
/// The service returns a flat key-value JSON object and any field may be
/// absent; absence is a normal, expected state, not an error. The `loc`
/// field, when present, is a comma-separated `"latitude,longitude"` string.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct GeoRecord {
    /// Reverse DNS hostname of the address.
    pub hostname: Option<String>,
    /// Owning network or organization, usually prefixed with the AS number.
    pub org: Option<String>,
    /// Two-letter country code.
    pub country: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Comma-separated latitude/longitude pair.
    pub loc: Option<String>,
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hostname={:?}, org={:?}, country={:?}, city={:?}, loc={:?}",
            self.hostname, self.org, self.country, self.city, self.loc
        )
    }
}
