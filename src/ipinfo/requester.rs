//! HTTP client for the ipinfo.io API.
//!
//! This module provides the [`IpInfoRequester`] struct for fetching
//! geolocation records about validated IP addresses.

use std::net::IpAddr;

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Error};

use crate::ipinfo::response_structs::GeoRecord;

/// Trait for fetching geolocation records.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
/// Both methods take an already validated address; raw user input never
/// reaches this layer.
#[automock]
pub trait Requester {
    /// Fetches the full geolocation record for an address.
    async fn lookup_full(&self, address: &IpAddr) -> Result<GeoRecord, Error>;
    /// Fetches the location-only record for an address. The service
    /// guarantees at most the `loc` field here.
    async fn lookup_geo(&self, address: &IpAddr) -> Result<GeoRecord, Error>;
}

/// HTTP client for requesting geolocation data from ipinfo.io.
///
/// # Examples
///
/// ```no_run
/// let requester = IpInfoRequester::new("https://ipinfo.io");
/// let record = requester.lookup_full(&"8.8.8.8".parse().unwrap()).await.unwrap();
/// println!("Record: {:?}", record);
/// ```
pub struct IpInfoRequester {
    /// Base URL of the geolocation service, without trailing slash
    url: String,
    /// HTTP client
    client: Client,
}

impl IpInfoRequester {
    /// Creates a new [`IpInfoRequester`].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the geolocation service.
    pub fn new(url: &str) -> Self {
        let client = reqwest::Client::new();
        IpInfoRequester {
            url: url.to_string(),
            client,
        }
    }

    async fn get(&self, url: &str) -> Result<GeoRecord, Error> {
        debug!("request {}", url);

        let record: GeoRecord = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("response from {} -> {:?}", url, &record);

        Ok(record)
    }
}

impl Requester for IpInfoRequester {
    /// Request `<base>/{address}/json` to get the full geolocation record.
    ///
    /// The api call returns a flat json object with string values:
    /// ```
    /// {
    ///   "ip": "8.8.8.8",
    ///   "hostname": "dns.google",
    ///   "city": "Mountain View",
    ///   "country": "US",
    ///   "loc": "37.4056,-122.0775",
    ///   "org": "AS15169 Google LLC"
    /// }
    /// ```
    /// Any field may be absent from the response.
    async fn lookup_full(&self, address: &IpAddr) -> Result<GeoRecord, Error> {
        let url = format!("{}/{}/json", &self.url, address);
        info!("request full record for {}", address);

        self.get(&url).await
    }

    /// Request `<base>/{address}/geo` to get the location-only record.
    async fn lookup_geo(&self, address: &IpAddr) -> Result<GeoRecord, Error> {
        let url = format!("{}/{}/geo", &self.url, address);
        info!("request geo record for {}", address);

        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_full() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();
        let body = r#"{
            "ip": "8.8.8.8",
            "hostname": "dns.google",
            "city": "Mountain View",
            "country": "US",
            "loc": "37.4056,-122.0775",
            "org": "AS15169 Google LLC"
        }"#;

        server
            .mock("GET", "/8.8.8.8/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let record = requester
            .lookup_full(&"8.8.8.8".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(record.hostname.as_deref(), Some("dns.google"));
        assert_eq!(record.org.as_deref(), Some("AS15169 Google LLC"));
        assert_eq!(record.country.as_deref(), Some("US"));
        assert_eq!(record.city.as_deref(), Some("Mountain View"));
        assert_eq!(record.loc.as_deref(), Some("37.4056,-122.0775"));
    }

    #[tokio::test]
    async fn test_lookup_full_partial_response() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/1.1.1.1/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ip": "1.1.1.1", "org": "AS13335 Cloudflare, Inc."}"#)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let record = requester
            .lookup_full(&"1.1.1.1".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(record.org.as_deref(), Some("AS13335 Cloudflare, Inc."));
        assert!(record.hostname.is_none());
        assert!(record.loc.is_none());
    }

    #[tokio::test]
    async fn test_lookup_geo() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/8.8.8.8/geo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ip": "8.8.8.8", "loc": "37.4056,-122.0775"}"#)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let record = requester
            .lookup_geo(&"8.8.8.8".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(record.loc.as_deref(), Some("37.4056,-122.0775"));
    }

    #[tokio::test]
    async fn test_lookup_ipv6_address_in_path() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/2001:4860:4860::8888/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"hostname": "dns.google"}"#)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let record = requester
            .lookup_full(&"2001:4860:4860::8888".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(record.hostname.as_deref(), Some("dns.google"));
    }

    #[tokio::test]
    async fn test_lookup_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/8.8.8.8/json")
            .with_status(500)
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let result = requester.lookup_full(&"8.8.8.8".parse().unwrap()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_non_json_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        server
            .mock("GET", "/8.8.8.8/json")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let requester = IpInfoRequester::new(&url);
        let result = requester.lookup_full(&"8.8.8.8".parse().unwrap()).await;

        assert!(result.is_err());
    }
}
