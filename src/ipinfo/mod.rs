//! ipinfo.io API integration.
//!
//! This module provides the HTTP client for the ipinfo.io geolocation
//! service and the data structures for its responses.
//!
//! # Modules
//!
//! - `requester` - HTTP client for making API requests to ipinfo.io
//! - `response_structs` - Data structures for API responses
//!
//! # Examples
//!
//! ```no_run
//! use ipinfobot::ipinfo::{IpInfoRequester, Requester};
//!
//! # async fn example() {
//! let requester = IpInfoRequester::new("https://ipinfo.io");
//! let record = requester
//!     .lookup_full(&"8.8.8.8".parse().unwrap())
//!     .await
//!     .unwrap();
//! # }
//! ```

mod requester;
mod response_structs;

pub use crate::ipinfo::requester::{IpInfoRequester, Requester};
pub use crate::ipinfo::response_structs::GeoRecord;

#[cfg(test)]
pub use crate::ipinfo::requester::MockRequester;
