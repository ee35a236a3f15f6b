//! NS Reisinformatie API client.
//!
//! This module provides an HTTP client for the Dutch Railways (NS)
//! journey-planning API, which returns candidate trips between two
//! stations around a requested departure time.
//!
//! Key characteristics of the API:
//! - Authentication is an `Ocp-Apim-Subscription-Key` header
//! - The `dateTime` query parameter is a local ISO 8601 datetime with
//!   no timezone suffix
//! - Planned times in the response are RFC 3339 with a `Z` or numeric
//!   offset suffix

mod client;
mod convert;
mod error;
mod types;

pub use client::{NsClient, NsConfig};
pub use convert::{ConversionError, convert_trips};
pub use error::NsError;
pub use types::{LegDto, StopDto, TripDto, TripsResponse};
