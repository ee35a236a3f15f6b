//! Conversion from NS DTOs to domain types.
//!
//! Planned times keep the wall clock of the timestamp's embedded offset
//! (an `08:15+01:00` departure is 08:15 to the traveller), matching how
//! the times are shown in the notification and compared against the
//! requested departure.

use chrono::{DateTime, NaiveDateTime};

use crate::domain::{Leg, Trip};

use super::types::{LegDto, StopDto, TripDto, TripsResponse};

/// Error during DTO to domain conversion.
///
/// Unlike a board scraper that can skip one bad service, a malformed
/// trip here invalidates the whole response: the caller reports the
/// failure instead of notifying with a partial list.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a planned timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Trip has no legs
    #[error("trip has no legs")]
    EmptyTrip,
}

/// Convert a `/trips` response to domain trips, preserving API order.
pub fn convert_trips(response: &TripsResponse) -> Result<Vec<Trip>, ConversionError> {
    response.trips.iter().map(convert_trip).collect()
}

fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    if dto.legs.is_empty() {
        return Err(ConversionError::EmptyTrip);
    }

    let legs = dto
        .legs
        .iter()
        .map(convert_leg)
        .collect::<Result<Vec<Leg>, ConversionError>>()?;

    let duration = dto
        .planned_duration_in_minutes
        .ok_or(ConversionError::MissingField("plannedDurationInMinutes"))?;

    Trip::new(legs, duration).map_err(|_| ConversionError::EmptyTrip)
}

fn convert_leg(dto: &LegDto) -> Result<Leg, ConversionError> {
    Ok(Leg {
        departure: parse_planned(&dto.origin, "origin.plannedDateTime")?,
        arrival: parse_planned(&dto.destination, "destination.plannedDateTime")?,
    })
}

/// Parse a stop's planned timestamp to the wall clock of its embedded
/// offset.
fn parse_planned(stop: &StopDto, field: &'static str) -> Result<NaiveDateTime, ConversionError> {
    let raw = stop
        .planned_date_time
        .as_deref()
        .ok_or(ConversionError::MissingField(field))?;

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|_| ConversionError::InvalidTimestamp(raw.to_string()))?;

    Ok(parsed.naive_local())
}
