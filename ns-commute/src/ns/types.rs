//! NS API response DTOs.
//!
//! These types map directly to the NS Reisinformatie `/trips` JSON
//! response. They use `Option` liberally because the API omits fields
//! for some leg kinds rather than sending null values.

use serde::Deserialize;

/// Response from the `/trips` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TripsResponse {
    /// Candidate itineraries, best-guess order from the API.
    #[serde(default)]
    pub trips: Vec<TripDto>,
}

/// One itinerary in the response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    /// Ordered travel segments.
    #[serde(default)]
    pub legs: Vec<LegDto>,

    /// Total planned duration in minutes.
    pub planned_duration_in_minutes: Option<u32>,
}

/// One travel segment of an itinerary.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Where this leg starts.
    pub origin: StopDto,

    /// Where this leg ends.
    pub destination: StopDto,
}

/// A stop within a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    /// Station name.
    pub name: Option<String>,

    /// Planned time at this stop (RFC 3339, `Z` or numeric offset).
    pub planned_date_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_trips_response() {
        let json = r#"{
            "trips": [
                {
                    "plannedDurationInMinutes": 50,
                    "legs": [
                        {
                            "origin": {
                                "name": "Amsterdam Centraal",
                                "plannedDateTime": "2024-03-15T08:15:00+01:00"
                            },
                            "destination": {
                                "name": "Utrecht Centraal",
                                "plannedDateTime": "2024-03-15T09:05:00+01:00"
                            }
                        }
                    ]
                }
            ]
        }"#;

        let response: TripsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.trips.len(), 1);
        let trip = &response.trips[0];
        assert_eq!(trip.planned_duration_in_minutes, Some(50));
        assert_eq!(trip.legs.len(), 1);
        assert_eq!(
            trip.legs[0].origin.planned_date_time.as_deref(),
            Some("2024-03-15T08:15:00+01:00")
        );
    }

    #[test]
    fn missing_trips_array_reads_as_empty() {
        let response: TripsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.trips.is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let json = r#"{
            "source": "HARP",
            "trips": [
                {
                    "uid": "abc",
                    "plannedDurationInMinutes": 30,
                    "legs": [
                        {
                            "idx": "0",
                            "origin": {"name": "Asd", "plannedDateTime": "2024-03-15T08:00:00+01:00", "plannedTrack": "5"},
                            "destination": {"name": "Ut", "plannedDateTime": "2024-03-15T08:30:00+01:00"}
                        }
                    ]
                }
            ]
        }"#;
        let response: TripsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.trips[0].planned_duration_in_minutes, Some(30));
    }
}
