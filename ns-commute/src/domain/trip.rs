//! Trip and leg domain types.

use chrono::NaiveDateTime;

/// Error returned when constructing an invalid trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip: {reason}")]
pub struct InvalidTrip {
    reason: &'static str,
}

/// One unbroken segment of a trip between two stops.
///
/// Times are the planned wall-clock times carried by the API timestamp,
/// in the timestamp's own embedded offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    /// Planned departure from the leg's origin.
    pub departure: NaiveDateTime,
    /// Planned arrival at the leg's destination.
    pub arrival: NaiveDateTime,
}

/// A complete itinerary from the requested origin to the requested
/// destination.
///
/// Guaranteed non-empty: a `Trip` always has at least one leg, so the
/// overall departure and arrival accessors never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    legs: Vec<Leg>,
    planned_duration_mins: u32,
}

impl Trip {
    /// Create a trip from its legs and total planned duration.
    pub fn new(legs: Vec<Leg>, planned_duration_mins: u32) -> Result<Self, InvalidTrip> {
        if legs.is_empty() {
            return Err(InvalidTrip {
                reason: "must have at least one leg",
            });
        }
        Ok(Self {
            legs,
            planned_duration_mins,
        })
    }

    /// Planned departure of the first leg.
    pub fn departure(&self) -> NaiveDateTime {
        self.legs[0].departure
    }

    /// Planned arrival of the last leg.
    pub fn arrival(&self) -> NaiveDateTime {
        self.legs[self.legs.len() - 1].arrival
    }

    /// Number of transfers (legs minus one).
    pub fn transfers(&self) -> usize {
        self.legs.len() - 1
    }

    /// Total planned duration in minutes.
    pub fn planned_duration_mins(&self) -> u32 {
        self.planned_duration_mins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn leg(dep: (u32, u32), arr: (u32, u32)) -> Leg {
        Leg {
            departure: dt(dep.0, dep.1),
            arrival: dt(arr.0, arr.1),
        }
    }

    #[test]
    fn reject_empty_legs() {
        assert!(Trip::new(vec![], 30).is_err());
    }

    #[test]
    fn direct_trip_has_no_transfers() {
        let trip = Trip::new(vec![leg((8, 15), (9, 5))], 50).unwrap();
        assert_eq!(trip.transfers(), 0);
        assert_eq!(trip.departure(), dt(8, 15));
        assert_eq!(trip.arrival(), dt(9, 5));
        assert_eq!(trip.planned_duration_mins(), 50);
    }

    #[test]
    fn transfers_count_legs_minus_one() {
        let trip = Trip::new(
            vec![leg((8, 0), (8, 30)), leg((8, 40), (9, 10)), leg((9, 20), (9, 45))],
            105,
        )
        .unwrap();
        assert_eq!(trip.transfers(), 2);
        assert_eq!(trip.departure(), dt(8, 0));
        assert_eq!(trip.arrival(), dt(9, 45));
    }
}
