//! Trip filtering and ranking.

use chrono::Timelike;

use crate::domain::{DayTime, Trip};

/// Maximum number of trips included in a notification.
pub const MAX_RESULTS: usize = 3;

/// Select the trips worth notifying about.
///
/// Keeps trips whose first-leg departure `(hour, minute)` is at or
/// after the requested time, ranks them ascending by
/// `(transfers, planned duration)`, and truncates to [`MAX_RESULTS`].
///
/// The filter compares the wall clock only. A trip departing the next
/// calendar day at the same or a later hour/minute also passes; that is
/// deliberate, since the request itself is date-less.
///
/// The sort is stable, so trips with equal transfers and duration keep
/// the order the API returned them in.
pub fn select_trips(trips: Vec<Trip>, requested: DayTime) -> Vec<Trip> {
    let mut selected: Vec<Trip> = trips
        .into_iter()
        .filter(|trip| departs_at_or_after(trip, requested))
        .collect();

    selected.sort_by_key(|trip| (trip.transfers(), trip.planned_duration_mins()));
    selected.truncate(MAX_RESULTS);

    selected
}

fn departs_at_or_after(trip: &Trip, requested: DayTime) -> bool {
    let departure = trip.departure();
    (departure.hour(), departure.minute()) >= (requested.hour(), requested.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    /// A trip with the given number of legs; the first departs at the
    /// given time.
    fn trip(dep: (u32, u32), legs: usize, duration: u32) -> Trip {
        let legs = (0..legs)
            .map(|i| Leg {
                departure: dt(15, dep.0, dep.1) + chrono::Duration::minutes(i as i64 * 20),
                arrival: dt(15, dep.0, dep.1) + chrono::Duration::minutes(i as i64 * 20 + 15),
            })
            .collect();
        Trip::new(legs, duration).unwrap()
    }

    fn requested(s: &str) -> DayTime {
        DayTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn filters_out_earlier_departures() {
        let trips = vec![
            trip((7, 59), 1, 40),
            trip((8, 0), 1, 40),
            trip((8, 1), 1, 40),
        ];
        let selected = select_trips(trips, requested("08:00"));
        assert_eq!(selected.len(), 2);
        assert_eq!(
            (selected[0].departure().hour(), selected[0].departure().minute()),
            (8, 0)
        );
    }

    #[test]
    fn equal_hour_minute_passes() {
        let trips = vec![trip((8, 15), 1, 40)];
        assert_eq!(select_trips(trips, requested("08:15")).len(), 1);
    }

    #[test]
    fn later_hour_earlier_minute_passes() {
        // 09:00 >= 08:30 even though the minute is smaller
        let trips = vec![trip((9, 0), 1, 40)];
        assert_eq!(select_trips(trips, requested("08:30")).len(), 1);
    }

    #[test]
    fn next_day_same_wall_clock_passes() {
        // Date-less comparison: a next-day 08:15 departure still passes
        let legs = vec![Leg {
            departure: dt(16, 8, 15),
            arrival: dt(16, 9, 5),
        }];
        let trips = vec![Trip::new(legs, 50).unwrap()];
        assert_eq!(select_trips(trips, requested("08:15")).len(), 1);
    }

    #[test]
    fn ranks_by_transfers_then_duration() {
        // (transfers, duration): (1,60), (0,50), (0,45), (2,30)
        let trips = vec![
            trip((8, 10), 2, 60),
            trip((8, 20), 1, 50),
            trip((8, 30), 1, 45),
            trip((8, 40), 3, 30),
        ];
        let selected = select_trips(trips, requested("08:00"));

        assert_eq!(selected.len(), 3);
        assert_eq!(
            (selected[0].transfers(), selected[0].planned_duration_mins()),
            (0, 45)
        );
        assert_eq!(
            (selected[1].transfers(), selected[1].planned_duration_mins()),
            (0, 50)
        );
        assert_eq!(
            (selected[2].transfers(), selected[2].planned_duration_mins()),
            (1, 60)
        );
    }

    #[test]
    fn equal_keys_keep_api_order() {
        let first = trip((9, 0), 1, 45);
        let second = trip((8, 30), 1, 45);
        let selected = select_trips(vec![first.clone(), second.clone()], requested("08:00"));
        assert_eq!(selected, vec![first, second]);
    }

    #[test]
    fn truncates_to_three() {
        let trips = (0..6).map(|i| trip((9, i), 1, 40 + i)).collect();
        assert_eq!(select_trips(trips, requested("08:00")).len(), MAX_RESULTS);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(select_trips(vec![], requested("08:00")).is_empty());
    }

    #[test]
    fn all_filtered_out() {
        let trips = vec![trip((6, 0), 1, 40), trip((7, 30), 1, 40)];
        assert!(select_trips(trips, requested("08:00")).is_empty());
    }
}
