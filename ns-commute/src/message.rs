//! Notification text building.
//!
//! Messages are plain text with Telegram's restricted HTML markup; only
//! `<b>` is used, for the route header.

use chrono::Timelike;

use crate::domain::{DayTime, Trip};

/// Render one trip line: `"HH:MM → HH:MM (Dmin, Ttransfers)"`.
pub fn format_trip(trip: &Trip) -> String {
    let dep = trip.departure();
    let arr = trip.arrival();
    format!(
        "{:02}:{:02} → {:02}:{:02} ({}min, {} transfers)",
        dep.hour(),
        dep.minute(),
        arr.hour(),
        arr.minute(),
        trip.planned_duration_mins(),
        trip.transfers(),
    )
}

/// Build the notification for a successful check: a bold route header
/// with the requested time, then one line per selected trip.
pub fn trip_message(from: &str, to: &str, requested: DayTime, trips: &[Trip]) -> String {
    let mut lines = vec![format!("<b>{from} → {to}</b> at {requested}")];
    lines.extend(trips.iter().map(format_trip));
    lines.join("\n")
}

/// Build the notification for a failed check.
pub fn error_message(from: &str, to: &str, error: &dyn std::fmt::Display) -> String {
    format!("Error checking {from} → {to}: {error}")
}
