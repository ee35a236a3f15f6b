//! Trip selection core.
//!
//! This module implements the logic that turns a raw API trip list into
//! the handful of options worth notifying about: filter out trips that
//! leave before the requested time, rank the rest, keep the top few.
//! It also decides which calendar date an HH:MM request refers to.

mod depart;
mod select;

pub use depart::departure_datetime;
pub use select::{MAX_RESULTS, select_trips};
