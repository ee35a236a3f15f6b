//! Domain types for the commute notifier.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod offset;
mod time;
mod trip;

pub use offset::{Offset, OffsetError};
pub use time::{DayTime, TimeError};
pub use trip::{InvalidTrip, Leg, Trip};
