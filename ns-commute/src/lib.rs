//! NS commute notifier.
//!
//! Two small utilities around one JSON config: `check-trips` fetches
//! upcoming trips for a station pair from the NS journey-planning API
//! and sends the best options to a Telegram chat, and `setup-cron`
//! installs the crontab triggers that run those checks ahead of each
//! configured departure.

pub mod config;
pub mod cron;
pub mod domain;
pub mod message;
pub mod ns;
pub mod planner;
pub mod telegram;
