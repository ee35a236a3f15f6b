//! Telegram bot API client.
//!
//! Delivers notification messages via the `sendMessage` method of the
//! Telegram bot HTTP API. The bot token travels in the URL path, the
//! payload is form-encoded, and `parse_mode=HTML` enables the
//! restricted inline tag set the messages use.

mod client;
mod error;

pub use client::{TelegramClient, TelegramConfig};
pub use error::TelegramError;
