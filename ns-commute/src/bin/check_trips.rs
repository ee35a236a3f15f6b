//! Trip notifier entry point.
//!
//! Fetches candidate trips for one route, selects the best few, and
//! sends them to the configured Telegram chat. A retrieval or
//! response-shape failure is itself reported to the chat and exits
//! normally; only a failure to deliver any message at all (or a config
//! problem, which leaves no way to notify) exits abnormally.

use std::process::ExitCode;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use ns_commute::config::{Config, DEFAULT_CONFIG_PATH};
use ns_commute::domain::{DayTime, Trip};
use ns_commute::message;
use ns_commute::ns::{NsClient, NsConfig, NsError};
use ns_commute::planner::{departure_datetime, select_trips};
use ns_commute::telegram::{TelegramClient, TelegramConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: check-trips <from_station> <to_station> <departure_time> [config_path]");
        return ExitCode::FAILURE;
    }

    let from = &args[0];
    let to = &args[1];
    let requested = match DayTime::parse_hhmm(&args[2]) {
        Ok(time) => time,
        Err(e) => {
            eprintln!("{}: {e}", args[2]);
            return ExitCode::FAILURE;
        }
    };
    let config_path = args.get(3).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);

    // No notification is possible without the messaging credentials,
    // so config problems are fatal rather than reported to the chat.
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let telegram = match TelegramClient::new(TelegramConfig::new(&config.telegram_api_key)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = check_route(&config, from, to, requested).await;

    let text = match &outcome {
        Ok(trips) => message::trip_message(from, to, requested, trips),
        Err(e) => message::error_message(from, to, e),
    };

    // Delivery failure is not converted into anything; there is nowhere
    // left to report to.
    if let Err(e) = telegram.send_message(&config.telegram_chat_id, &text).await {
        eprintln!("failed to send notification: {e}");
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(_) => println!("Sent notification for {from} → {to}"),
        Err(_) => println!("{text}"),
    }

    ExitCode::SUCCESS
}

/// Fetch and select trips for one route.
///
/// Returns the selected trips on success, or the failure that should be
/// reported to the chat instead.
async fn check_route(
    config: &Config,
    from: &str,
    to: &str,
    requested: DayTime,
) -> Result<Vec<Trip>, NsError> {
    let client = NsClient::new(NsConfig::new(&config.ns_api_key))?;

    let now = Local::now().naive_local();
    let target = departure_datetime(now, requested);

    let trips = client.plan_trips(from, to, target).await?;

    Ok(select_trips(trips, requested))
}
