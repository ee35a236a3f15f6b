//! Schedule manager entry point.
//!
//! Maintains the crontab triggers that run `check-trips` ahead of each
//! configured departure. All failures here are fatal to the run; there
//! is no notification path for scheduling problems.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ns_commute::config::{Config, DEFAULT_CONFIG_PATH};
use ns_commute::cron::{Crontab, MARKER, plan_entries};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let action = match std::env::args().nth(1) {
        Some(action) => action,
        None => return usage(),
    };

    let result = match action.as_str() {
        "setup" => setup(),
        "list" => list(),
        "remove" => remove(),
        _ => return usage(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("Usage: setup-cron <setup|list|remove>");
    ExitCode::FAILURE
}

/// Replace all marker-tagged triggers with the set the config calls for.
fn setup() -> Result<(), Box<dyn Error>> {
    // Cron runs commands from an arbitrary working directory, so the
    // installed commands need absolute paths.
    let config_path = std::fs::canonicalize(DEFAULT_CONFIG_PATH)?;
    let config = Config::load(&config_path)?;
    let notifier = notifier_path()?;

    let entries = plan_entries(&config, &notifier, &config_path)?;

    let mut tab = Crontab::read_user()?;
    tab.remove_marked();
    for entry in &entries {
        println!("Added cron job: {} {}", entry.schedule(), entry.command);
        tab.add(entry);
    }
    tab.write_user()?;

    println!("Created {} cron jobs", entries.len());
    Ok(())
}

/// Print all marker-tagged triggers.
fn list() -> Result<(), Box<dyn Error>> {
    let tab = Crontab::read_user()?;
    let entries = tab.marked_entries();

    if entries.is_empty() {
        println!("No {MARKER} cron jobs found");
        return Ok(());
    }

    println!("Current {MARKER} cron jobs:");
    for entry in entries {
        println!("  {} {}", entry.schedule(), entry.command);
    }
    Ok(())
}

/// Delete all marker-tagged triggers.
fn remove() -> Result<(), Box<dyn Error>> {
    let mut tab = Crontab::read_user()?;
    let removed = tab.remove_marked();
    tab.write_user()?;

    println!("Removed {removed} {MARKER} cron jobs");
    Ok(())
}

/// Absolute path of the notifier binary, installed alongside this one.
fn notifier_path() -> std::io::Result<PathBuf> {
    Ok(std::env::current_exe()?.with_file_name("check-trips"))
}
