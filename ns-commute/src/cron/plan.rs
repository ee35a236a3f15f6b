//! Trigger planning from configuration.

use std::path::Path;

use crate::config::Config;
use crate::domain::DayTime;

use super::entry::CronEntry;
use super::error::CronError;

/// Compute the full trigger set for a config: one entry per
/// (route, offset) pair.
///
/// Each entry fires `offset` before the route's departure (wrapping
/// across midnight) and invokes the notifier with the route's stations,
/// departure time, and the config path as positional arguments. Paths
/// should be absolute, since cron runs commands from an arbitrary
/// working directory.
pub fn plan_entries(
    config: &Config,
    notifier_bin: &Path,
    config_path: &Path,
) -> Result<Vec<CronEntry>, CronError> {
    let mut entries = Vec::new();

    for route in &config.routes {
        let departure = route.departure()?;

        let command = format!(
            "{} {} {} {} {}",
            notifier_bin.display(),
            route.departure_station,
            route.arrival_station,
            route.departure_time,
            config_path.display(),
        );

        for offset in route.offsets()? {
            let trigger: DayTime = departure.minus(offset);
            entries.push(CronEntry::at(trigger, command.clone()));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Route;

    fn config(routes: Vec<Route>) -> Config {
        Config {
            ns_api_key: "k".into(),
            telegram_api_key: "t".into(),
            telegram_chat_id: "c".into(),
            routes,
        }
    }

    fn route(time: &str, offsets: &[&str]) -> Route {
        Route {
            departure_station: "Asd".into(),
            arrival_station: "Ut".into(),
            departure_time: time.into(),
            cron_offsets: offsets.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn one_entry_per_route_offset_pair() {
        let config = config(vec![route("08:00", &["1h", "15m"]), route("17:30", &["30"])]);
        let entries = plan_entries(
            &config,
            Path::new("/opt/bin/check-trips"),
            Path::new("/home/me/config.json"),
        )
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!((entries[0].hour, entries[0].minute), (7, 0));
        assert_eq!((entries[1].hour, entries[1].minute), (7, 45));
        assert_eq!((entries[2].hour, entries[2].minute), (17, 0));
    }

    #[test]
    fn command_carries_route_and_config_path() {
        let config = config(vec![route("08:00", &["15m"])]);
        let entries = plan_entries(
            &config,
            Path::new("/opt/bin/check-trips"),
            Path::new("/home/me/config.json"),
        )
        .unwrap();

        assert_eq!(
            entries[0].command,
            "/opt/bin/check-trips Asd Ut 08:00 /home/me/config.json"
        );
    }

    #[test]
    fn trigger_wraps_across_midnight() {
        let config = config(vec![route("00:10", &["30m"])]);
        let entries =
            plan_entries(&config, Path::new("/bin/check-trips"), Path::new("/cfg")).unwrap();
        assert_eq!((entries[0].hour, entries[0].minute), (23, 40));
    }

    #[test]
    fn bad_offset_fails_the_plan() {
        let config = config(vec![route("08:00", &["soon"])]);
        let err =
            plan_entries(&config, Path::new("/bin/check-trips"), Path::new("/cfg")).unwrap_err();
        assert!(matches!(err, CronError::Offset(_)));
    }

    #[test]
    fn no_routes_no_entries() {
        let config = config(vec![]);
        let entries =
            plan_entries(&config, Path::new("/bin/check-trips"), Path::new("/cfg")).unwrap();
        assert!(entries.is_empty());
    }
}
