// Demo configuration read from the environment.
//
// The store itself has no settings. These only shape the demo run: how much traffic to
// seed, how many producers insert concurrently, and what to query and purge afterwards.

use chrono::Duration;
use std::str::FromStr;
use thiserror::Error;

use crate::modules::events::core::event_type;

pub const SEED_EVENTS_VAR: &str = "EVENT_STORE_SEED_EVENTS";
pub const PRODUCERS_VAR: &str = "EVENT_STORE_PRODUCERS";
pub const QUERY_TYPE_VAR: &str = "EVENT_STORE_QUERY_TYPE";
pub const WINDOW_HOURS_VAR: &str = "EVENT_STORE_WINDOW_HOURS";
pub const PURGE_TYPE_VAR: &str = "EVENT_STORE_PURGE_TYPE";

// One hundred years. Keeps `now - window` well inside chrono's date range.
pub const MAX_WINDOW_HOURS: i64 = 100 * 366 * 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed_events: usize,
    pub producers: usize,
    pub query_type: String,
    pub window: Duration,
    pub purge_type: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_events: 10_000,
            producers: 4,
            query_type: event_type::LOCK_STATUS.to_string(),
            window: Duration::hours(48),
            purge_type: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Unset variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed_events = parse_or(&lookup, SEED_EVENTS_VAR, defaults.seed_events)?;

        let producers = parse_or(&lookup, PRODUCERS_VAR, defaults.producers)?;
        if producers == 0 {
            return Err(ConfigError::Invalid {
                var: PRODUCERS_VAR,
                reason: "must be at least 1".to_string(),
            });
        }

        let query_type = match lookup(QUERY_TYPE_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    var: QUERY_TYPE_VAR,
                    reason: "must not be empty".to_string(),
                });
            }
            Some(value) => value,
            None => defaults.query_type,
        };

        let window_hours: i64 =
            parse_or(&lookup, WINDOW_HOURS_VAR, defaults.window.num_hours())?;
        if !(1..=MAX_WINDOW_HOURS).contains(&window_hours) {
            return Err(ConfigError::Invalid {
                var: WINDOW_HOURS_VAR,
                reason: format!("must be between 1 and {MAX_WINDOW_HOURS}"),
            });
        }
        let window = Duration::hours(window_hours);

        let purge_type = lookup(PURGE_TYPE_VAR).filter(|value| !value.trim().is_empty());

        Ok(Self {
            seed_events,
            producers,
            query_type,
            window,
            purge_type,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
