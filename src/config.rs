use std::{env, fmt::Display, str::FromStr};

const DEFAULT_CHANNEL_CAPACITY: usize = 32;
const DEFAULT_LOG_FILTER: &str = "info";

const CHANNEL_CAPACITY_VAR: &str = "CAKEBAKE_CHANNEL_CAPACITY";
const LOG_FILTER_VAR: &str = "CAKEBAKE_LOG";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Mailbox size of every resource actor.
    pub channel_capacity: usize,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Values that were rejected while loading, reported by `setup_tracing`.
    pub fallbacks: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fallbacks: Vec::new(),
        }
    }
}

impl SystemConfig {
    /// Loads `CAKEBAKE_CHANNEL_CAPACITY` and `CAKEBAKE_LOG`, falling back to defaults.
    ///
    /// Runs before tracing is set up, so rejected values are kept in `fallbacks`
    /// instead of being logged here.
    pub fn load() -> Self {
        Self::from_values(
            env::var(CHANNEL_CAPACITY_VAR).ok().as_deref(),
            env::var(LOG_FILTER_VAR).ok().as_deref(),
        )
    }

    fn from_values(channel_capacity: Option<&str>, log_filter: Option<&str>) -> Self {
        let mut fallbacks = Vec::new();

        let mut capacity = parse_or(CHANNEL_CAPACITY_VAR, channel_capacity, DEFAULT_CHANNEL_CAPACITY, &mut fallbacks);
        // tokio refuses a zero-sized mailbox
        if capacity == 0 {
            fallbacks.push(format!("{CHANNEL_CAPACITY_VAR} must be at least 1, using 1"));
            capacity = 1;
        }

        let log_filter = match log_filter.map(str::trim) {
            Some("") => {
                fallbacks.push(format!("{LOG_FILTER_VAR} is blank, using default: {DEFAULT_LOG_FILTER}"));
                DEFAULT_LOG_FILTER.to_string()
            }
            Some(filter) => filter.to_string(),
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Self {
            channel_capacity: capacity,
            log_filter,
            fallbacks,
        }
    }
}

fn parse_or<T>(key: &str, value: Option<&str>, default: T, fallbacks: &mut Vec<String>) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = value else {
        return default;
    };
    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            fallbacks.push(format!("Invalid {key} value {raw:?}: {e}, using default: {default}"));
            default
        }
    }
}
