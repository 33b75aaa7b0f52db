use time::UtcOffset;

use crate::dashboard::offset_from_minutes;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Zone used for the dashboard day when a request does not name one.
    pub default_utc_offset: UtcOffset,
    /// Max entries fetched for the history view.
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            default_utc_offset: UtcOffset::UTC,
            history_limit: 50,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Malformed numbers fall back to
    /// their defaults; an out-of-range offset is an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let default_utc_offset = match lookup("DEFAULT_UTC_OFFSET_MINUTES")
            .and_then(|v| v.parse::<i32>().ok())
        {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => defaults.default_utc_offset,
        };

        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port: lookup("APP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            default_utc_offset,
            history_limit: lookup("HISTORY_LIMIT")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.history_limit),
        })
    }
}
