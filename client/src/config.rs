//! Session configuration and environment loading.
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Poll interval used when none is configured
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How a [`Session`](crate::Session) refreshes and whose view it shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Team the user picked; overrides the payload's own `playTeam`
    pub team: Option<String>,
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            team: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SessionConfig {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: Some(team.into()),
            ..Self::default()
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `SANDLOT_TEAM`
    /// - `SANDLOT_POLL_MS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(team) = lookup("SANDLOT_TEAM").filter(|t| !t.trim().is_empty()) {
            config.team = Some(team.trim().to_string());
        }

        if let Some(ms) = parse_value::<u64>(lookup("SANDLOT_POLL_MS")) {
            config.poll_interval = Duration::from_millis(ms.max(1));
        }

        config
    }
}

fn parse_value<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|value| value.trim().parse().ok())
}
