//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::RuntimeConfig;
use strum::{Display, EnumString};

/// Configuration required to bootstrap the runtime, its feeds, and the UI.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub filter: SnapshotFilter,
    /// Delay before the push stream is reopened; `None` disables reconnects.
    pub reconnect_delay: Option<Duration>,
    pub request_timeout: Duration,
    pub runtime: RuntimeConfig,
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            filter: SnapshotFilter::default(),
            reconnect_delay: Some(Duration::from_secs(5)),
            request_timeout: Duration::from_secs(10),
            runtime: RuntimeConfig::default(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LEADERBOARD_HOST` - Server host and port (default: localhost:8000)
    /// - `LEADERBOARD_SECURE` - Force TLS on or off (default: off for localhost)
    /// - `LEADERBOARD_SNAPSHOT_PATH` - Snapshot endpoint path (default: /game/)
    /// - `LEADERBOARD_STREAM_PATH` - Push endpoint path (default: /session/)
    /// - `LEADERBOARD_FILTER` - all, active or complete (default: all)
    /// - `LEADERBOARD_RECONNECT_SECS` - Reconnect delay, 0 disables (default: 5)
    /// - `LEADERBOARD_REQUEST_TIMEOUT_SECS` - Snapshot request timeout (default: 10)
    /// - `RUNTIME_COMMAND_BUFFER` - Transition queue size (default: 32)
    /// - `RUNTIME_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    /// - `LEADERBOARD_LOG_DIR` - Log directory (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Endpoints
        if let Some(host) = lookup("LEADERBOARD_HOST").filter(|h| !h.trim().is_empty()) {
            config.endpoints.host = host.trim().to_string();
        }
        config.endpoints.secure = lookup("LEADERBOARD_SECURE").and_then(|v| parse_bool(&v));
        if let Some(path) = lookup("LEADERBOARD_SNAPSHOT_PATH") {
            config.endpoints.snapshot_path = path;
        }
        if let Some(path) = lookup("LEADERBOARD_STREAM_PATH") {
            config.endpoints.stream_path = path;
        }

        if let Some(filter) = read_value::<SnapshotFilter, _>(&lookup, "LEADERBOARD_FILTER") {
            config.filter = filter;
        }

        // Feed timing
        if let Some(secs) = read_value::<u64, _>(&lookup, "LEADERBOARD_RECONNECT_SECS") {
            config.reconnect_delay = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(secs) = read_value::<u64, _>(&lookup, "LEADERBOARD_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        // Runtime channels
        if let Some(capacity) = read_value::<usize, _>(&lookup, "RUNTIME_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_value::<usize, _>(&lookup, "RUNTIME_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config.log_dir = lookup("LEADERBOARD_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Full snapshot URL, including the session filter query.
    pub fn snapshot_url(&self) -> String {
        self.endpoints.snapshot_url(self.filter)
    }

    pub fn stream_url(&self) -> String {
        self.endpoints.stream_url()
    }
}

/// Server location and the two feed paths.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub host: String,
    /// Explicit TLS choice; when unset, TLS is used for every non-local host.
    pub secure: Option<bool>,
    pub snapshot_path: String,
    pub stream_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            host: "localhost:8000".to_string(),
            secure: None,
            snapshot_path: "/game/".to_string(),
            stream_path: "/session/".to_string(),
        }
    }
}

impl Endpoints {
    pub fn is_secure(&self) -> bool {
        self.secure.unwrap_or_else(|| !is_local_host(&self.host))
    }

    pub fn snapshot_url(&self, filter: SnapshotFilter) -> String {
        let scheme = if self.is_secure() { "https" } else { "http" };
        let mut url = format!("{scheme}://{}{}", self.host, normalize_path(&self.snapshot_path));
        if let Some(query) = filter.query() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    pub fn stream_url(&self) -> String {
        let scheme = if self.is_secure() { "wss" } else { "ws" };
        format!("{scheme}://{}{}", self.host, normalize_path(&self.stream_path))
    }
}

/// Which sessions the snapshot endpoint should return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SnapshotFilter {
    #[default]
    All,
    /// Sessions still being played.
    Active,
    /// Sessions that reached the final day.
    Complete,
}

impl SnapshotFilter {
    /// Query string understood by the server's session list.
    pub fn query(self) -> Option<&'static str> {
        match self {
            SnapshotFilter::All => None,
            SnapshotFilter::Active => Some("active=only"),
            SnapshotFilter::Complete => Some("active=complete"),
        }
    }
}

fn is_local_host(host: &str) -> bool {
    host.starts_with("localhost") || host.starts_with("127.0.0.1")
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn read_value<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_local_server() {
        let config = config_from(&[]);

        assert_eq!(config.snapshot_url(), "http://localhost:8000/game/");
        assert_eq!(config.stream_url(), "ws://localhost:8000/session/");
        assert_eq!(config.reconnect_delay, Some(Duration::from_secs(5)));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.runtime.command_buffer_size, 32);
        assert_eq!(config.runtime.event_buffer_size, 100);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn remote_hosts_use_tls() {
        let config = config_from(&[("LEADERBOARD_HOST", "elves.example.com")]);

        assert_eq!(config.snapshot_url(), "https://elves.example.com/game/");
        assert_eq!(config.stream_url(), "wss://elves.example.com/session/");
    }

    #[test]
    fn secure_flag_overrides_host_detection() {
        let config = config_from(&[
            ("LEADERBOARD_HOST", "localhost:9000"),
            ("LEADERBOARD_SECURE", "yes"),
        ]);
        assert_eq!(config.stream_url(), "wss://localhost:9000/session/");

        let config = config_from(&[
            ("LEADERBOARD_HOST", "10.0.0.4:8000"),
            ("LEADERBOARD_SECURE", "off"),
        ]);
        assert_eq!(config.snapshot_url(), "http://10.0.0.4:8000/game/");
    }

    #[test]
    fn filter_adds_query() {
        let active = config_from(&[("LEADERBOARD_FILTER", "Active")]);
        assert_eq!(active.filter, SnapshotFilter::Active);
        assert_eq!(active.snapshot_url(), "http://localhost:8000/game/?active=only");

        let complete = config_from(&[("LEADERBOARD_FILTER", "complete")]);
        assert_eq!(
            complete.snapshot_url(),
            "http://localhost:8000/game/?active=complete"
        );

        let unknown = config_from(&[("LEADERBOARD_FILTER", "finished")]);
        assert_eq!(unknown.filter, SnapshotFilter::All);
    }

    #[test]
    fn zero_reconnect_disables_reconnect() {
        let config = config_from(&[("LEADERBOARD_RECONNECT_SECS", "0")]);
        assert_eq!(config.reconnect_delay, None);

        let config = config_from(&[("LEADERBOARD_RECONNECT_SECS", "12")]);
        assert_eq!(config.reconnect_delay, Some(Duration::from_secs(12)));
    }

    #[test]
    fn paths_and_buffers_are_read() {
        let config = config_from(&[
            ("LEADERBOARD_SNAPSHOT_PATH", "api/games"),
            ("LEADERBOARD_STREAM_PATH", "/ws/"),
            ("RUNTIME_COMMAND_BUFFER", "0"),
            ("RUNTIME_EVENT_BUFFER", "256"),
            ("LEADERBOARD_LOG_DIR", "/var/log/leaderboard"),
        ]);

        assert_eq!(config.snapshot_url(), "http://localhost:8000/api/games");
        assert_eq!(config.stream_url(), "ws://localhost:8000/ws/");
        assert_eq!(config.runtime.command_buffer_size, 1);
        assert_eq!(config.runtime.event_buffer_size, 256);
        assert_eq!(
            config.log_dir,
            Some(PathBuf::from("/var/log/leaderboard"))
        );
    }
}
