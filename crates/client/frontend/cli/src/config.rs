//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_INPUT_POLL_MS` - Keyboard poll interval in milliseconds (default: 16)
    /// - `CLI_HIGHLIGHT_COMPLETE` - Dim finished sessions (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_INPUT_POLL_MS") {
            config.ui.input_poll_ms = interval.clamp(1, 1000);
        }

        if let Some(highlight) = read_env_bool("CLI_HIGHLIGHT_COMPLETE") {
            config.ui.highlight_complete = highlight;
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// How often the event loop polls the keyboard.
    pub input_poll_ms: u64,
    /// Render sessions that reached the final day in a muted style.
    pub highlight_complete: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input_poll_ms: 16,
            highlight_complete: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
