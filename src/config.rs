use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Dataset location: an http(s) URL or a local file path
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Cosmetic view-sequencing delays
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Delays used by the view-state sequencer.
///
/// These exist for presentation pacing only and carry no correctness
/// meaning, so they are configuration rather than constants; tests run the
/// sequencer with [`TimingConfig::zero`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    /// Intro animation shown once at startup, in milliseconds
    #[serde(default = "default_intro_ms")]
    pub intro_ms: u64,
    /// Delay before revealing results or the empty-result notice
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u64,
    /// How long the empty-result notice stays up before returning to input
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            intro_ms: default_intro_ms(),
            reveal_ms: default_reveal_ms(),
            notice_ms: default_notice_ms(),
        }
    }
}

impl TimingConfig {
    /// All delays disabled. Used by tests and scripted runs.
    pub fn zero() -> Self {
        Self {
            intro_ms: 0,
            reveal_ms: 0,
            notice_ms: 0,
        }
    }

    pub fn intro(&self) -> Duration {
        Duration::from_millis(self.intro_ms)
    }

    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    pub fn notice(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }
}

// Default value functions
fn default_dataset() -> String {
    "recipe-dataset.csv".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_intro_ms() -> u64 {
    4050
}

fn default_reveal_ms() -> u64 {
    3300
}

fn default_notice_ms() -> u64 {
    3000
}

impl AppConfig {
    /// The HTTP request timeout as a [`Duration`], for handing to the fetcher.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with KITCHEN_CANVAS__ prefix
    /// 2. config.toml file in current directory
    /// 3. Serde field defaults for anything neither source sets
    ///
    /// Environment variable format: KITCHEN_CANVAS__TIMING__REVEAL_MS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: KITCHEN_CANVAS__TIMING__INTRO_MS
            .add_source(
                Environment::with_prefix("KITCHEN_CANVAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_dataset(), "recipe-dataset.csv");
        assert_eq!(default_timeout(), 30);
        assert_eq!(default_intro_ms(), 4050);
        assert_eq!(default_reveal_ms(), 3300);
        assert_eq!(default_notice_ms(), 3000);
    }

    #[test]
    fn test_timing_config_default() {
        let timing = TimingConfig::default();
        assert_eq!(timing.intro_ms, 4050);
        assert_eq!(timing.reveal_ms, 3300);
        assert_eq!(timing.notice_ms, 3000);
    }

    #[test]
    fn test_timeout_from_source_reaches_the_fetch_duration() {
        let settings = Config::builder()
            .add_source(File::from_str("timeout = 5", config::FileFormat::Toml))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.timeout, 5);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_timing_config_zero() {
        let timing = TimingConfig::zero();
        assert_eq!(timing.intro(), Duration::ZERO);
        assert_eq!(timing.reveal(), Duration::ZERO);
        assert_eq!(timing.notice(), Duration::ZERO);
    }
}
