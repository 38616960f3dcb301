//! Command-line parsing and validation helpers.

#[cfg(test)]
mod tests;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;

const MIN_POLL_MS: u64 = 10;
const MAX_POLL_MS: u64 = 5_000;
const MIN_READ_TIMEOUT_MS: u64 = 10;
const MAX_READ_TIMEOUT_MS: u64 = 2_000;

/// CLI options for the irmix poll loop.
#[derive(Debug, Parser, Clone)]
#[command(
    about = "Control per-application audio sessions from an infrared remote",
    author,
    version
)]
pub struct AppConfig {
    /// Serial port the remote receiver is attached to
    #[arg(long, env = "IRMIX_PORT", default_value = "COM3")]
    pub port: String,

    /// Serial baud rate
    #[arg(long, default_value_t = 9_600)]
    pub baud: u32,

    /// Delay between poll cycles (milliseconds)
    #[arg(long = "poll-ms", default_value_t = 100)]
    pub poll_ms: u64,

    /// Serial read timeout per poll (milliseconds)
    #[arg(long = "read-timeout-ms", default_value_t = 50)]
    pub read_timeout_ms: u64,

    /// Print the current audio sessions and exit
    #[arg(long = "list-sessions", default_value_t = false)]
    pub list_sessions: bool,

    /// Enable JSON trace logging to a temp file
    #[arg(long = "logs", env = "IRMIX_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "IRMIX_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize the port name.
    pub fn validate(&mut self) -> Result<()> {
        self.port = self.port.trim().to_string();
        if self.port.is_empty() {
            bail!("--port must not be empty");
        }
        if self.baud == 0 {
            bail!("--baud must be greater than zero");
        }
        if !(MIN_POLL_MS..=MAX_POLL_MS).contains(&self.poll_ms) {
            bail!(
                "--poll-ms must be between {MIN_POLL_MS} and {MAX_POLL_MS}, got {}",
                self.poll_ms
            );
        }
        if !(MIN_READ_TIMEOUT_MS..=MAX_READ_TIMEOUT_MS).contains(&self.read_timeout_ms) {
            bail!(
                "--read-timeout-ms must be between {MIN_READ_TIMEOUT_MS} and {MAX_READ_TIMEOUT_MS}, got {}",
                self.read_timeout_ms
            );
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
