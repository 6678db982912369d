// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line configuration and logging setup.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Startup options for the pizzeria window.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pizzeria", version, about)]
pub struct AppConfig {
    /// Initial window width in points.
    #[arg(long, default_value_t = 480.0)]
    pub width: f32,
    /// Initial window height in points.
    #[arg(long, default_value_t = 640.0)]
    pub height: f32,
    /// Log filter used when `RUST_LOG` is not set (e.g. `debug` or `pizzeria=trace`).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl AppConfig {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    /// Filter from `RUST_LOG`, falling back to `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}

/// Install the global `tracing` subscriber.
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let config = AppConfig::try_parse_from(["pizzeria"]).unwrap();
        assert_eq!(config.inner_size(), [480.0, 640.0]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "pizzeria",
            "--width",
            "800",
            "--height",
            "600",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.inner_size(), [800.0, 600.0]);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(AppConfig::try_parse_from(["pizzeria", "--width", "wide"]).is_err());
    }
}
