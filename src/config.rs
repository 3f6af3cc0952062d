//! Dashboard configuration.
//!
//! Defaults reproduce the stock dashboard; a handful of environment
//! variables override them.

use std::path::PathBuf;
use std::time::Duration;

use pipeline::PipelineConfig;

/// Master configuration for the dashboard binary.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Endpoints, periods and markers.
    pub pipeline: PipelineConfig,

    // ─────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────
    /// TUI frame rate (frames per second).
    pub frame_rate: u64,
    /// Lines kept per feed log.
    pub scrollback: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────
    /// Log destination; the terminal belongs to the TUI.
    pub log_file: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineConfig::default(),
            frame_rate: 30,
            scrollback: 200,
            log_file: std::env::temp_dir().join("epidash.log"),
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `EPIDASH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    ///
    /// Unparseable values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let millis = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
        };

        if let Some(base) = lookup("EPIDASH_API_BASE") {
            config.pipeline.api_base = base;
        }
        if let Some(period) = millis("EPIDASH_NEWS_PERIOD_MS") {
            config.pipeline.news_period = period;
        }
        if let Some(period) = millis("EPIDASH_RUMOR_PERIOD_MS") {
            config.pipeline.rumor_period = period;
        }
        if let Some(period) = millis("EPIDASH_MARKER_PERIOD_MS") {
            config.pipeline.marker_period = period;
        }
        if let Some(fps) = lookup("EPIDASH_FRAME_RATE").and_then(|v| v.trim().parse().ok()) {
            config.frame_rate = fps;
        }
        if let Some(path) = lookup("EPIDASH_LOG_FILE") {
            config.log_file = PathBuf::from(path);
        }
        config
    }
}
