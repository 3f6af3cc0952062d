//! Pipeline configuration.

use std::time::Duration;

use ingest::DEFAULT_API_BASE;
use types::MapPoint;

/// Cadence of the news feed.
pub const NEWS_PERIOD: Duration = Duration::from_millis(1800);
/// Cadence of the rumor feed.
pub const RUMOR_PERIOD: Duration = Duration::from_millis(3100);
/// Clock refresh period.
pub const CLOCK_PERIOD: Duration = Duration::from_millis(1000);
/// Marker blink period.
pub const MARKER_PERIOD: Duration = Duration::from_millis(1500);

/// Beijing and Guangzhou.
pub const DEFAULT_MARKERS: [MapPoint; 2] = [MapPoint::new(116.46, 39.92), MapPoint::new(113.23, 23.16)];

/// Configuration for the data pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// API base URL; endpoint paths are appended to it.
    pub api_base: String,
    /// One news item is revealed per period.
    pub news_period: Duration,
    /// One rumor is revealed per period.
    pub rumor_period: Duration,
    pub clock_period: Duration,
    pub marker_period: Duration,
    /// Points shown while the markers are on.
    pub markers: Vec<MapPoint>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            news_period: NEWS_PERIOD,
            rumor_period: RUMOR_PERIOD,
            clock_period: CLOCK_PERIOD,
            marker_period: MARKER_PERIOD,
            markers: DEFAULT_MARKERS.to_vec(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_news_period(mut self, period: Duration) -> Self {
        self.news_period = period;
        self
    }

    pub fn with_rumor_period(mut self, period: Duration) -> Self {
        self.rumor_period = period;
        self
    }

    pub fn with_clock_period(mut self, period: Duration) -> Self {
        self.clock_period = period;
        self
    }

    pub fn with_marker_period(mut self, period: Duration) -> Self {
        self.marker_period = period;
        self
    }

    pub fn with_markers(mut self, markers: Vec<MapPoint>) -> Self {
        self.markers = markers;
        self
    }
}
