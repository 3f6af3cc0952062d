//! Core types for the epidemic dashboard.
//!
//! This crate provides the shared data model used across the workspace:
//! raw snapshot records as returned by the remote API, the per-day series
//! produced from them, ranked region rows, feed items and map points.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Label used for region rows whose record carries no region name.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Milliseconds since the Unix epoch, as used by every API timestamp.
pub type EpochMillis = i64;

// =============================================================================
// Snapshot Records
// =============================================================================

/// One timestamped measurement of aggregate counts.
///
/// Used for both the overall history and per-region snapshots. Overall
/// records carry no region name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub dead_count: u64,
    pub cured_count: u64,
    pub confirmed_count: u64,
    pub suspected_count: u64,
    /// Absent (or `null`) in early snapshots.
    #[serde(default)]
    pub serious_count: Option<u64>,
    pub update_time: EpochMillis,
    #[serde(
        default,
        rename = "provinceShortName",
        skip_serializing_if = "Option::is_none"
    )]
    pub region_name: Option<String>,
}

impl SnapshotRecord {
    /// Serious count, with a missing value read as zero.
    pub fn serious(&self) -> u64 {
        self.serious_count.unwrap_or(0)
    }

    /// Region name for display, or [`UNKNOWN_REGION`].
    pub fn region_label(&self) -> &str {
        self.region_name.as_deref().unwrap_or(UNKNOWN_REGION)
    }

    /// Value of the given metric in this record.
    pub fn metric(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Dead => self.dead_count,
            Metric::Cured => self.cured_count,
            Metric::Confirmed => self.confirmed_count,
            Metric::Suspected => self.suspected_count,
            Metric::Serious => self.serious(),
        }
    }
}

// =============================================================================
// Metrics and Daily Series
// =============================================================================

/// A charted count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Dead,
    Cured,
    Confirmed,
    Suspected,
    Serious,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 5] = [
        Metric::Dead,
        Metric::Cured,
        Metric::Confirmed,
        Metric::Suspected,
        Metric::Serious,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::Dead => "dead",
            Metric::Cured => "cured",
            Metric::Confirmed => "confirmed",
            Metric::Suspected => "suspected",
            Metric::Serious => "serious",
        }
    }

    /// Capitalized name for chart legends.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Dead => "Dead",
            Metric::Cured => "Cured",
            Metric::Confirmed => "Confirmed",
            Metric::Suspected => "Suspected",
            Metric::Serious => "Serious",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parallel day labels and values for one metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    /// Day labels (`M-d`), ascending.
    pub labels: Vec<String>,
    /// One value per label.
    pub values: Vec<u64>,
}

impl DailySeries {
    /// Append one day.
    pub fn push(&mut self, label: impl Into<String>, value: u64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-day series for every [`Metric`].
///
/// Every metric is always present, and all series share the same length:
/// index `i` refers to the same calendar day in each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeriesSet {
    series: BTreeMap<Metric, DailySeries>,
}

impl Default for DailySeriesSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DailySeriesSet {
    /// Create a set with all five metrics empty.
    pub fn new() -> Self {
        Self {
            series: Metric::ALL
                .into_iter()
                .map(|m| (m, DailySeries::default()))
                .collect(),
        }
    }

    /// Append one day taken from `record` to every metric.
    pub fn push_day(&mut self, label: &str, record: &SnapshotRecord) {
        for (metric, series) in self.series.iter_mut() {
            series.push(label, record.metric(*metric));
        }
    }

    /// Series of one metric.
    pub fn get(&self, metric: Metric) -> &DailySeries {
        // Populated for every metric in `new`, never removed.
        &self.series[&metric]
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.get(Metric::Dead).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate metrics in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &DailySeries)> {
        self.series.iter().map(|(m, s)| (*m, s))
    }
}

// =============================================================================
// Region Rows
// =============================================================================

/// One row of the region ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    pub region_label: String,
    pub confirmed: u64,
    pub cured: u64,
    pub dead: u64,
}

impl From<&SnapshotRecord> for RankedRow {
    fn from(record: &SnapshotRecord) -> Self {
        Self {
            region_label: record.region_label().to_string(),
            confirmed: record.confirmed_count,
            cured: record.cured_count,
            dead: record.dead_count,
        }
    }
}

// =============================================================================
// Feed Items
// =============================================================================

/// A news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "pubDate")]
    pub publish_time: EpochMillis,
    #[serde(rename = "infoSource")]
    pub source: String,
    pub title: String,
}

/// A rumor with its debunking summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RumorItem {
    pub title: String,
    #[serde(rename = "mainSummary")]
    pub summary: String,
}

/// Any item shown in a paced feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    News(NewsItem),
    Rumor(RumorItem),
}

impl FeedItem {
    pub fn title(&self) -> &str {
        match self {
            FeedItem::News(n) => &n.title,
            FeedItem::Rumor(r) => &r.title,
        }
    }
}

impl From<NewsItem> for FeedItem {
    fn from(item: NewsItem) -> Self {
        FeedItem::News(item)
    }
}

impl From<RumorItem> for FeedItem {
    fn from(item: RumorItem) -> Self {
        FeedItem::Rumor(item)
    }
}

// =============================================================================
// Map Points
// =============================================================================

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lon: f64,
    pub lat: f64,
}

impl MapPoint {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

// =============================================================================
// Case Composition
// =============================================================================

/// Shares of dead, cured and still-active cases in the confirmed total.
///
/// Percentages in `0.0..=100.0`, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub dead_pct: f64,
    pub cured_pct: f64,
    pub active_pct: f64,
}
