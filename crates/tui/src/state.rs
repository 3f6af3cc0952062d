//! Display state built from applied updates.

use std::collections::{BTreeMap, VecDeque};

use types::{Composition, MapPoint, Metric};

use crate::widgets::{DashUpdate, LogLine, LogTarget};

/// Default number of lines each log keeps.
pub const DEFAULT_SCROLLBACK: usize = 200;

/// Clock text shown before the first tick.
const CLOCK_PLACEHOLDER: &str = "--:--:--";

/// Labels and values of one charted metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Header and rows of the region table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Bounded log; the oldest line is dropped once full.
#[derive(Debug, Clone)]
pub struct FeedLog {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl FeedLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// The newest `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogLine> {
        self.lines.iter().skip(self.lines.len().saturating_sub(n))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything the TUI draws.
///
/// Mutated only by [`DashboardState::apply`].
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub clock: String,
    pub series: BTreeMap<Metric, SeriesData>,
    pub table: Option<TableData>,
    pub news: FeedLog,
    pub rumors: FeedLog,
    pub markers: Vec<MapPoint>,
    pub composition: Option<Composition>,
    /// Total log lines received per feed, including those scrolled out.
    pub news_received: usize,
    pub rumors_received: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLBACK)
    }
}

impl DashboardState {
    pub fn new(scrollback: usize) -> Self {
        Self {
            clock: CLOCK_PLACEHOLDER.to_string(),
            series: BTreeMap::new(),
            table: None,
            news: FeedLog::new(scrollback),
            rumors: FeedLog::new(scrollback),
            markers: Vec::new(),
            composition: None,
            news_received: 0,
            rumors_received: 0,
        }
    }

    pub fn apply(&mut self, update: DashUpdate) {
        match update {
            DashUpdate::Clock(text) => self.clock = text,
            DashUpdate::Series {
                metric,
                labels,
                values,
            } => {
                self.series.insert(metric, SeriesData { labels, values });
            }
            DashUpdate::Table { headers, rows } => {
                self.table = Some(TableData { headers, rows });
            }
            DashUpdate::Log { target, line } => match target {
                LogTarget::News => {
                    self.news.push(line);
                    self.news_received += 1;
                }
                LogTarget::Rumors => {
                    self.rumors.push(line);
                    self.rumors_received += 1;
                }
            },
            DashUpdate::AddMarker(point) => self.markers.push(point),
            DashUpdate::ClearMarkers => self.markers.clear(),
            DashUpdate::Composition(c) => self.composition = Some(c),
        }
    }

    pub fn series(&self, metric: Metric) -> Option<&SeriesData> {
        self.series.get(&metric)
    }
}
