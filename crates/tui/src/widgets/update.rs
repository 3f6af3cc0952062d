//! DashUpdate message type for TUI updates.
//!
//! This module defines the render commands sent from the data pipeline to
//! the TUI thread. They are already shaped for display: series are
//! label/value pairs, table rows are strings, log lines are text segments.
//! Terminal colors are not part of the message; segments carry a semantic
//! [`Tone`] that the log widget maps to a style.

use types::{Composition, MapPoint, Metric};

/// Which log widget a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTarget {
    News,
    Rumors,
}

/// Semantic role of a piece of log text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Publication time of a news item.
    Timestamp,
    /// Publisher of a news item.
    Source,
    /// Rumor title.
    Question,
    /// Rumor verdict.
    Answer,
}

/// A run of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

/// One line of a log widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogLine {
    pub segments: Vec<Segment>,
}

impl LogLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment.
    pub fn push(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
        });
        self
    }

    /// Text without tones.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Update message sent from the pipeline to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum DashUpdate {
    /// Replace the clock text (`HH:MM:SS`).
    Clock(String),
    /// Replace the series of one metric.
    Series {
        metric: Metric,
        labels: Vec<String>,
        values: Vec<u64>,
    },
    /// Replace the region table.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Append a line to a log widget.
    Log { target: LogTarget, line: LogLine },
    /// Add a marker to the map.
    AddMarker(MapPoint),
    /// Remove every map marker.
    ClearMarkers,
    /// Replace the case-composition gauge.
    Composition(Composition),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_plain_text() {
        let line = LogLine::new()
            .push(Tone::Plain, "[")
            .push(Tone::Timestamp, "01-31 08:00:00")
            .push(Tone::Plain, "]");
        assert_eq!(line.plain_text(), "[01-31 08:00:00]");
        assert_eq!(line.segments.len(), 3);
    }
}
