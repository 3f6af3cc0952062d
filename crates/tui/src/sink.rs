//! The render boundary seen from the data side.

use std::sync::Arc;

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::trace;
use types::{Composition, MapPoint, Metric};

use crate::widgets::{DashUpdate, LogLine, LogTarget};

/// Receives render commands.
///
/// Pushing is one-way and never blocks; the sink owns all rendering. The
/// provided methods are thin constructors over [`DashboardSink::push`].
pub trait DashboardSink: Send + Sync + 'static {
    fn push(&self, update: DashUpdate);

    fn set_clock(&self, text: impl Into<String>) {
        self.push(DashUpdate::Clock(text.into()));
    }

    fn set_series(&self, metric: Metric, labels: Vec<String>, values: Vec<u64>) {
        self.push(DashUpdate::Series {
            metric,
            labels,
            values,
        });
    }

    fn set_table(&self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.push(DashUpdate::Table { headers, rows });
    }

    fn append_log(&self, target: LogTarget, line: LogLine) {
        self.push(DashUpdate::Log { target, line });
    }

    fn add_marker(&self, point: MapPoint) {
        self.push(DashUpdate::AddMarker(point));
    }

    fn clear_markers(&self) {
        self.push(DashUpdate::ClearMarkers);
    }

    fn set_composition(&self, composition: Composition) {
        self.push(DashUpdate::Composition(composition));
    }
}

impl DashboardSink for Sender<DashUpdate> {
    fn push(&self, update: DashUpdate) {
        // Only fails once the TUI has exited.
        if self.send(update).is_err() {
            trace!("dashboard closed, dropping update");
        }
    }
}

/// In-memory sink that records every update.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    updates: Arc<Mutex<Vec<DashUpdate>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything pushed so far.
    pub fn updates(&self) -> Vec<DashUpdate> {
        self.updates.lock().clone()
    }

    /// Remove and return everything pushed so far.
    pub fn take(&self) -> Vec<DashUpdate> {
        std::mem::take(&mut *self.updates.lock())
    }

    /// Lines appended to one log, as plain text.
    pub fn log_lines(&self, target: LogTarget) -> Vec<String> {
        self.updates
            .lock()
            .iter()
            .filter_map(|u| match u {
                DashUpdate::Log { target: t, line } if *t == target => Some(line.plain_text()),
                _ => None,
            })
            .collect()
    }
}

impl DashboardSink for RecordingSink {
    fn push(&self, update: DashUpdate) {
        self.updates.lock().push(update);
    }
}
