//! TUI crate: Terminal User Interface for the epidemic dashboard.
//!
//! This crate is the render boundary of the dashboard:
//! - Clock panel
//! - World map with blinking markers
//! - Two multi-series line charts (Dead/Cured, Confirmed/Suspected)
//! - Stacked case-composition gauge
//! - News and rumor logs
//! - Region ranking table
//!
//! # Architecture
//!
//! Data producers never touch the terminal. They push pre-shaped
//! [`DashUpdate`] render commands through a [`DashboardSink`]; the TUI
//! thread drains them once per frame:
//!
//! ```text
//! ┌────────────────┐     DashUpdate     ┌────────────────┐
//! │    Pipeline    │ ────────────────►  │      TUI       │
//! │ (tokio thread) │    (channel)       │ (main thread)  │
//! └────────────────┘                    └────────────────┘
//! ```
//!
//! Slow terminal rendering therefore never delays a fetch or a feed tick.
//!
//! # Usage
//!
//! ```ignore
//! use tui::{DashUpdate, DashboardSink, TuiApp};
//! use crossbeam_channel::unbounded;
//!
//! let (tx, rx) = unbounded::<DashUpdate>();
//! std::thread::spawn(move || tx.set_clock("12:00:00"));
//! TuiApp::new(rx).run()?;
//! ```

mod app;
mod sink;
mod state;
mod widgets;

pub use app::{TuiApp, grid_cell};
pub use sink::{DashboardSink, RecordingSink};
pub use state::{DashboardState, FeedLog, SeriesData, TableData};
pub use widgets::{DashUpdate, LogLine, LogTarget, Segment, Tone};
