//! TUI widgets for displaying dashboard state.
//!
//! Each widget has a single responsibility (SoC):
//! - `ClockPanel`: Renders the local time
//! - `WorldMap`: Renders the world outline with markers
//! - `SeriesChart`: Renders daily metric series as lines
//! - `CompositionGauge`: Renders the dead/cured/active stacked bar
//! - `FeedPanel`: Renders the newest lines of a paced feed
//! - `RegionTable`: Renders the ranked region table

mod clock;
mod composition_gauge;
mod feed_panel;
mod region_table;
mod series_chart;
mod update;
mod world_map;

pub use clock::ClockPanel;
pub use composition_gauge::CompositionGauge;
pub use feed_panel::FeedPanel;
pub use region_table::RegionTable;
pub use series_chart::SeriesChart;
pub use update::{DashUpdate, LogLine, LogTarget, Segment, Tone};
pub use world_map::WorldMap;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}
