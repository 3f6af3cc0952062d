//! Main TUI application - composes widgets and handles rendering loop.
//!
//! The screen is a 6×12 grid:
//!
//! ```text
//!        cols 0-5              cols 6-8        cols 9-11
//! row 0  Clock                 Dead/Cured      Confirmed/Suspected
//! row 1  World Map             "               "
//! row 2  "                     "               "
//! row 3  "                     Composition gauge
//! row 4  News (0-3) │ Rumors (4-7) │ Regions (8-11)
//! row 5  "          │ "            │ "
//! ```
//!
//! # Keys
//!
//! - `q` / `Esc` / `Ctrl+C`: Quit
//! - `↑` / `↓`: Scroll the region table

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::info;
use types::Metric;

use crate::state::{DEFAULT_SCROLLBACK, DashboardState};
use crate::widgets::{
    ClockPanel, CompositionGauge, DashUpdate, FeedPanel, RegionTable, SeriesChart, WorldMap,
};

/// Grid rows.
const GRID_ROWS: u16 = 6;
/// Grid columns.
const GRID_COLS: u16 = 12;

/// Area of a grid cell spanning `row_span` rows and `col_span` columns.
///
/// Edges are computed proportionally, so adjacent cells never overlap and
/// leftover columns are spread across the grid.
pub fn grid_cell(area: Rect, row: u16, col: u16, row_span: u16, col_span: u16) -> Rect {
    let edge = |start: u16, len: u16, i: u16, n: u16| -> u16 {
        start + ((len as u32 * i.min(n) as u32) / n as u32) as u16
    };
    let x0 = edge(area.x, area.width, col, GRID_COLS);
    let x1 = edge(area.x, area.width, col + col_span, GRID_COLS);
    let y0 = edge(area.y, area.height, row, GRID_ROWS);
    let y1 = edge(area.y, area.height, row + row_span, GRID_ROWS);
    Rect::new(x0, y0, x1 - x0, y1 - y0)
}

/// TUI application state.
pub struct TuiApp {
    /// Channel receiver for pipeline updates.
    receiver: Receiver<DashUpdate>,
    /// Latest display state.
    state: DashboardState,
    /// Target frame rate.
    frame_rate: u64,
    /// Region table scroll offset.
    table_scroll: usize,
}

impl TuiApp {
    /// Create a new TUI app with the given channel receiver.
    pub fn new(receiver: Receiver<DashUpdate>) -> Self {
        Self {
            receiver,
            state: DashboardState::new(DEFAULT_SCROLLBACK),
            frame_rate: 30, // 30 FPS
            table_scroll: 0,
        }
    }

    /// Set the target frame rate (frames per second).
    pub fn frame_rate(mut self, fps: u64) -> Self {
        self.frame_rate = fps.max(1);
        self
    }

    /// Set how many lines each feed log keeps.
    pub fn scrollback(mut self, lines: usize) -> Self {
        self.state = DashboardState::new(lines);
        self
    }

    /// Run the TUI event loop.
    ///
    /// Blocks until the user presses a quit key.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.frame_rate);
        let mut last_tick = Instant::now();

        loop {
            // Draw current state
            terminal.draw(|f| self.draw(f))?;

            // Handle input with timeout
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code, key.modifiers)
            {
                info!("quit requested");
                return Ok(());
            }

            // Update state from channel (non-blocking)
            if last_tick.elapsed() >= tick_rate {
                self.poll_updates();
                last_tick = Instant::now();
            }
        }
    }

    /// Handle keyboard input. Returns true if should quit.
    fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Up => {
                self.table_scroll = self.table_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let rows = self.state.table.as_ref().map_or(0, |t| t.rows.len());
                self.table_scroll = (self.table_scroll + 1).min(rows.saturating_sub(1));
            }
            _ => {}
        }
        false
    }

    /// Apply every update currently in the channel (non-blocking).
    fn poll_updates(&mut self) {
        for update in self.receiver.try_iter() {
            self.state.apply(update);
        }
    }

    /// Draw the UI.
    fn draw(&self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Grid
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());
        let grid = main_chunks[0];

        frame.render_widget(ClockPanel::new(&self.state.clock), grid_cell(grid, 0, 0, 1, 6));
        frame.render_widget(WorldMap::new(&self.state.markers), grid_cell(grid, 1, 0, 3, 6));

        let dead_cured = SeriesChart::new("Dead/Cured")
            .series(Metric::Dead, self.state.series(Metric::Dead))
            .series(Metric::Cured, self.state.series(Metric::Cured));
        frame.render_widget(dead_cured, grid_cell(grid, 0, 6, 3, 3));

        let confirmed_suspected = SeriesChart::new("Confirmed/Suspected")
            .series(Metric::Serious, self.state.series(Metric::Serious))
            .series(Metric::Confirmed, self.state.series(Metric::Confirmed))
            .series(Metric::Suspected, self.state.series(Metric::Suspected));
        frame.render_widget(confirmed_suspected, grid_cell(grid, 0, 9, 3, 3));

        frame.render_widget(
            CompositionGauge::new(self.state.composition),
            grid_cell(grid, 3, 6, 1, 6),
        );
        frame.render_widget(FeedPanel::new("News", &self.state.news), grid_cell(grid, 4, 0, 2, 4));
        frame.render_widget(
            FeedPanel::new("Rumors", &self.state.rumors),
            grid_cell(grid, 4, 4, 2, 4),
        );
        frame.render_widget(
            RegionTable::new(self.state.table.as_ref()).scroll_offset(self.table_scroll),
            grid_cell(grid, 4, 8, 2, 4),
        );

        self.draw_footer(frame, main_chunks[1]);
    }

    /// Draw the footer bar.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit  │ "),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Regions  │ "),
            Span::raw(format!(
                "news {}  rumors {}",
                self.state.news_received, self.state.rumors_received
            )),
        ]))
        .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use types::MapPoint;

    #[test]
    fn test_grid_cells_tile_the_area() {
        let area = Rect::new(0, 0, 120, 60);
        assert_eq!(grid_cell(area, 0, 0, 1, 6), Rect::new(0, 0, 60, 10));
        assert_eq!(grid_cell(area, 4, 8, 2, 4), Rect::new(80, 40, 40, 20));

        // Uneven sizes: neighbours share an edge
        let area = Rect::new(3, 2, 101, 37);
        let left = grid_cell(area, 4, 0, 2, 4);
        let middle = grid_cell(area, 4, 4, 2, 4);
        let right = grid_cell(area, 4, 8, 2, 4);
        assert_eq!(left.right(), middle.x);
        assert_eq!(middle.right(), right.x);
        assert_eq!(right.right(), area.right());
        assert_eq!(right.bottom(), area.bottom());
    }

    #[test]
    fn test_quit_keys() {
        let (_tx, rx) = crossbeam_channel::unbounded();
        let mut app = TuiApp::new(rx);
        assert!(app.handle_key_event(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.handle_key_event(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.handle_key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.handle_key_event(KeyCode::Char('c'), KeyModifiers::NONE));
    }

    #[test]
    fn test_poll_updates_drains_channel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = TuiApp::new(rx);
        tx.send(DashUpdate::Clock("08:00:00".into())).unwrap();
        tx.send(DashUpdate::AddMarker(MapPoint::new(0.0, 0.0))).unwrap();
        app.poll_updates();
        assert_eq!(app.state.clock, "08:00:00");
        assert_eq!(app.state.markers.len(), 1);
        assert!(app.receiver.is_empty());
    }

    #[test]
    fn test_table_scroll_bounded() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = TuiApp::new(rx);
        tx.send(DashUpdate::Table {
            headers: vec!["Region".into()],
            rows: vec![vec!["a".into()], vec!["b".into()]],
        })
        .unwrap();
        app.poll_updates();
        for _ in 0..5 {
            app.handle_key_event(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(app.table_scroll, 1);
        app.handle_key_event(KeyCode::Up, KeyModifiers::NONE);
        app.handle_key_event(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.table_scroll, 0);
    }

    #[test]
    fn test_draw_full_frame() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut app = TuiApp::new(rx);
        tx.send(DashUpdate::Clock("23:59:59".into())).unwrap();
        app.poll_updates();

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("23:59:59"));
        assert!(text.contains("Rumors"));
        assert!(text.contains("Regions"));
    }
}
