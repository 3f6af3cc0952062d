//! Region table widget - displays regions ranked by confirmed cases.
//!
//! Rows arrive as strings; this widget owns column alignment. The first
//! column is left-aligned, numeric columns are right-aligned.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::state::TableData;

/// Width of each numeric column.
const NUMBER_WIDTH: u16 = 10;

/// Ranked region table.
pub struct RegionTable<'a> {
    /// Table contents, `None` until the region fetch succeeds.
    data: Option<&'a TableData>,
    /// First row to show.
    scroll_offset: usize,
}

impl<'a> RegionTable<'a> {
    pub fn new(data: Option<&'a TableData>) -> Self {
        Self {
            data,
            scroll_offset: 0,
        }
    }

    /// Set the scroll offset.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }
}

fn aligned(text: &str, column: usize) -> Cell<'_> {
    let alignment = if column == 0 {
        Alignment::Left
    } else {
        Alignment::Right
    };
    Cell::from(Line::from(text).alignment(alignment))
}

impl Widget for RegionTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Regions")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        let Some(data) = self.data else {
            block
                .border_style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        };

        let header_cells = data
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| aligned(h, i).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().fg(Color::Yellow))
            .height(1);

        let rows = data.rows.iter().skip(self.scroll_offset).map(|row| {
            Row::new(
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| aligned(cell, i)),
            )
        });

        let columns = data.headers.len().max(1);
        let widths = std::iter::once(Constraint::Min(8)).chain(
            std::iter::repeat(Constraint::Length(NUMBER_WIDTH)).take(columns - 1),
        );

        let table = Table::new(rows, widths).header(header).block(block);

        // Render the table using the Widget trait
        Widget::render(table, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;

    fn table() -> TableData {
        TableData {
            headers: ["Region", "Confirmed", "Cured", "Dead"]
                .map(String::from)
                .to_vec(),
            rows: vec![
                vec!["Hubei".into(), "27100".into(), "1440".into(), "780".into()],
                vec!["Guangdong".into(), "1131".into(), "148".into(), "1".into()],
            ],
        }
    }

    #[test]
    fn test_region_table_empty() {
        let widget = RegionTable::new(None);
        let area = Rect::new(0, 0, 60, 15);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Regions"));
    }

    #[test]
    fn test_region_table_with_data() {
        let data = table();
        let widget = RegionTable::new(Some(&data));
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Hubei"));
        assert!(text.contains("27100"));
    }

    #[test]
    fn test_region_table_scroll() {
        let data = table();
        let widget = RegionTable::new(Some(&data)).scroll_offset(1);
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(!text.contains("Hubei"));
        assert!(text.contains("Guangdong"));
    }
}
