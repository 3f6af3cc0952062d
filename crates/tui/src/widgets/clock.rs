//! Clock panel widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Local time display.
pub struct ClockPanel<'a> {
    text: &'a str,
}

impl<'a> ClockPanel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for ClockPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Local Time")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let inner = block.inner(area);
        block.render(area, buf);

        // Vertically center the single line
        let top = inner.y + inner.height.saturating_sub(1) / 2;
        let line_area = Rect::new(inner.x, top, inner.width, inner.height.min(1));

        Paragraph::new(self.text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .render(line_area, buf);
    }
}
