//! Feed panel widget - displays the newest lines of a paced feed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::FeedLog;
use crate::widgets::{LogLine, Tone};

/// Style of each tone.
fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::default(),
        Tone::Timestamp | Tone::Question => Style::default().fg(Color::Yellow),
        Tone::Source | Tone::Answer => Style::default().fg(Color::Green),
    }
}

fn to_line(line: &LogLine) -> Line<'_> {
    Line::from(
        line.segments
            .iter()
            .map(|s| Span::styled(s.text.as_str(), tone_style(s.tone)))
            .collect::<Vec<_>>(),
    )
}

/// Tail view of a [`FeedLog`]; the newest line sits at the bottom.
pub struct FeedPanel<'a> {
    title: &'a str,
    log: &'a FeedLog,
}

impl<'a> FeedPanel<'a> {
    pub fn new(title: &'a str, log: &'a FeedLog) -> Self {
        Self { title, log }
    }
}

impl Widget for FeedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));
        let visible = block.inner(area).height as usize;

        let lines: Vec<Line> = self.log.tail(visible).map(to_line).collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
