//! Composition gauge widget - stacked bar of dead, cured and active shares.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use types::Composition;

/// Split `width` columns proportionally to `percents`.
///
/// The last segment absorbs rounding so the widths always sum to `width`.
fn segment_widths(percents: [f64; 3], width: u16) -> [u16; 3] {
    let mut widths = [0u16; 3];
    let mut used = 0u16;
    for i in 0..2 {
        let w = ((percents[i] / 100.0) * width as f64).round() as u16;
        widths[i] = w.min(width - used);
        used += widths[i];
    }
    widths[2] = width - used;
    widths
}

/// Centered label padded to `width`, or blanks if it does not fit.
fn fill(label: &str, width: u16) -> String {
    let width = width as usize;
    if label.chars().count() <= width {
        format!("{label:^width$}")
    } else {
        " ".repeat(width)
    }
}

/// Stacked gauge of the latest case composition.
pub struct CompositionGauge {
    composition: Option<Composition>,
}

impl CompositionGauge {
    pub fn new(composition: Option<Composition>) -> Self {
        Self { composition }
    }
}

impl Widget for CompositionGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Dead / Cured / Active")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        let Some(c) = self.composition else {
            block
                .border_style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        };

        let inner = block.inner(area);
        let percents = [c.dead_pct, c.cured_pct, c.active_pct];
        let colors = [Color::Red, Color::Green, Color::Cyan];
        let widths = segment_widths(percents, inner.width);

        let spans: Vec<Span> = (0..3)
            .map(|i| {
                Span::styled(
                    fill(&format!("{:.0}%", percents[i]), widths[i]),
                    Style::default().fg(Color::Black).bg(colors[i]),
                )
            })
            .collect();

        let top = inner.height.saturating_sub(1) / 2;
        let mut lines = vec![Line::default(); top as usize];
        lines.push(Line::from(spans));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn test_segment_widths_sum_to_width() {
        assert_eq!(segment_widths([3.0, 57.0, 40.0], 100), [3, 57, 40]);
        let widths = segment_widths([33.4, 33.3, 33.3], 10);
        assert_eq!(widths.iter().sum::<u16>(), 10);
        assert_eq!(segment_widths([50.0, 50.0, 0.0], 0), [0, 0, 0]);
    }

    #[test]
    fn test_fill() {
        assert_eq!(fill("3%", 6), "  3%  ");
        assert_eq!(fill("57%", 2), "  ");
    }

    #[test]
    fn test_gauge_renders_shares() {
        let gauge = CompositionGauge::new(Some(Composition {
            dead_pct: 3.0,
            cured_pct: 57.0,
            active_pct: 40.0,
        }));
        let area = Rect::new(0, 0, 62, 3);
        let mut buf = Buffer::empty(area);
        gauge.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("57%"));
        assert!(text.contains("40%"));
    }

    #[test]
    fn test_gauge_without_data() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        CompositionGauge::new(None).render(area, &mut buf);
        // Should not panic
    }
}
