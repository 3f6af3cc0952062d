//! World map widget - displays the world outline with point markers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Map, MapResolution},
    },
};

use types::MapPoint;

/// Marker glyph drawn at each point.
const MARKER: &str = "X";

/// World map with markers.
pub struct WorldMap<'a> {
    markers: &'a [MapPoint],
}

impl<'a> WorldMap<'a> {
    pub fn new(markers: &'a [MapPoint]) -> Self {
        Self { markers }
    }
}

impl Widget for WorldMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let markers = self.markers;
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title("World Map")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .x_bounds([-180.0, 180.0])
            .y_bounds([-90.0, 90.0])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    resolution: MapResolution::High,
                    color: Color::Green,
                });
                // Markers above the outline
                ctx.layer();
                for point in markers {
                    ctx.print(
                        point.lon,
                        point.lat,
                        Span::styled(
                            MARKER,
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            });
        canvas.render(area, buf);
    }
}
