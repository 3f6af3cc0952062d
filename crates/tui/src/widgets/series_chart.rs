//! Series chart widget - displays daily metric series as line graphs.
//!
//! Several metrics share one chart. The X axis is the day index, labelled
//! with the first, middle and last day labels; the Y axis starts at zero
//! because counts are cumulative.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

use types::Metric;

use crate::state::SeriesData;

/// Line color of each metric.
pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Dead => Color::Red,
        Metric::Cured => Color::Yellow,
        Metric::Confirmed => Color::Red,
        Metric::Suspected => Color::Yellow,
        Metric::Serious => Color::Blue,
    }
}

/// Multi-series line chart.
pub struct SeriesChart<'a> {
    /// Chart title.
    title: &'a str,
    /// Metrics in legend order; absent metrics are skipped.
    lines: Vec<(Metric, &'a SeriesData)>,
}

impl<'a> SeriesChart<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    /// Add a metric's series, if it has arrived.
    pub fn series(mut self, metric: Metric, data: Option<&'a SeriesData>) -> Self {
        if let Some(data) = data {
            self.lines.push((metric, data));
        }
        self
    }
}

impl Widget for SeriesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<_> = self
            .lines
            .iter()
            .filter(|(_, data)| !data.values.is_empty())
            .collect();

        if lines.is_empty() {
            let block = Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            block.render(area, buf);
            return;
        }

        let max_value = lines
            .iter()
            .flat_map(|(_, data)| data.values.iter())
            .copied()
            .max()
            .unwrap_or(0) as f64;
        // 10% headroom, and never a zero-height axis
        let y_max = (max_value * 1.1).max(1.0);

        // Labels from the longest series; all series normally share them
        let labels: &[String] = lines
            .iter()
            .map(|(_, data)| data.labels.as_slice())
            .max_by_key(|l| l.len())
            .unwrap_or(&[]);
        let x_max = labels.len().saturating_sub(1) as f64;

        // Build datasets with owned data
        let data_vecs: Vec<Vec<(f64, f64)>> = lines
            .iter()
            .map(|(_, data)| {
                data.values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (i as f64, v as f64))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = lines
            .iter()
            .zip(data_vecs.iter())
            .map(|((metric, _), data)| {
                Dataset::default()
                    .name(metric.title())
                    .marker(Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(metric_color(*metric)))
                    .data(data)
            })
            .collect();

        let x_labels: Vec<Line> = match labels {
            [] => vec![],
            [only] => vec![Line::from(only.as_str())],
            [first, .., last] => vec![
                Line::from(first.as_str()),
                Line::from(labels[labels.len() / 2].as_str()),
                Line::from(last.as_str()),
            ],
        };

        let y_labels: Vec<Line> = vec![
            Line::from("0"),
            Line::from(format!("{:.0}", y_max / 2.0)),
            Line::from(format!("{:.0}", y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White)),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max.max(1.0)])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}
