//! Presentation of feed items, clock text and table rows.

use chrono::{DateTime, Local, TimeZone};
use tui::{LogLine, Tone};
use types::{EpochMillis, FeedItem, NewsItem, RankedRow, RumorItem};

/// Shown when a publish time cannot be represented.
const UNKNOWN_TIME: &str = "--";

/// `[MM-dd HH:mm:ss][source]title`, timestamp in local time.
pub fn news_line(item: &NewsItem) -> LogLine {
    news_line_in(item, &Local)
}

/// [`news_line`] with the timestamp rendered in `tz`.
pub fn news_line_in<Tz: TimeZone>(item: &NewsItem, tz: &Tz) -> LogLine
where
    Tz::Offset: std::fmt::Display,
{
    LogLine::new()
        .push(Tone::Plain, "[")
        .push(Tone::Timestamp, publish_stamp(item.publish_time, tz))
        .push(Tone::Plain, "][")
        .push(Tone::Source, item.source.as_str())
        .push(Tone::Plain, "]")
        .push(Tone::Plain, item.title.as_str())
}

fn publish_stamp<Tz: TimeZone>(millis: EpochMillis, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.with_timezone(tz).format("%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// A rumor takes two lines: the question, then its answer.
pub fn rumor_lines(item: &RumorItem) -> [LogLine; 2] {
    [
        LogLine::new().push(Tone::Question, format!("┏ {}", item.title)),
        LogLine::new().push(Tone::Answer, format!("┗ {}", item.summary)),
    ]
}

/// Log lines for any feed item.
pub fn feed_lines(item: &FeedItem) -> Vec<LogLine> {
    match item {
        FeedItem::News(news) => vec![news_line(news)],
        FeedItem::Rumor(rumor) => rumor_lines(rumor).to_vec(),
    }
}

/// `HH:MM:SS`, 24-hour.
pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Table header row.
pub fn table_headers() -> Vec<String> {
    ingest::TABLE_HEADERS.iter().map(|h| h.to_string()).collect()
}

/// Stringify ranked rows; alignment is left to the table widget.
pub fn table_rows(rows: &[RankedRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.region_label.clone(),
                row.confirmed.to_string(),
                row.cured.to_string(),
                row.dead.to_string(),
            ]
        })
        .collect()
}
