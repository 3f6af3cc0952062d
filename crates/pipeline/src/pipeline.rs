//! The dashboard's data paths.
//!
//! Every path fetches at most once, feeds the sink, and either finishes or
//! keeps ticking. A failure in one path never touches another: each runs as
//! its own task and reports its own error.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use futures::StreamExt;
use ingest::{Endpoint, FetchError, Fetcher, Transport, aggregate, composition, rank};
use pacing::{MarkerAction, MarkerBlink, periodic, replay};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use tui::{DashboardSink, LogTarget};
use types::FeedItem;

use crate::config::PipelineConfig;
use crate::format::{clock_text, feed_lines, table_headers, table_rows};

/// Data pipeline feeding one dashboard sink.
pub struct Pipeline<T, S> {
    fetcher: Arc<Fetcher<T>>,
    sink: S,
    config: Arc<PipelineConfig>,
}

impl<T, S: Clone> Clone for Pipeline<T, S> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            sink: self.sink.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: Transport, S: DashboardSink + Clone> Pipeline<T, S> {
    pub fn new(transport: T, sink: S, config: PipelineConfig) -> Self {
        Self {
            fetcher: Arc::new(Fetcher::new(transport, config.api_base.clone())),
            sink,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch the overall history and draw both charts and the gauge.
    ///
    /// Returns the number of days charted.
    pub async fn load_charts(&self) -> Result<usize, FetchError> {
        let records = self.fetcher.overall_history().await?;
        let series = aggregate(&records);
        for (metric, daily) in series.iter() {
            self.sink
                .set_series(metric, daily.labels.clone(), daily.values.clone());
        }

        if let Some(latest) = records.iter().max_by_key(|r| r.update_time)
            && let Some(shares) = composition(latest)
        {
            self.sink.set_composition(shares);
        }

        info!(days = series.len(), records = records.len(), "charts loaded");
        Ok(series.len())
    }

    /// Fetch the per-region snapshot and fill the table.
    ///
    /// Returns the number of rows.
    pub async fn load_regions(&self) -> Result<usize, FetchError> {
        let records = self.fetcher.regions().await?;
        let rows = table_rows(&rank(&records));
        let count = rows.len();
        self.sink.set_table(table_headers(), rows);
        info!(rows = count, "region table loaded");
        Ok(count)
    }

    /// Fetch the news and reveal one item per news period.
    ///
    /// Returns the number of items shown.
    pub async fn stream_news(&self) -> Result<usize, FetchError> {
        let items = self.fetcher.news().await?;
        Ok(self
            .play_feed(items, self.config.news_period, LogTarget::News)
            .await)
    }

    /// Fetch the rumors and reveal one item per rumor period.
    ///
    /// Returns the number of items shown.
    pub async fn stream_rumors(&self) -> Result<usize, FetchError> {
        let items = self.fetcher.rumors().await?;
        Ok(self
            .play_feed(items, self.config.rumor_period, LogTarget::Rumors)
            .await)
    }

    async fn play_feed<I: Into<FeedItem>>(
        &self,
        items: Vec<I>,
        period: Duration,
        target: LogTarget,
    ) -> usize {
        let mut feed = replay(items, period);
        let mut shown = 0;
        while let Some(item) = feed.next().await {
            for line in feed_lines(&item.into()) {
                self.sink.append_log(target, line);
            }
            shown += 1;
        }
        debug!(?target, shown, "feed finished");
        shown
    }

    /// Show the local time now and once per clock period. Never returns.
    pub async fn run_clock(&self) {
        let mut ticker = periodic(self.config.clock_period);
        loop {
            self.sink.set_clock(clock_text(&Local::now()));
            ticker.tick().await;
        }
    }

    /// Blink the configured markers, starting one period from now. Never returns.
    pub async fn run_markers(&self) {
        let mut blink = MarkerBlink::new();
        let mut ticker = periodic(self.config.marker_period);
        loop {
            ticker.tick().await;
            match blink.tick() {
                MarkerAction::Show => {
                    for point in &self.config.markers {
                        self.sink.add_marker(*point);
                    }
                }
                MarkerAction::Clear => self.sink.clear_markers(),
            }
        }
    }

    /// Run every path concurrently until all of them finish.
    ///
    /// The clock and markers never finish, so this runs until the future is
    /// dropped, which aborts every task.
    pub async fn run(self) {
        let mut tasks = JoinSet::new();

        let p = self.clone();
        tasks.spawn(async move { report(Endpoint::Overall, p.load_charts().await) });
        let p = self.clone();
        tasks.spawn(async move { report(Endpoint::Region, p.load_regions().await) });
        let p = self.clone();
        tasks.spawn(async move { report(Endpoint::News, p.stream_news().await) });
        let p = self.clone();
        tasks.spawn(async move { report(Endpoint::Rumors, p.stream_rumors().await) });
        let p = self.clone();
        tasks.spawn(async move { p.run_clock().await });
        let p = self.clone();
        tasks.spawn(async move { p.run_markers().await });

        info!(api_base = %self.fetcher.base_url(), "pipeline started");

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "pipeline task ended abnormally");
            }
        }
    }
}

/// Log the outcome of one data path.
fn report(endpoint: Endpoint, result: Result<usize, FetchError>) {
    match result {
        Ok(count) => debug!(%endpoint, count, "data path done"),
        Err(e) => warn!(%endpoint, error = %e, "data path failed; widget left empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingest::TransportError;
    use tui::{DashUpdate, RecordingSink};
    use types::MapPoint;

    struct Offline;

    impl Transport for Offline {
        async fn get(&self, _url: &str) -> Result<String, TransportError> {
            Err(TransportError::new("offline"))
        }
    }

    fn pipeline(config: PipelineConfig) -> (Pipeline<Offline, RecordingSink>, RecordingSink) {
        let sink = RecordingSink::new();
        (Pipeline::new(Offline, sink.clone(), config), sink)
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_shows_immediately_then_every_period() {
        let (p, sink) = pipeline(PipelineConfig::default());
        let _ = tokio::time::timeout(Duration::from_millis(2500), p.run_clock()).await;

        let clocks = sink
            .updates()
            .into_iter()
            .filter(|u| matches!(u, DashUpdate::Clock(_)))
            .count();
        // t = 0, 1 s, 2 s
        assert_eq!(clocks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_markers_blink() {
        let a = MapPoint::new(1.0, 2.0);
        let b = MapPoint::new(3.0, 4.0);
        let config = PipelineConfig::default().with_markers(vec![a, b]);
        let (p, sink) = pipeline(config);

        // Nothing before the first period
        let _ = tokio::time::timeout(Duration::from_millis(1400), p.run_markers()).await;
        assert!(sink.take().is_empty());

        // A fresh run: show after 1.5 s, clear after 3.0 s, show after 4.5 s
        let _ = tokio::time::timeout(Duration::from_millis(4600), p.run_markers()).await;
        assert_eq!(
            sink.updates(),
            vec![
                DashUpdate::AddMarker(a),
                DashUpdate::AddMarker(b),
                DashUpdate::ClearMarkers,
                DashUpdate::AddMarker(a),
                DashUpdate::AddMarker(b),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_error_and_draws_nothing() {
        let (p, sink) = pipeline(PipelineConfig::default());
        let err = p.load_charts().await.unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::Overall);
        let err = p.stream_news().await.unwrap_err();
        assert_eq!(err.endpoint(), Endpoint::News);
        assert!(sink.updates().is_empty());
    }
}
