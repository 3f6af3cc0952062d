//! Integration tests: fetch canned API bodies, then shape them for display.

use std::sync::Mutex;

use ingest::{Endpoint, Fetcher, Transport, TransportError, aggregate, composition, rank};
use types::Metric;

/// Returns one body for every request and remembers the URLs asked for.
struct Recorder {
    body: String,
    urls: Mutex<Vec<String>>,
}

impl Recorder {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            urls: Mutex::new(Vec::new()),
        }
    }
}

impl Transport for Recorder {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

#[tokio::test]
async fn test_overall_history_to_daily_series() {
    // Three days, two snapshots on the middle one, delivered newest first
    let body = r#"{"success": true, "results": [
        {"deadCount": 361, "curedCount": 475, "confirmedCount": 17205, "suspectedCount": 21558,
         "seriousCount": 2296, "updateTime": 1580720400000},
        {"deadCount": 304, "curedCount": 328, "confirmedCount": 14380, "suspectedCount": 19544,
         "seriousCount": 2110, "updateTime": 1580634000000},
        {"deadCount": 259, "curedCount": 243, "confirmedCount": 11791, "suspectedCount": 17988,
         "seriousCount": 1795, "updateTime": 1580605200000},
        {"deadCount": 213, "curedCount": 171, "confirmedCount": 9809, "suspectedCount": 15238,
         "updateTime": 1580547600000}
    ]}"#;
    let fetcher = Fetcher::new(Recorder::new(body), "https://example.org/api/");

    let records = fetcher.overall_history().await.unwrap();
    assert_eq!(records.len(), 4);

    let series = aggregate(&records);
    assert_eq!(series.len(), 3);
    assert_eq!(series.get(Metric::Dead).labels, vec!["2-1", "2-2", "2-3"]);
    assert_eq!(series.get(Metric::Confirmed).values, vec![9809, 14380, 17205]);
    assert_eq!(series.get(Metric::Serious).values, vec![0, 2110, 2296]);

    let latest = records.iter().max_by_key(|r| r.update_time).unwrap();
    let shares = composition(latest).unwrap();
    assert!(shares.active_pct > 90.0);
}

#[tokio::test]
async fn test_region_snapshot_to_ranking() {
    let body = r#"{"success": true, "results": [
        {"provinceShortName": "Guangdong", "deadCount": 0, "curedCount": 11, "confirmedCount": 683,
         "suspectedCount": 0, "updateTime": 1580720400000},
        {"provinceShortName": "Hubei", "deadCount": 350, "curedCount": 295, "confirmedCount": 11177,
         "suspectedCount": 0, "updateTime": 1580720400000},
        {"provinceShortName": "Zhejiang", "deadCount": 0, "curedCount": 21, "confirmedCount": 683,
         "suspectedCount": 0, "updateTime": 1580720400000}
    ]}"#;
    let recorder = Recorder::new(body);
    let fetcher = Fetcher::new(recorder, "https://example.org/api");

    let rows = rank(&fetcher.regions().await.unwrap());
    let order: Vec<&str> = rows.iter().map(|r| r.region_label.as_str()).collect();
    // Equal counts keep fetch order
    assert_eq!(order, vec!["Hubei", "Guangdong", "Zhejiang"]);
}

#[tokio::test]
async fn test_endpoint_urls() {
    let fetcher = Fetcher::new(
        Recorder::new(r#"{"success": true, "results": []}"#),
        "https://example.org/api/",
    );
    fetcher.overall_history().await.unwrap();
    fetcher.regions().await.unwrap();
    fetcher.news().await.unwrap();
    fetcher.rumors().await.unwrap();

    let expected: Vec<String> = [
        Endpoint::Overall,
        Endpoint::Region,
        Endpoint::News,
        Endpoint::Rumors,
    ]
    .iter()
    .map(|e| format!("https://example.org/api{}", e.path()))
    .collect();
    assert_eq!(*fetcher.transport().urls.lock().unwrap(), expected);
}
