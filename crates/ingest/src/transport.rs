//! HTTP transport seam.

use std::future::Future;
use std::time::Duration;

use crate::error::TransportError;

/// Default per-request timeout for [`HttpTransport`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Issues a GET and returns the response body.
///
/// Implementations must not block the calling task; blocking clients
/// belong on the runtime's blocking pool.
pub trait Transport: Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, TransportError>> + Send;
}

/// Production transport backed by a blocking `ureq` agent.
#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || blocking_get(&agent, &url))
            .await
            .map_err(|e| TransportError::new(format!("request task failed: {e}")))?
    }
}

fn blocking_get(agent: &ureq::Agent, url: &str) -> Result<String, TransportError> {
    match agent.get(url).call() {
        Ok(response) => response
            .into_string()
            .map_err(|e| TransportError::new(format!("failed to read body: {e}"))),
        Err(ureq::Error::Status(code, _)) => {
            Err(TransportError::new(format!("HTTP status {code}")))
        }
        Err(e) => Err(TransportError::new(e.to_string())),
    }
}
