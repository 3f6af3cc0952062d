//! Fetch error taxonomy.

use crate::endpoint::Endpoint;

/// Failure of the underlying HTTP call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Why a dataset could not be fetched.
///
/// Every variant names the endpoint so that a logged failure is
/// self-describing.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure (connection, TLS, non-2xx status, body read).
    #[error("network error fetching {endpoint}: {source}")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: TransportError,
    },

    /// Body is not JSON or does not match the expected shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope reported `success: false`.
    #[error("{endpoint} endpoint reported failure")]
    ApiFailure { endpoint: Endpoint },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Decode { endpoint, .. }
            | FetchError::ApiFailure { endpoint } => *endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::Network {
            endpoint: Endpoint::News,
            source: TransportError::new("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "network error fetching news: connection refused"
        );
        let err = FetchError::ApiFailure {
            endpoint: Endpoint::Rumors,
        };
        assert_eq!(err.to_string(), "rumors endpoint reported failure");
        assert_eq!(err.endpoint(), Endpoint::Rumors);
    }
}
