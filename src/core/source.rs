//! Rate source abstraction

use crate::core::rates::RawRateRow;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single read from a rate source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// The source answered but the body is not a sequence of rate rows.
    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },
}

impl FetchError {
    pub fn transport(reason: impl Into<String>) -> Self {
        FetchError::Transport {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        FetchError::MalformedPayload {
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FetchError::MalformedPayload { .. })
    }
}

/// A tabular store of `(Currency, BUY, SELL)` rows.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Performs exactly one read against the underlying store.
    async fn fetch_rows(&self) -> Result<Vec<RawRateRow>, FetchError>;
}
