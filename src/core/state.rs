use crate::core::rates::RateBoard;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Lifecycle of one acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchState {
    Loading,
    Error { message: String },
    Ready { records: RateBoard },
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// `Ready` and `Error` end an attempt.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn board(&self) -> Option<&RateBoard> {
        match self {
            FetchState::Ready { records } => Some(records),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error { message } => Some(message),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            FetchState::Loading => "loading",
            FetchState::Error { .. } => "error",
            FetchState::Ready { .. } => "ready",
        }
    }
}

/// Shared holder of the current [`FetchState`]. Every write replaces the whole
/// state, so readers never see a partially built board. Concurrent writers
/// are not ordered; the last write wins.
#[derive(Clone)]
pub struct StateCell {
    inner: Arc<Mutex<FetchState>>,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FetchState::Loading)),
        }
    }

    pub async fn get(&self) -> FetchState {
        self.inner.lock().await.clone()
    }

    pub async fn set(&self, state: FetchState) {
        let mut current = self.inner.lock().await;
        debug!(from = current.name(), to = state.name(), "State change");
        *current = state;
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::icons::IconMap;
    use crate::core::rates::{RawRateRow, normalize};

    #[tokio::test]
    async fn test_cell_starts_loading() {
        let cell = StateCell::new();
        let state = cell.get().await;
        assert!(state.is_loading());
        assert!(!state.is_terminal());
        assert!(state.board().is_none());
        assert!(state.error_message().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_state() {
        let cell = StateCell::new();
        let observer = cell.clone();

        cell.set(FetchState::Error {
            message: "Failed to fetch data".to_string(),
        })
        .await;
        let state = observer.get().await;
        assert_eq!(state.error_message(), Some("Failed to fetch data"));
        assert!(state.board().is_none());

        let board = normalize(
            &[RawRateRow::new("USD-KES", "129.0", "132.0")],
            &IconMap::default(),
        );
        cell.set(FetchState::Ready { records: board }).await;
        let state = observer.get().await;
        assert!(state.is_terminal());
        assert!(state.error_message().is_none());
        assert_eq!(state.board().map(|b| b.len()), Some(9));
    }

    #[test]
    fn test_state_json_shape() {
        let loading = serde_json::to_value(FetchState::Loading).unwrap();
        assert_eq!(loading, serde_json::json!({"status": "loading"}));

        let error = serde_json::to_value(FetchState::Error {
            message: "Failed to fetch data".to_string(),
        })
        .unwrap();
        assert_eq!(
            error,
            serde_json::json!({"status": "error", "message": "Failed to fetch data"})
        );

        let board = normalize(&[], &IconMap::default());
        let ready = serde_json::to_value(FetchState::Ready { records: board }).unwrap();
        assert_eq!(ready["status"], "ready");
        assert_eq!(ready["records"].as_array().unwrap().len(), 9);
    }
}
