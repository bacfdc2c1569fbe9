//! Drives one acquisition attempt from the rate source into the shared state.

use crate::core::icons::IconMap;
use crate::core::rates::{RawRateRow, normalize};
use crate::core::source::{FetchError, RateSource};
use crate::core::state::{FetchState, StateCell};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Message shown to viewers whenever an attempt fails. Details go to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data";

pub struct FetchController {
    source: Arc<dyn RateSource>,
    icons: IconMap,
    timeout: Duration,
    cell: StateCell,
}

impl FetchController {
    pub fn new(source: Arc<dyn RateSource>, timeout: Duration) -> Self {
        FetchController {
            source,
            icons: IconMap::default(),
            timeout,
            cell: StateCell::new(),
        }
    }

    pub fn with_icons(mut self, icons: IconMap) -> Self {
        self.icons = icons;
        self
    }

    /// Publishes into a cell owned by the caller instead of a private one.
    pub fn with_cell(mut self, cell: StateCell) -> Self {
        self.cell = cell;
        self
    }

    pub fn cell(&self) -> StateCell {
        self.cell.clone()
    }

    pub async fn state(&self) -> FetchState {
        self.cell.get().await
    }

    /// Runs one attempt: publishes `Loading`, performs a single bounded read,
    /// then publishes and returns either `Ready` or `Error`. Faults never
    /// escape; they become the `Error` state.
    #[instrument(name = "Acquire", skip(self))]
    pub async fn acquire(&self) -> FetchState {
        self.cell.set(FetchState::Loading).await;

        let state = match self.read_rows().await {
            Ok(rows) => {
                let board = normalize(&rows, &self.icons);
                let missing = board.missing();
                if !missing.is_empty() {
                    debug!(?missing, "Pairs without a rate row");
                }
                info!(
                    rows = rows.len(),
                    filled = board.len() - missing.len(),
                    "Rates ready"
                );
                FetchState::Ready { records: board }
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch rates");
                FetchState::Error {
                    message: FETCH_ERROR_MESSAGE.to_string(),
                }
            }
        };

        self.cell.set(state.clone()).await;
        state
    }

    /// Starts a fresh attempt. There is no automatic retry; callers decide
    /// when to refresh.
    pub async fn refresh(&self) -> FetchState {
        self.acquire().await
    }

    async fn read_rows(&self) -> Result<Vec<RawRateRow>, FetchError> {
        tokio::time::timeout(self.timeout, self.source.fetch_rows())
            .await
            .map_err(|_| {
                FetchError::transport(format!("No response within {:?}", self.timeout))
            })?
    }
}
