use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

use crate::core::rates::RawRateRow;
use crate::core::source::{FetchError, RateSource};

/// Reads rate rows from a local file, once per call.
///
/// `.csv` files are treated as a sheet export: the first row is a header and
/// the columns are positional (pair code, buy, sell). Anything else is read as
/// the relay's JSON payload.
pub struct FileRateSource {
    path: PathBuf,
}

impl FileRateSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileRateSource {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn is_csv(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    }
}

fn parse_sheet_export(text: &str) -> Result<Vec<RawRateRow>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| FetchError::malformed(format!("Failed to parse CSV row: {e}")))?;
        let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
        rows.push(RawRateRow {
            pair_code: cell(0),
            buy: cell(1),
            sell: cell(2),
        });
    }

    if rows.is_empty() {
        return Err(FetchError::malformed("No data found below the header row"));
    }
    Ok(rows)
}

#[async_trait]
impl RateSource for FileRateSource {
    #[instrument(name = "FileFetch", skip(self), fields(path = %self.path.display()))]
    async fn fetch_rows(&self) -> Result<Vec<RawRateRow>, FetchError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FetchError::transport(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let rows = if self.is_csv() {
            parse_sheet_export(&text)?
        } else {
            RawRateRow::parse_payload(&text)?
        };
        debug!(rows = rows.len(), "Read rate rows");
        Ok(rows)
    }
}
