pub mod file;
pub mod relay;

use crate::core::config::SourceConfig;
use crate::core::source::RateSource;
use anyhow::Result;
use std::sync::Arc;

/// Builds the rate source selected in the configuration.
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn RateSource>> {
    let source: Arc<dyn RateSource> = match config {
        SourceConfig::Relay(relay) => Arc::new(relay::RelayRateSource::from_config(relay)?),
        SourceConfig::File(file) => Arc::new(file::FileRateSource::new(&file.path)),
    };
    Ok(source)
}
