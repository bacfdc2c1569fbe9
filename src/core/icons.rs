//! Icon lookup for currency pairs

use crate::core::config::IconsConfig;
use crate::core::pair::CurrencyPair;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, warn};

const DEFAULT_ICON: &str = "image-9.png";

/// Opaque reference to an icon asset. The board never inspects it; it is
/// handed through to whatever renders the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(String);

impl IconHandle {
    pub fn new(reference: impl Into<String>) -> Self {
        IconHandle(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for IconHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Table from pair code to icon, with a single fallback entry for codes the
/// table does not know.
#[derive(Debug, Clone)]
pub struct IconMap {
    table: HashMap<String, IconHandle>,
    default: IconHandle,
}

impl IconMap {
    pub fn lookup(&self, code: &str) -> &IconHandle {
        self.table.get(code).unwrap_or(&self.default)
    }

    pub fn default_icon(&self) -> &IconHandle {
        &self.default
    }

    /// Built-in table with the configured overrides applied on top.
    pub fn from_config(config: &IconsConfig) -> Self {
        let mut icons = Self::default();
        if let Some(default) = &config.default {
            icons.default = IconHandle::new(default.as_str());
        }
        for (code, reference) in &config.overrides {
            if !CurrencyPair::is_allowed(code) {
                warn!(code = %code, "Ignoring icon override for a pair that is not on the board");
                continue;
            }
            debug!(code = %code, icon = %reference, "Icon override");
            icons.table.insert(code.clone(), IconHandle::new(reference.as_str()));
        }
        icons
    }
}

impl Default for IconMap {
    fn default() -> Self {
        let table = CurrencyPair::ALL
            .into_iter()
            .map(|pair| {
                let asset = match pair {
                    CurrencyPair::UsdKes => "image-9.png",
                    CurrencyPair::EurKes => "image-16.png",
                    CurrencyPair::UsdUgx => "image-4.png",
                    CurrencyPair::UsdTzs => "image-19.png",
                    CurrencyPair::UsdNgn => "image.png",
                    CurrencyPair::GbpKes => "image-12.png",
                    CurrencyPair::UsdJpy => "image-10.png",
                    CurrencyPair::UsdCny => "image-7.png",
                    CurrencyPair::CnyKes => "image-13.png",
                };
                (pair.code().to_string(), IconHandle::new(asset))
            })
            .collect();

        IconMap {
            table,
            default: IconHandle::new(DEFAULT_ICON),
        }
    }
}
