//! The fixed allow-list of currency pairs shown on the board

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A currency pair eligible for display.
///
/// Declaration order is the display order. [`CurrencyPair::ALL`] is the only
/// table of pairs in the crate and serves both as the allow-list membership
/// test and as the canonical ordering of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CurrencyPair {
    #[serde(rename = "USD-KES")]
    UsdKes,
    #[serde(rename = "EUR-KES")]
    EurKes,
    #[serde(rename = "USD-UGX")]
    UsdUgx,
    #[serde(rename = "USD-TZS")]
    UsdTzs,
    #[serde(rename = "USD-NGN")]
    UsdNgn,
    #[serde(rename = "GBP-KES")]
    GbpKes,
    #[serde(rename = "USD-JPY")]
    UsdJpy,
    #[serde(rename = "USD-CNY")]
    UsdCny,
    #[serde(rename = "CNY-KES")]
    CnyKes,
}

impl CurrencyPair {
    pub const ALL: [CurrencyPair; 9] = [
        CurrencyPair::UsdKes,
        CurrencyPair::EurKes,
        CurrencyPair::UsdUgx,
        CurrencyPair::UsdTzs,
        CurrencyPair::UsdNgn,
        CurrencyPair::GbpKes,
        CurrencyPair::UsdJpy,
        CurrencyPair::UsdCny,
        CurrencyPair::CnyKes,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            CurrencyPair::UsdKes => "USD-KES",
            CurrencyPair::EurKes => "EUR-KES",
            CurrencyPair::UsdUgx => "USD-UGX",
            CurrencyPair::UsdTzs => "USD-TZS",
            CurrencyPair::UsdNgn => "USD-NGN",
            CurrencyPair::GbpKes => "GBP-KES",
            CurrencyPair::UsdJpy => "USD-JPY",
            CurrencyPair::UsdCny => "USD-CNY",
            CurrencyPair::CnyKes => "CNY-KES",
        }
    }

    /// Position of this pair on the board.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up an allow-listed pair by its exact code. Codes are
    /// case-sensitive, matching what the rate sheet publishes.
    pub fn from_code(code: &str) -> Option<CurrencyPair> {
        Self::ALL.into_iter().find(|pair| pair.code() == code)
    }

    pub fn is_allowed(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("Currency pair not on the board: {}", s))
    }
}
