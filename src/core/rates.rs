//! Raw rate rows and their normalization into the board

use crate::core::icons::{IconHandle, IconMap};
use crate::core::pair::CurrencyPair;
use crate::core::source::FetchError;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One row as published by the rate sheet. Values are kept verbatim; they are
/// displayed, never computed on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RawRateRow {
    #[serde(rename = "Currency")]
    pub pair_code: String,
    #[serde(rename = "BUY")]
    pub buy: String,
    #[serde(rename = "SELL")]
    pub sell: String,
}

impl RawRateRow {
    pub fn new(pair_code: &str, buy: &str, sell: &str) -> Self {
        RawRateRow {
            pair_code: pair_code.to_string(),
            buy: buy.to_string(),
            sell: sell.to_string(),
        }
    }

    /// Decodes the relay payload: a JSON array of objects keyed `Currency`,
    /// `BUY` and `SELL`. Absent keys and non-string values read as `""`.
    pub fn parse_payload(body: &str) -> Result<Vec<RawRateRow>, FetchError> {
        let items: Vec<Map<String, Value>> =
            serde_json::from_str(body).map_err(|e| FetchError::MalformedPayload {
                reason: format!("expected an array of rate objects: {e}"),
            })?;

        Ok(items
            .iter()
            .map(|item| RawRateRow {
                pair_code: string_field(item, "Currency"),
                buy: string_field(item, "BUY"),
                sell: string_field(item, "SELL"),
            })
            .collect())
    }
}

fn string_field(item: &Map<String, Value>, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Render-ready rates for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub label: String,
    pub icon: IconHandle,
    pub buying: String,
    pub selling: String,
}

/// A position on the board. `record` is `None` when the source had no row
/// for the pair; the slot itself is never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSlot {
    pub pair: CurrencyPair,
    pub record: Option<DisplayRecord>,
}

/// The normalized board: exactly one slot per allow-listed pair, in board
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateBoard {
    slots: Vec<RateSlot>,
}

impl RateBoard {
    pub fn slots(&self) -> &[RateSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|slot| slot.pair.code())
    }

    pub fn get(&self, pair: CurrencyPair) -> Option<&DisplayRecord> {
        self.slots
            .get(pair.index())
            .and_then(|slot| slot.record.as_ref())
    }

    /// Filled slots only, in board order.
    pub fn records(&self) -> impl Iterator<Item = &DisplayRecord> {
        self.slots.iter().filter_map(|slot| slot.record.as_ref())
    }

    pub fn missing(&self) -> Vec<CurrencyPair> {
        self.slots
            .iter()
            .filter(|slot| slot.record.is_none())
            .map(|slot| slot.pair)
            .collect()
    }
}

impl Serialize for RateBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.slots.iter().map(|slot| &slot.record))
    }
}

/// Filters `rows` to the allow-list and lays them out in board order.
///
/// Rows whose code is not on the board are dropped silently. When the source
/// carries several rows for the same pair, the last one wins. Pairs without
/// any row keep an empty slot.
pub fn normalize(rows: &[RawRateRow], icons: &IconMap) -> RateBoard {
    let mut records: Vec<Option<DisplayRecord>> = vec![None; CurrencyPair::ALL.len()];

    for row in rows {
        let Some(pair) = CurrencyPair::from_code(&row.pair_code) else {
            continue;
        };
        records[pair.index()] = Some(DisplayRecord {
            label: row.pair_code.clone(),
            icon: icons.lookup(&row.pair_code).clone(),
            buying: row.buy.clone(),
            selling: row.sell.clone(),
        });
    }

    let slots = CurrencyPair::ALL
        .into_iter()
        .zip(records)
        .map(|(pair, record)| RateSlot { pair, record })
        .collect();

    RateBoard { slots }
}
