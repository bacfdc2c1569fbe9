//! Core board abstractions

pub mod config;
pub mod date;
pub mod icons;
pub mod log;
pub mod pair;
pub mod rates;
pub mod source;
pub mod state;

// Re-export main types for cleaner imports
pub use icons::{IconHandle, IconMap};
pub use pair::CurrencyPair;
pub use rates::{DisplayRecord, RateBoard, RateSlot, RawRateRow, normalize};
pub use source::{FetchError, RateSource};
pub use state::{FetchState, StateCell};
