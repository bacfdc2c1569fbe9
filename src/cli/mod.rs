//! Terminal presentation of the rate board

pub mod board;
pub mod setup;
pub mod ui;
