use super::ui;
use crate::core::rates::RateBoard;
use crate::core::state::FetchState;
use anyhow::Result;
use comfy_table::Cell;

pub const BOARD_TITLE: &str = "EXCHANGE RATE";

impl RateBoard {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Icon"),
            ui::header_cell("Currency"),
            ui::header_cell("BUYING"),
            ui::header_cell("SELLING"),
        ]);

        for slot in self.slots() {
            let row = match &slot.record {
                Some(record) => vec![
                    Cell::new(record.icon.as_str()),
                    Cell::new(&record.label),
                    ui::rate_cell(&record.buying),
                    ui::rate_cell(&record.selling),
                ],
                None => vec![
                    ui::placeholder_cell(),
                    Cell::new(slot.pair.code()),
                    ui::placeholder_cell(),
                    ui::placeholder_cell(),
                ],
            };
            table.add_row(row);
        }

        table.to_string()
    }
}

/// Renders whatever the state currently holds. Only a `Ready` state ever
/// produces rates; an error never shows a list.
pub fn render_state(state: &FetchState, date_label: &str) -> String {
    match state {
        FetchState::Loading => ui::style_text("Loading rates...", ui::StyleType::Subtle),
        FetchState::Error { message } => {
            format!("{} {}", ui::style_text("✗", ui::StyleType::Error), message)
        }
        FetchState::Ready { records } => format!(
            "{}\n{}\n\n{}",
            ui::style_text(BOARD_TITLE, ui::StyleType::Title),
            ui::style_text(date_label, ui::StyleType::Date),
            records.display_as_table()
        ),
    }
}

pub fn render_json(state: &FetchState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
