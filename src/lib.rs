pub mod cli;
pub mod controller;
pub mod core;
pub mod providers;

use crate::controller::FetchController;
use crate::core::config::AppConfig;
use crate::core::icons::IconMap;
use crate::core::state::FetchState;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Fetch the rates once and print the board, as a table or as JSON
    Show { json: bool },
}

/// Builds a controller for `config` and runs a single acquisition attempt.
pub async fn acquire_with_config(config: &AppConfig) -> Result<FetchState> {
    let source = providers::from_config(&config.source)?;
    let controller = FetchController::new(source, config.source.timeout())
        .with_icons(IconMap::from_config(&config.icons));
    Ok(controller.acquire().await)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Rate board starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Show { json } => show(&config, json).await,
    }
}

async fn show(config: &AppConfig, json: bool) -> Result<()> {
    let state = if json {
        acquire_with_config(config).await?
    } else {
        let spinner = cli::ui::new_spinner("Fetching rates...");
        let state = acquire_with_config(config).await;
        spinner.finish_and_clear();
        state?
    };

    if json {
        println!("{}", cli::board::render_json(&state)?);
    } else {
        let date_label = crate::core::date::today_label();
        println!("{}", cli::board::render_state(&state, &date_label));
    }

    match state.error_message() {
        Some(message) => anyhow::bail!("{message}"),
        None => Ok(()),
    }
}
