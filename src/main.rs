use anyhow::Result;
use clap::{Parser, Subcommand};
use fxboard::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Fetch current rates and display the board
    Show {
        /// Print the board state as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxboard::cli::setup::setup(),
        Some(Commands::Show { json }) => {
            fxboard::run_command(
                fxboard::AppCommand::Show { json },
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            fxboard::run_command(
                fxboard::AppCommand::Show { json: false },
                cli.config_path.as_deref(),
            )
            .await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
