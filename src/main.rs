use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use strcalc::core::log::init_logging;

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

impl From<Commands> for strcalc::AppCommand {
    fn from(cmd: Commands) -> strcalc::AppCommand {
        match cmd {
            Commands::Estimate => strcalc::AppCommand::Estimate,
            Commands::Rate => strcalc::AppCommand::Rate,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the investment and profit/ROI breakdown for the configured scenario
    Estimate,
    /// Display the current USD to CAD exchange rate
    Rate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => strcalc::cli::setup::setup(),
        Some(cmd) => strcalc::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
