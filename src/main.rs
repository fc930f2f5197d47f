use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook_cli::cli::{
    handle_analyze_command, handle_config_command, handle_faq_command, AnalyzeArgs,
    ConfigCommands, FaqCommands,
};
use pocketbook_cli::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook_cli::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    author = "Kaylee Beyene",
    version,
    about = "Personal budget analyzer and finance FAQ",
    long_about = "Pocketbook breaks a monthly budget down into expenses, savings, \
                  investments and what is left over, warns when spending exceeds \
                  income, and answers common personal finance questions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Analyze a monthly budget
    Analyze(AnalyzeArgs),

    /// Finance FAQ
    #[command(subcommand)]
    Faq(FaqCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            paths.ensure_directories()?;
            init_logging(LogTarget::File(paths.log_file()), &settings.log_filter)?;
            pocketbook_cli::tui::run_tui(&settings)?;
        }
        Some(Commands::Analyze(args)) => {
            init_logging(LogTarget::Stderr, &settings.log_filter)?;
            handle_analyze_command(&settings, args)?;
        }
        Some(Commands::Faq(cmd)) => {
            init_logging(LogTarget::Stderr, &settings.log_filter)?;
            handle_faq_command(cmd)?;
        }
        Some(Commands::Config(cmd)) => {
            init_logging(LogTarget::Stderr, &settings.log_filter)?;
            handle_config_command(&paths, &mut settings, cmd)?;
        }
    }

    Ok(())
}
