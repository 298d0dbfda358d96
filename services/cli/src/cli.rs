use crate::render::{run_assign, run_board};
use clap::{Args, Parser, Subcommand, ValueEnum};
use smartship::config::{parse_theme, AppConfig};
use smartship::dispatch::CardTheme;
use smartship::error::AppError;
use smartship::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "smartship",
    about = "Assign drivers to shipments and show them as a card board",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the roster document and render the shipment board (default command)
    Board(BoardArgs),
    /// Assign drivers to shipments given on the command line
    Assign(AssignArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BoardArgs {
    /// Roster JSON document (defaults to SMARTSHIP_DATA)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Card theme, light or dark (defaults to SMARTSHIP_THEME)
    #[arg(long, value_parser = parse_theme_arg)]
    pub(crate) theme: Option<CardTheme>,
    /// Toggle the card at this 1-based position; repeatable
    #[arg(long = "toggle", value_name = "CARD")]
    pub(crate) toggle: Vec<usize>,
    /// Expand every card before applying --toggle
    #[arg(long)]
    pub(crate) expand_all: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct AssignArgs {
    /// Shipment destination; repeat once per shipment, in order
    #[arg(long = "shipment", value_name = "ADDRESS")]
    pub(crate) shipments: Vec<String>,
    /// Driver name; repeat once per driver, in order
    #[arg(long = "driver", value_name = "NAME")]
    pub(crate) drivers: Vec<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

fn parse_theme_arg(raw: &str) -> Result<CardTheme, String> {
    parse_theme(raw).map_err(|err| err.to_string())
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Board(BoardArgs::default()));

    match command {
        Command::Board(args) => run_board(args, &config).await,
        Command::Assign(args) => run_assign(args),
    }
}
