//! Clap argument types.

use clap::{ArgAction, Parser, ValueEnum};

use randuser::models::{UserId, UserRecord};
use randuser::output::OutputRenderer;
use randuser::output::json::JsonRenderer;
use randuser::output::terminal::TerminalRenderer;

/// Fetch a random user and show their name and phone number.
#[derive(Parser, Debug)]
#[command(
    name = "randuser",
    version = randuser::constants::VERSION,
    about = "Fetch a random user from a REST endpoint and show their name and phone number",
)]
pub struct Cli {
    /// Users collection URL (overrides config and RANDUSER_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `panel` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the interactive panel (press Enter to fetch a random user).
    Panel(PanelArgs),

    /// Fetch one user and print it.
    Fetch(FetchArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `panel` subcommand.
#[derive(Parser, Debug, Default)]
pub struct PanelArgs {
    /// Seed the identifier draw for a reproducible sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep a previous error visible when a cached user is drawn.
    #[arg(long, default_value_t = false)]
    pub keep_error_on_hit: bool,
}

/// Arguments for the `fetch` subcommand.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Identifier to fetch (drawn at random when omitted).
    #[arg(long)]
    pub id: Option<UserId>,

    /// Seed the identifier draw.
    #[arg(long, conflicts_with = "id")]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
}

/// Output format for `fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored table with details.
    Terminal,
    /// The full record as pretty JSON.
    Json,
}

impl OutputFormat {
    /// Render a user using the renderer for this format.
    pub fn render(&self, user: &UserRecord) -> String {
        match self {
            OutputFormat::Terminal => TerminalRenderer.render(user),
            OutputFormat::Json => JsonRenderer.render(user),
        }
    }
}
