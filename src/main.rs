//! randuser: fetch and display random users.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use randuser::config;
use randuser::constants;
use randuser::env;
use randuser::logging;
use randuser::panel;
use randuser::session;
use randuser::source;

use std::io::IsTerminal;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::args::{Cli, Command, FetchArgs, PanelArgs};
use config::Config;
use env::Env;
use panel::RandomUserPanel;
use source::http::HttpUserSource;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let workdir = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&workdir), &Env::real())
        .context("failed to load configuration")?;

    // Layer 1: CLI flags
    if let Some(base_url) = cli.base_url {
        config.endpoint.base_url = base_url;
    }

    match cli.command.unwrap_or(Command::Panel(PanelArgs::default())) {
        Command::Panel(args) => run_panel(config, args).await,
        Command::Fetch(args) => run_fetch(config, args).await,
        Command::Config => run_config(&config),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print the effective configuration.
fn run_config(config: &Config) -> Result<()> {
    // Validate before printing so a broken range is reported here too.
    config.panel_options().context("invalid configuration")?;
    print!("{}", config.to_toml().context("failed to render configuration")?);
    Ok(())
}

/// Run the interactive panel on stdin/stdout.
async fn run_panel(mut config: Config, args: PanelArgs) -> Result<()> {
    if args.keep_error_on_hit {
        config.panel.clear_error_on_hit = false;
    }
    let options = config.panel_options().context("invalid configuration")?;

    let source = HttpUserSource::new(config.endpoint.base_url.clone());
    let mut rng = make_rng(args.seed);
    let mut panel = RandomUserPanel::new(options);

    if std::io::stdin().is_terminal() {
        cli::print_banner(&config.endpoint.base_url);
    }

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    session::run(&mut panel, &source, &mut rng, input, &mut stdout)
        .await
        .context("panel session failed")?;

    Ok(())
}

/// Fetch one user, by id or at random, and print it.
async fn run_fetch(config: Config, args: FetchArgs) -> Result<()> {
    let options = config.panel_options().context("invalid configuration")?;
    let source = HttpUserSource::new(config.endpoint.base_url.clone());
    let mut panel = RandomUserPanel::new(options);

    match args.id {
        Some(id) => panel.activate_with(&source, id).await,
        None => panel.activate(&source, &mut make_rng(args.seed)).await,
    };

    if let Some(error) = panel.error() {
        bail!("{error}");
    }
    let Some(user) = panel.displayed_user() else {
        bail!("no user was resolved");
    };

    print!("{}", args.format.render(user));
    Ok(())
}

/// Seeded when requested, otherwise from OS entropy.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
