mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{catalog, clean, completions, link, naming, Context};
use crate::error::{exit_code_for, report_error};
use adkit_config as config;

#[derive(Debug, Parser)]
#[command(name = "adkit", version, about = "adkit CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "parse-names")]
    ParseNames(clean::ParseNamesArgs),
    #[command(name = "normalize-phones")]
    NormalizePhones(clean::NormalizePhonesArgs),
    #[command(subcommand)]
    Name(naming::NameCommand),
    #[command(subcommand)]
    Link(link::LinkCommand),
    Catalog(catalog::CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path.clone()) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                config: &app_config,
                json,
            };

            match command {
                Command::ParseNames(args) => clean::parse_names(&ctx, args),
                Command::NormalizePhones(args) => clean::normalize_phones(&ctx, args),
                Command::Name(cmd) => match cmd {
                    naming::NameCommand::Campaign(args) => naming::campaign(&ctx, args),
                    naming::NameCommand::Adset(args) => naming::adset(&ctx, args),
                    naming::NameCommand::Ad(args) => naming::ad(&ctx, args),
                },
                Command::Link(cmd) => match cmd {
                    link::LinkCommand::Tracker(args) => link::tracker(&ctx, args),
                    link::LinkCommand::Tag(args) => link::tag(&ctx, args),
                    link::LinkCommand::Url(args) => link::url(&ctx, args),
                },
                Command::Catalog(args) => catalog::show(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config load")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
