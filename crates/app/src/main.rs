mod config;
mod terminal;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use drill_core::model::{Catalog, Scope};
use services::{Clock, PlaybackCommand, SessionController, drive};
use storage::{
    CatalogRepository, CategorySummary, InMemoryCatalogRepository, JsonCatalogRepository,
    builtin_catalog,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::terminal::{TerminalPresenter, parse_line};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidMillis { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidMillis { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_millis(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<u32, ArgsError> {
    let value = require_value(args, flag)?;
    value
        .trim()
        .parse()
        .map_err(|_| ArgsError::InvalidMillis { flag, raw: value })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  sentence-drill [run] [--catalog <file.json>] [--scope <all|category>] [--seed <n>]");
    eprintln!("                       [--prompt-ms <ms>] [--reveal-first-ms <ms>]");
    eprintln!("                       [--reveal-second-ms <ms>] [--gap-ms <ms>]");
    eprintln!("  sentence-drill list     [--catalog <file.json>]");
    eprintln!("  sentence-drill template [--catalog <file.json>]   # print catalog as JSON");
    eprintln!();
    eprintln!("Without --catalog the built-in sample sentences are used.");
    eprintln!("Config file: {}", Config::path().display());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DRILL_CATALOG, DRILL_SEED, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    List,
    Template,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "run" => Some(Self::Run),
            "list" => Some(Self::List),
            "template" => Some(Self::Template),
            _ => None,
        }
    }
}

struct Args {
    config: Config,
    scope: Option<Scope>,
}

impl Args {
    /// Config file first, then environment, then flags.
    fn parse(mut config: Config, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        if let Some(path) = std::env::var_os("DRILL_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(seed) = std::env::var("DRILL_SEED")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            config.seed = Some(seed);
        }
        let mut scope = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    config.catalog_path = Some(PathBuf::from(require_value(args, "--catalog")?));
                }
                "--scope" => scope = Some(Scope::parse(&require_value(args, "--scope")?)),
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let seed = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    config.seed = Some(seed);
                }
                "--prompt-ms" => config.prompt_ms = require_millis(args, "--prompt-ms")?,
                "--reveal-first-ms" => {
                    config.reveal_first_ms = require_millis(args, "--reveal-first-ms")?;
                }
                "--reveal-second-ms" => {
                    config.reveal_second_ms = require_millis(args, "--reveal-second-ms")?;
                }
                "--gap-ms" => config.advance_gap_ms = require_millis(args, "--gap-ms")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { config, scope })
    }
}

async fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, storage::StorageError> {
    match path {
        Some(path) => JsonCatalogRepository::new(path).load_catalog().await,
        None => {
            InMemoryCatalogRepository::new(builtin_catalog())
                .load_catalog()
                .await
        }
    }
}

async fn run_session(args: Args, catalog: Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let timings = args.config.timings()?;
    let presenter = TerminalPresenter::new(CategorySummary::list(&catalog));
    let mut controller = SessionController::new(Arc::new(catalog), timings, presenter)
        .with_clock(Clock::default_clock())
        .with_seed(args.config.seed);
    let menu = CategorySummary::list(controller.catalog());

    let (tx, rx) = mpsc::unbounded_channel();
    match args.scope {
        Some(scope) => tx.send(PlaybackCommand::Start(scope))?,
        None => controller.presenter().print_menu(),
    }

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = parse_line(&line, &menu) else {
                        eprintln!("unrecognised input: {}", line.trim());
                        continue;
                    };
                    let shutdown = command == PlaybackCommand::Shutdown;
                    if tx.send(command).is_err() || shutdown {
                        break;
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    log::warn!("stdin closed: {err}");
                    break;
                }
            }
        }
    });

    if let Some(summary) = drive(&mut controller, rx).await {
        println!(
            "Learned {} sentences from {} in {}s ({} full passes).",
            summary.items_completed,
            summary.scope,
            summary.duration().num_seconds(),
            summary.cycles_completed
        );
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Run,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Run,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(Config::load(), &mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = load_catalog(parsed.config.catalog_path.as_ref()).await?;
    log::info!(
        "loaded {} categories ({} sentences)",
        catalog.categories().len(),
        catalog.total_sentences()
    );

    match cmd {
        Command::Run => run_session(parsed, catalog).await,
        Command::List => {
            for summary in CategorySummary::list(&catalog) {
                println!("{}\t{}", summary.id, summary.label());
            }
            Ok(())
        }
        Command::Template => {
            println!("{}", storage::json::to_json(&catalog)?);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let result = runtime.block_on(run());
    // The stdin reader may still be blocked on a read.
    runtime.shutdown_background();

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
