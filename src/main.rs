use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;

use shape_board::canvas::{select_rasterizer, ColorChoice, TerminalCaps};
use shape_board::config::{load_config, load_config_from, save_config_to};
use shape_board::{run_script, Board, BoardConfig, Interactive, LoadOutcome, Session};

/// Interactive text-console drawing board
#[derive(Parser, Debug)]
#[command(name = "shape-board", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Board file to load at startup
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,

    /// Log info messages to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log debug messages to stderr
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Initialize logger with proper stderr output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting shape-board version {}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config().unwrap_or_else(|e| {
            tracing::warn!("{e}; using defaults");
            BoardConfig::sensible_defaults()
        }),
    };
    if cli.no_color {
        config.color = ColorChoice::Never;
    }
    tracing::debug!(?config, "Configuration loaded");

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .or_else(BoardConfig::config_path)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        save_config_to(&config, &path)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let caps = TerminalCaps::detect();
    let rasterizer = select_rasterizer(&caps, config.color);
    tracing::debug!("Using {} rasterizer", rasterizer.name());

    let mut board = Board::new();
    if let Some(path) = cli.load.as_ref().or(config.default_file.as_ref()) {
        match board.load(path) {
            Ok(LoadOutcome::Loaded(count)) => {
                tracing::info!("Loaded {count} shape(s) from {}", path.display());
            }
            Ok(LoadOutcome::Created) => {
                tracing::info!("Created empty board file {}", path.display());
            }
            Err(e) => tracing::warn!("Could not load {}: {e}", path.display()),
        }
    }

    let mut session = Session::new(board, rasterizer, config.auto_draw);

    if io::stdin().is_terminal() {
        Interactive::new(session, &config).run()?;
    } else {
        run_script(&mut session, io::stdin().lock(), &mut io::stdout().lock())?;
    }

    tracing::info!("Shutting down");
    Ok(())
}
