//! Guess the Number - terminal edition
//!
//! Pick a difficulty, then find the secret number before running out of guesses.

mod config;
mod core;
mod frontend;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::{Frontend, FrontendEvent};
use std::path::PathBuf;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "guess-number")]
#[command(about = "Guess the secret number before your guesses run out", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.guess-number)
    /// Can also be set via GUESS_NUMBER_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Fixed random seed for reproducible targets
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the menu and start at this difficulty
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Start rounds with hints shown
    #[arg(long)]
    hints: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DifficultyArg {
    Easy,
    Intermediate,
    Hard,
}

impl From<DifficultyArg> for crate::core::Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Intermediate => Self::Intermediate,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    ValidateConfig {
        /// Config file to validate (default: the one in the data directory)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("guess-number.log")
        .context("Failed to open guess-number.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var(config::DATA_DIR_ENV) {
        tracing::info!("Using data directory from {}: {}", config::DATA_DIR_ENV, env_dir);
    }

    if let Some(Commands::ValidateConfig { file }) = &cli.command {
        return validate_config(file.as_deref());
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };
    if cli.hints {
        config.ui.hints_enabled = true;
    }

    run_tui(config, cli.seed, cli.difficulty.map(Into::into))
}

/// Load a config file and report keybind issues; exits 1 on errors
fn validate_config(file: Option<&std::path::Path>) -> Result<()> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => config::Config::config_path()?,
    };
    println!("Validating config file: {:?}", path);

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config = match config::Config::parse(&contents) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Failed to parse config: {:#}", e);
            std::process::exit(1);
        }
    };
    println!("✓ Config parsed successfully");

    let bad_colors = frontend::tui::palette::invalid_colors(&config.colors);
    for (field, value) in &bad_colors {
        println!("⚠ Warning: colors.{} = '{}' is not a #rrggbb color", field, value);
    }

    let report = config::keybind_validator::validate_keybinds(&config.keybinds);
    for issue in &report.issues {
        match issue.severity() {
            config::keybind_validator::Severity::Error => {
                eprintln!("✗ Error: {}", issue.message())
            }
            config::keybind_validator::Severity::Warning => {
                println!("⚠ Warning: {}", issue.message())
            }
        }
    }

    if report.issues.is_empty() && bad_colors.is_empty() {
        println!("✓ Config is valid with no issues");
    }
    if report.has_errors() {
        eprintln!("\n✗ Found {} error(s)", report.errors().count());
        std::process::exit(1);
    }
    Ok(())
}

/// Run TUI frontend
fn run_tui(
    config: config::Config,
    seed_override: Option<u64>,
    start: Option<crate::core::Difficulty>,
) -> Result<()> {
    use crate::core::AppCore;
    use frontend::tui::palette::Palette;
    use frontend::TuiFrontend;

    let seed = seed_override.or(config.game.seed);
    let poll_timeout = Duration::from_millis(config.ui.poll_timeout_ms);
    let palette = Palette::from_config(&config.colors);

    let mut app_core = AppCore::new(config, seed);
    if let Some(difficulty) = start {
        app_core.start_at(difficulty);
    }

    let mut frontend = TuiFrontend::new(palette)?;
    frontend.set_poll_timeout(poll_timeout);
    let (width, height) = frontend.size();
    tracing::debug!("Terminal size {}x{}", width, height);

    while app_core.running {
        if app_core.needs_render {
            frontend.render(&app_core)?;
            app_core.needs_render = false;
        }

        for event in frontend.poll_events()? {
            if let Some(key) = event.as_key_event() {
                app_core.handle_key(key);
            } else {
                match event {
                    FrontendEvent::Paste { text } => app_core.handle_paste(&text),
                    FrontendEvent::Resize { width, height } => {
                        tracing::debug!("Resized to {}x{}", width, height);
                        app_core.needs_render = true;
                    }
                    FrontendEvent::Quit => {
                        tracing::info!("Interrupted");
                        app_core.running = false;
                    }
                    FrontendEvent::Key { .. } => {}
                }
            }
            if !app_core.running {
                break;
            }
        }
    }

    frontend.cleanup()?;
    tracing::info!("Goodbye");
    Ok(())
}
