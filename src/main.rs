//! jubee: terminal dashboard for the Jubee legal assistant
//!
//! A sidebar of tools (legal research, drafting, translation, cross
//! examination, precedent radar, case analysis) and account pages.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use jubee::{cli, config};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with the tool list
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nTools:",
        "\n  Legal Research, Drafting, Translation, Cross Examination,",
        "\n  Precedent Radar, Case Analysis"
    )
}

#[derive(Parser)]
#[command(name = "jubee")]
#[command(version, long_version = build_long_version())]
#[command(about = "Terminal dashboard for the Jubee legal assistant", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open the dashboard on the home view
    jubee

    # Start in the precedent radar
    jubee run --view precedent-radar

    # List view keys as JSON
    jubee views --json

    # Write logs to a file while the dashboard runs
    jubee --log-file jubee.log -v")]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a config file (default: discovered .jubee.yaml)
    #[arg(short, long, global = true, env = "JUBEE_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard (default)
    Run {
        /// View to start in; run `jubee views` for the keys
        #[arg(long)]
        view: Option<String>,
    },

    /// List every view key and title
    Views {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the assistant tools and the views hosting them
    Tools {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .jubee.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command.unwrap_or(Commands::Run { view: None }) {
        Commands::Run { view } => {
            let config = match config::load_validated(cli.config.as_deref()) {
                Ok((config, loaded_from)) => {
                    if let Some(path) = loaded_from {
                        tracing::debug!("loaded config from {}", path.display());
                    }
                    config
                }
                Err(e) => {
                    tracing::warn!("{e}; using defaults");
                    config::AppConfig::default()
                }
            };
            cli::run_dashboard(config, view)
        }

        Commands::Views { json } => cli::run_views(json),

        Commands::Tools { json } => cli::run_tools(json),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "jubee", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".jubee.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Install the tracing subscriber. The dashboard owns the terminal, so only
/// warnings reach stderr unless `--verbose` or `RUST_LOG` asks for more.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()));

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => {
            let layer = fmt::layer().with_target(false).with_writer(io::stderr);
            (None, Some(layer))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}
