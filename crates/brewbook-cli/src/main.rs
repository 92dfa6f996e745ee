//! brewbook CLI.
//!
//! Runs the function and constructor lessons and prints what they produce.
//!
//! # Quick Start
//!
//! ```bash
//! # Run every enabled lesson
//! brewbook run
//!
//! # Run one lesson as JSON
//! brewbook run functions --format json
//!
//! # Write a starter brewbook.toml
//! brewbook config init
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

/// brewbook - lessons on functions, closures, and constructors.
#[derive(Parser)]
#[command(name = "brewbook")]
#[command(author, version, long_about = None)]
#[command(about = "brewbook - lessons on functions, closures, and constructors.")]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List the available lessons.
    List,

    /// Run lessons and print their output.
    Run {
        /// Lessons to run (default: lessons.enabled from config).
        lessons: Vec<String>,

        /// Output format (default: output.format from config).
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Let the order confirmation echo the ordered tea.
        #[arg(long)]
        corrected: bool,

        /// Also print values the lessons compute without printing.
        #[arg(long)]
        values: bool,

        /// Project directory to read brewbook.toml from.
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Project directory.
        #[arg(short, long, default_value = ".")]
        project: String,
    },

    /// Write a default brewbook.toml.
    Init {
        /// Project directory.
        #[arg(default_value = ".")]
        path: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries lesson output only.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::List => {
            commands::list::run();
            Ok(())
        }
        Commands::Run {
            lessons,
            format,
            corrected,
            values,
            project,
        } => commands::run::run(&commands::run::RunArgs {
            lessons,
            json: format.map(|f| f == Format::Json),
            corrected,
            values,
            project,
        }),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format, project } => commands::config::show(&project, &format),
            ConfigCommands::Init { path } => commands::config::init(&path),
        },
    }
}
