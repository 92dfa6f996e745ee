//! Run command implementation.

use anyhow::{Context, Result};
use brewbook::config::{BrewbookConfig, OutputFormat};
use brewbook::functions::ConfirmationMode;
use brewbook::{Entry, LessonOptions, Transcript, resolve_lessons, run_lessons};

use crate::style::{self, print_error, print_labeled};

pub struct RunArgs {
    pub lessons: Vec<String>,
    /// `None` defers to `output.format`.
    pub json: Option<bool>,
    pub corrected: bool,
    pub values: bool,
    pub project: String,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config =
        BrewbookConfig::load_from_dir(&args.project).context("Failed to load configuration")?;

    if !config.output.color {
        style::set_no_color(true);
    }

    let names = if args.lessons.is_empty() {
        &config.lessons.enabled
    } else {
        &args.lessons
    };
    let lessons = resolve_lessons(names.as_slice())?;

    let mut options = LessonOptions::from_config(&config);
    if args.corrected {
        options.confirmation = ConfirmationMode::Corrected;
    }

    tracing::info!(?lessons, confirmation = %options.confirmation, "running lessons");
    let transcripts = run_lessons(&lessons, &options);

    let json = args
        .json
        .unwrap_or(config.output.format == OutputFormat::Json);
    if json {
        let rendered =
            serde_json::to_string_pretty(&transcripts).context("Failed to render transcripts")?;
        println!("{rendered}");
    } else {
        for transcript in &transcripts {
            print_text(transcript, args.values);
        }
    }

    Ok(())
}

fn print_text(transcript: &Transcript, values: bool) {
    for entry in transcript.entries() {
        match entry {
            Entry::Output { line } => println!("{line}"),
            Entry::Value { name, value } if values => print_labeled(name, value),
            Entry::Value { .. } => {}
            Entry::Failure { message } => print_error(message),
        }
    }
}
