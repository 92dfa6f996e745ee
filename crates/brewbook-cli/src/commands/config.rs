//! Configuration management commands.

use anyhow::{Context, Result};
use brewbook_config::{BrewbookConfig, Paths};
use std::path::Path;

use crate::style::{print_hint, print_success, print_warn};

/// Show current configuration.
pub fn show(project: &str, format: &str) -> Result<()> {
    let project_path = Path::new(project);

    if !Paths::is_initialized(project_path) {
        print_warn(&format!(
            "No brewbook.toml in {}, showing defaults and overrides.",
            project_path.display()
        ));
    }

    let config =
        BrewbookConfig::load_from_dir(project_path).context("Failed to load configuration")?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        _ => {
            println!("brewbook Configuration");
            println!("======================\n");

            println!("Output:");
            println!("  Format: {:?}", config.output.format);
            println!("  Color: {}", config.output.color);
            println!();

            println!("Quirks:");
            println!(
                "  Faithful order confirmation: {}",
                config.quirks.faithful_order_confirmation
            );
            println!();

            println!("Lessons:");
            println!("  Enabled: {}", config.lessons.enabled.join(", "));
        }
    }

    Ok(())
}

/// Write a default brewbook.toml into `path`.
pub fn init(path: &str) -> Result<()> {
    let project_path = Path::new(path);
    std::fs::create_dir_all(project_path)
        .with_context(|| format!("Failed to create {}", project_path.display()))?;

    let written = BrewbookConfig::default()
        .write_project_file(project_path)
        .context("Failed to write brewbook.toml")?;

    print_success(&format!("Wrote {}", written.display()));
    print_hint("Run 'brewbook run' to start the lessons.");
    Ok(())
}
