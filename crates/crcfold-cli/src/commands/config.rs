//! Configuration display command.

use std::path::Path;

use anyhow::{Context, Result};
use crcfold_config::{CrcfoldConfig, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, Paths};

use crate::args::ShowFormat;
use crate::style::{print_hint, print_labeled, print_spacer};
use crate::style::colors::SemanticStyle;

/// Show the effective configuration.
pub fn show(project: &Path, format: ShowFormat) -> Result<()> {
    let config = CrcfoldConfig::load_from_dir(project).context("Failed to load configuration")?;

    match format {
        ShowFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ShowFormat::Toml => {
            println!("{}", config.to_toml()?);
        }
        ShowFormat::Text => {
            println!("{}", "crcfold configuration".header());
            print_spacer();

            println!("Checksum:");
            print_labeled("Polynomial", &format!("{:#010x}", config.checksum.polynomial));
            print_labeled("Seed", &format!("{:#010x}", config.checksum.seed));
            print_spacer();

            println!("Input:");
            print_labeled("Chunk size", &config.input.chunk_size.to_string());
            print_spacer();

            println!("Output:");
            print_labeled("Format", &format!("{:?}", config.output.format));

            if !Paths::has_project_config(project) {
                print_spacer();
                print_hint(&format!(
                    "No {PROJECT_CONFIG_FILE} in {}; create one (or {LOCAL_CONFIG_FILE}) to override defaults.",
                    project.display()
                ));
            }
        }
    }

    Ok(())
}
