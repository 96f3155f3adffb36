use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use chlog::{changelog, version, Error};

#[derive(Parser)]
#[command(
    name = "chlog",
    about = "Extract release notes for one version from CHANGELOG.md",
    long_about = None
)]
struct Cli {
    /// Version to extract, with or without a "v" prefix (e.g. 1.2.3 or v1.2.3)
    #[arg(long, required_unless_present = "list")]
    version: Option<String>,

    /// Path to the changelog file
    #[arg(long, default_value = "CHANGELOG.md")]
    file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// List the versions present in the changelog and exit
    #[arg(long, conflicts_with = "version")]
    list: bool,
}

#[derive(Serialize)]
struct ReleaseNotes {
    version: String,
    file: PathBuf,
    notes: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let document = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    if cli.list {
        for found in changelog::list_versions(&document) {
            println!("{found}");
        }
        return Ok(());
    }

    let Some(requested) = cli.version else {
        // clap enforces this, but don't panic on it
        anyhow::bail!("--version is required");
    };

    match changelog::extract(&document, &requested) {
        Ok(notes) => {
            if cli.json {
                let payload = ReleaseNotes {
                    version: version::normalize(&requested),
                    file: cli.file,
                    notes: notes.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{notes}");
            }
        }
        Err(Error::VersionNotFound(missing)) => {
            eprintln!(
                "{} no section for version {} in {}",
                "✗".red(),
                missing.bold(),
                cli.file.display()
            );
            let known = changelog::list_versions(&document);
            if !known.is_empty() {
                eprintln!("  available versions: {}", known.join(", "));
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
