//! CLI for the linkdispatch deep link classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkdispatch_core::{classifier, config, LinkSource};
use std::path::PathBuf;

use commands::{run_batch, run_categories, run_classify, run_config};

/// Top-level CLI for the linkdispatch classifier.
#[derive(Debug, Parser)]
#[command(name = "linkdispatch")]
#[command(about = "linkdispatch: classify incoming deep links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a single URL.
    Classify {
        /// Raw URL (or quick-action identifier with `--source quick-action`).
        url: String,

        /// How the link arrived: custom-scheme, universal-link, push-notification, open-in, quick-action.
        #[arg(long, default_value = "custom-scheme", value_name = "SOURCE")]
        source: LinkSource,

        /// The link launched the app (cold start) rather than reaching a running instance.
        #[arg(long)]
        cold_start: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify every line of a file (`-` for stdin). Blank and `#` lines are skipped.
    Batch {
        /// Path to a file with one URL per line.
        path: PathBuf,

        /// Arrival context applied to every line.
        #[arg(long, default_value = "custom-scheme", value_name = "SOURCE")]
        source: LinkSource,

        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
    },

    /// List all link categories and whether they need a logged-in session.
    Categories,

    /// Show the config file path and effective values.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        classifier::init_default(&cfg);

        match cli.command {
            CliCommand::Classify {
                url,
                source,
                cold_start,
                json,
            } => run_classify(&url, source, cold_start, json)?,
            CliCommand::Batch { path, source, json } => run_batch(&path, source, json)?,
            CliCommand::Categories => run_categories()?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
