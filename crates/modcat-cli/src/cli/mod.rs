//! CLI for the modcat catalog browser.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modcat_core::config;
use modcat_core::fetch;

use commands::{run_cache_clear, run_cache_status, run_category, run_home, run_show};

/// Top-level CLI for browsing the mod catalog.
#[derive(Debug, Parser)]
#[command(name = "modcat")]
#[command(about = "modcat: browse the mod catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the homepage sections: newest, recommended, games and apps.
    Home,

    /// List categories and the mods in one of them.
    Category {
        /// Category to show (default: All).
        name: Option<String>,
    },

    /// Show the details of one mod by its catalog index.
    Show {
        /// Catalog index; invalid values fall back to the first mod.
        index: String,
    },

    /// Inspect or drop the local catalog cache.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show age and freshness of the cached catalog.
    Status,
    /// Remove the cached catalog.
    Clear,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let fetcher = fetch::open_default(&cfg).await?;

        match cli.command {
            CliCommand::Home => run_home(&fetcher, cfg.section_size).await?,
            CliCommand::Category { name } => run_category(&fetcher, name.as_deref()).await?,
            CliCommand::Show { index } => run_show(&fetcher, &index).await?,
            CliCommand::Cache { action } => match action {
                CacheAction::Status => run_cache_status(&fetcher).await?,
                CacheAction::Clear => run_cache_clear(&fetcher).await?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
