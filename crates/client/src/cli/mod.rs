//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Fetch and normalize site content from the CMS.
#[derive(Debug, Parser)]
#[command(name = "sitecms")]
#[command(version, about = "Fetch and normalize site content from the CMS", long_about = None)]
pub struct Cli {
    /// CMS API base URL [default: $CMS_API_URL or http://localhost:8055].
    #[arg(long)]
    pub base_url: Option<String>,

    /// Base URL prepended to asset file names
    /// [default: $CMS_ASSET_HOST or http://localhost:8055/assets/].
    #[arg(long)]
    pub asset_host: Option<String>,

    /// Read saved API responses from this directory instead of the CMS.
    #[arg(long, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable summary.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Site metadata and color palettes.
    GlobalConfig,
    /// Site header.
    Header,
    /// Site footer.
    Footer,
    /// A published page and its modules.
    Page {
        /// Page key, matched case-insensitively.
        key: String,
    },
    /// The color palettes as a CSS `:root` block.
    Theme,
}
