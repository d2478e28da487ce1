use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// themeops - scaffold storefront themes and scrub leaked secrets from history
#[derive(Parser, Debug)]
#[command(name = "themeops")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Credentials are read from GH_TOKEN / GITHUB_TOKEN or an existing `gh` session, never from arguments."
)]
pub struct Cli {
    /// Output format for CI (NDJSON on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v shows every written file)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./themeops.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the theme directory and publish it to the remote repository
    Scaffold {
        /// Theme directory (deleted and recreated)
        #[arg(long)]
        target: Option<PathBuf>,

        /// Directory holding optional assets (logo.png, hero.jpg, favicon.png)
        #[arg(long = "assets")]
        assets_source: Option<PathBuf>,

        /// Repository owner
        #[arg(long)]
        owner: Option<String>,

        /// Repository name
        #[arg(long)]
        repo: Option<String>,

        /// Branch to publish
        #[arg(long)]
        branch: Option<String>,
    },

    /// Replace a leaked secret in every revision of a remote repository
    ///
    /// The secret is read from THEMEOPS_REDACT_SECRET or a hidden prompt.
    Redact {
        /// Remote repository URL (rewritten and force-pushed)
        remote_url: String,
    },

    /// Report whether required tools and credentials are available
    Check,
}
