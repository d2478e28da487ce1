//! themeops CLI
//!
//! Usage: themeops [--json] [-v] [--config PATH] <COMMAND>
//!
//! Commands:
//!   scaffold  Regenerate the theme directory and publish it
//!   redact    Replace a leaked secret in every revision of a remote
//!   check     Report tool and credential availability

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::scaffold::ScaffoldArgs;
use commands::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        config: cli.config.as_deref(),
    };

    let result = match cli.command {
        Commands::Scaffold {
            target,
            assets_source,
            owner,
            repo,
            branch,
        } => commands::scaffold::cmd_scaffold(
            &global,
            ScaffoldArgs {
                target,
                assets_source,
                owner,
                repo,
                branch,
            },
        ),
        Commands::Redact { remote_url } => commands::redact::cmd_redact(&global, &remote_url),
        Commands::Check => commands::check::cmd_check(&global),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, global.json);
        std::process::exit(1);
    }
}
