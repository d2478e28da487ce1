use std::path::PathBuf;

use anyhow::Result;
use themeops::domain::entities::ThemeLayout;
use themeops::presentation::factory;
use themeops::{AccessToken, RepoSlug, ScaffoldOptions};

use super::GlobalArgs;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{colors, paint};

/// Flags that override `[scaffold]` configuration
#[derive(Debug, Default)]
pub struct ScaffoldArgs {
    pub target: Option<PathBuf>,
    pub assets_source: Option<PathBuf>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
}

pub fn cmd_scaffold(global: &GlobalArgs<'_>, args: ScaffoldArgs) -> Result<()> {
    let config = global.load_config()?.scaffold;

    let target = args.target.unwrap_or(config.target);
    let assets_source = args.assets_source.unwrap_or(config.assets_source);
    let owner = args.owner.unwrap_or(config.owner);
    let repo = args.repo.unwrap_or(config.repo);
    let branch = args.branch.unwrap_or(config.branch);

    let slug = RepoSlug::new(&owner, &repo)?;
    let options = ScaffoldOptions::new(target, slug)
        .with_assets_source(assets_source)
        .with_host(config.host.clone())
        .with_branch(branch)
        .with_commit_message(config.commit_message)
        .with_layout(ThemeLayout::default().with_assets(config.assets))
        .with_token(AccessToken::from_env());

    if global.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "scaffold",
            "target": options.target.display().to_string(),
            "remote": options.remote_url(),
            "branch": options.branch,
        }));
    }

    let events = factory::create_event_sink("scaffold", global.json, global.console_style());
    let use_case = factory::create_scaffold_use_case(&config.host, events);
    let result = use_case.execute(&options)?;

    if global.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "summary",
            "command": "scaffold",
            "target": result.target.display().to_string(),
            "credential": result.credential.as_str(),
            "copied": result.copied,
            "skipped": result.skipped,
            "generated": result.generated.len(),
            "fingerprint": result.fingerprint.as_str(),
            "archive": result.archive.as_ref().map(|p| p.display().to_string()),
            "committed": result.committed,
            "remote": result.remote_url,
            "branch": result.branch,
        }));
        return Ok(());
    }

    let caps = detect_capabilities();
    let dim = |s: &str| paint(s, colors::DIM, caps.supports_color);
    eprintln!();
    eprintln!("{} {}", dim("Theme:      "), result.target.display());
    eprintln!(
        "{} {} generated, {} copied, {} skipped",
        dim("Files:      "),
        result.generated.len(),
        result.copied.len(),
        result.skipped.len()
    );
    eprintln!("{} {}", dim("Fingerprint:"), result.fingerprint);
    if let Some(archive) = &result.archive {
        eprintln!("{} {}", dim("Archive:    "), archive.display());
    }
    eprintln!("{} {} ({})", dim("Published:  "), result.remote_url, result.branch);
    Ok(())
}
