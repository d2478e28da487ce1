use anyhow::Result;
use themeops::presentation::factory;
use themeops::RedactOptions;

use super::GlobalArgs;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{colors, paint, Icon};

pub fn cmd_redact(global: &GlobalArgs<'_>, remote_url: &str) -> Result<()> {
    let config = global.load_config()?.redact;

    let options = RedactOptions::new(remote_url)
        .with_placeholder(config.placeholder)
        .with_keep_workspace(config.keep_workspace);

    let caps = detect_capabilities();
    if global.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "redact",
            "remote": options.remote,
            "keep_workspace": options.keep_workspace,
        }));
    } else {
        eprintln!(
            "{} {}",
            Icon::Warning.render(caps.supports_color, caps.supports_unicode),
            paint(
                &format!(
                    "Every branch and tag of {} will be rewritten and force-pushed.",
                    options.remote
                ),
                colors::WARNING,
                caps.supports_color
            )
        );
    }

    let events = factory::create_event_sink("redact", global.json, global.console_style());
    let use_case = factory::create_redact_use_case(events);
    let result = use_case.execute(&options)?;

    if global.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "summary",
            "command": "redact",
            "remote": result.remote,
            "mirror": result.mirror.display().to_string(),
            "workspace": result.workspace.display().to_string(),
            "retained": result.retained,
            "placeholder": result.placeholder,
        }));
        return Ok(());
    }

    eprintln!();
    eprintln!(
        "{}",
        paint(
            "Collaborators must re-clone; existing clones still contain the old history.",
            colors::INFO,
            caps.supports_color
        )
    );
    Ok(())
}
