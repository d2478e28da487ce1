use anyhow::{bail, Result};
use themeops::application::{CheckStatus, CheckToolsOptions};
use themeops::presentation::factory;
use themeops::AccessToken;

use super::GlobalArgs;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{colors, paint, Icon};

pub fn cmd_check(global: &GlobalArgs<'_>) -> Result<()> {
    let config = global.load_config()?;
    let options = CheckToolsOptions {
        token_present: AccessToken::from_env().is_some(),
    };
    let use_case = factory::create_check_tools_use_case(&config.scaffold.host);

    let result = if global.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "check",
        }));
        let mut out = std::io::stdout().lock();
        let result = use_case.execute_with_callback(&options, |item| {
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "command": "check",
                    "name": item.name,
                    "status": item.status.as_str(),
                    "message": item.message,
                    "location": item.location.as_ref().map(|p| p.display().to_string()),
                    "recommendation": item.recommendation,
                }),
            );
        });
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "passed": result.passed,
                "warnings": result.warnings,
                "errors": result.errors,
                "success": result.is_success(),
            }),
        );
        result
    } else {
        let caps = detect_capabilities();
        let result = use_case.execute_with_callback(&options, |item| {
            let icon = match item.status {
                CheckStatus::Pass => Icon::Success,
                CheckStatus::Warning => Icon::Warning,
                CheckStatus::Error => Icon::Error,
            };
            eprintln!(
                "{} {:<16} {}",
                icon.render(caps.supports_color, caps.supports_unicode),
                item.name,
                item.message
            );
            if let Some(recommendation) = &item.recommendation {
                eprintln!(
                    "  {} {}",
                    Icon::Arrow.render(caps.supports_color, caps.supports_unicode),
                    paint(recommendation, colors::DIM, caps.supports_color)
                );
            }
        });
        eprintln!();
        eprintln!(
            "{} passed, {} warnings, {} errors",
            result.passed, result.warnings, result.errors
        );
        result
    };

    if !result.is_success() {
        bail!("{} required tool(s) missing", result.errors);
    }
    Ok(())
}
