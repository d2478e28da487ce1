pub mod check;
pub mod redact;
pub mod scaffold;

use std::path::Path;

use anyhow::Result;
use themeops::config::ConfigWarning;
use themeops::infrastructure::ConsoleStyle;
use themeops::Config;

use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{colors, paint, Icon};

/// Settings every subcommand shares
pub struct GlobalArgs<'a> {
    pub json: bool,
    pub verbose: u8,
    pub config: Option<&'a Path>,
}

impl GlobalArgs<'_> {
    /// Resolve configuration, reporting unknown keys
    pub fn load_config(&self) -> Result<Config> {
        let (config, warnings) = Config::resolve(self.config)?;
        self.report_warnings(&warnings);
        Ok(config)
    }

    pub fn console_style(&self) -> ConsoleStyle {
        let caps = detect_capabilities();
        ConsoleStyle {
            color: caps.supports_color,
            unicode: caps.supports_unicode,
            verbose: self.verbose > 0,
        }
    }

    fn report_warnings(&self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            if self.json {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "warning",
                    "kind": "config",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }));
                continue;
            }

            let caps = detect_capabilities();
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            let hint = warning
                .suggestion
                .as_ref()
                .map(|s| format!(" (did you mean '{}'?)", s))
                .unwrap_or_default();
            eprintln!(
                "{} {}",
                Icon::Warning.render(caps.supports_color, caps.supports_unicode),
                paint(
                    &format!("Unknown config key '{}' in {}{}", warning.key, location, hint),
                    colors::WARNING,
                    caps.supports_color
                )
            );
        }
    }
}
