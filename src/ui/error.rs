use themeops::ThemeOpsError;

use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::{colors, paint, Icon};

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.render(supports_color, supports_unicode),
        paint(&format!("Error: {}", err), colors::ERROR, supports_color)
    );

    if let Some(help) = err.downcast_ref::<ThemeOpsError>().and_then(|e| e.help()) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.render(supports_color, supports_unicode),
            paint(&format!("Fix: {}", help), colors::INFO, supports_color)
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let typed = err.downcast_ref::<ThemeOpsError>();
        let output = serde_json::json!({
            "event": "error",
            "code": typed.map(|e| e.code()).unwrap_or("error"),
            "message": err.to_string(),
            "help": typed.and_then(|e| e.help()),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themeops_errors_include_fix() {
        let err = anyhow::Error::new(ThemeOpsError::MissingCredential);
        let text = format_error_with(&err, false, false);
        insta::assert_snapshot!(text.trim_end(), @r"
        [FAIL] Error: no hosting session is active and no access token was supplied
          [>] Fix: Run `gh auth login`, or export GH_TOKEN (or GITHUB_TOKEN) with a token that can push to the repository.
        ");
    }

    #[test]
    fn other_errors_have_no_fix_line() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(format_error_with(&err, false, true), "✗ Error: boom\n");
    }
}
