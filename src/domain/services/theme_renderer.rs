//! Theme Renderer
//!
//! Produces every generated file of a theme from its `ThemeLayout`.
//! Output is a pure function of the layout: identical layouts always
//! yield byte-identical files.

use std::fmt::Write;

use crate::domain::entities::theme_layout::{
    LAYOUT, SCRIPT, SETTINGS_DATA, SETTINGS_SCHEMA, STYLESHEET,
};
use crate::domain::entities::{TemplateFile, ThemeDir, ThemeLayout};

const STYLESHEET_CONTENT: &str = r#":root {
  --themeops-accent: #1f2937;
  --themeops-surface: #ffffff;
  --themeops-gap: 1.5rem;
}

.themeops-section {
  padding: var(--themeops-gap);
  background: var(--themeops-surface);
}

.themeops-section__label {
  margin: 0 0 calc(var(--themeops-gap) / 2);
  color: var(--themeops-accent);
  font-size: 1.25rem;
}

.themeops-template {
  display: grid;
  gap: var(--themeops-gap);
}

[data-section="luxury-toggle"].is-active {
  --themeops-accent: #b08d57;
  --themeops-surface: #0b0b0b;
}
"#;

const SCRIPT_CONTENT: &str = r#"(function () {
  'use strict';

  document.addEventListener('DOMContentLoaded', function () {
    document.querySelectorAll('[data-section]').forEach(function (el) {
      el.classList.add('is-ready');
    });
  });
})();
"#;

const LAYOUT_CONTENT: &str = r#"<!doctype html>
<html lang="{{ request.locale.iso_code }}">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ page_title }}</title>
    {{ 'theme.css' | asset_url | stylesheet_tag }}
    {{ content_for_header }}
  </head>
  <body>
    {{ content_for_layout }}
    <script src="{{ 'theme.js' | asset_url }}" defer></script>
  </body>
</html>
"#;

/// Render every generated file for `layout`, in a stable order
pub fn render(layout: &ThemeLayout) -> Vec<TemplateFile> {
    let mut files = vec![
        TemplateFile::new(ThemeDir::Assets.join(STYLESHEET), STYLESHEET_CONTENT),
        TemplateFile::new(ThemeDir::Assets.join(SCRIPT), SCRIPT_CONTENT),
        TemplateFile::new(ThemeDir::Layout.join(LAYOUT), LAYOUT_CONTENT),
    ];

    files.extend(layout.sections().iter().map(|name| {
        TemplateFile::new(
            ThemeDir::Sections.join(&format!("{}.liquid", name)),
            render_section(name),
        )
    }));

    files.extend(layout.templates().iter().map(|name| {
        TemplateFile::new(
            ThemeDir::Templates.join(&format!("{}.liquid", name)),
            render_template(name, layout.sections()),
        )
    }));

    files.push(TemplateFile::new(
        ThemeDir::Config.join(SETTINGS_SCHEMA),
        empty_list_stub(),
    ));
    files.push(TemplateFile::new(
        ThemeDir::Config.join(SETTINGS_DATA),
        empty_object_stub(),
    ));

    files
}

/// Markup fragment for one section. Its label and schema name are `name`.
pub fn render_section(name: &str) -> String {
    let schema = serde_json::json!({
        "name": name,
        "settings": [],
    });
    let schema = serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string());

    let mut out = String::new();
    let _ = writeln!(out, "{{%- comment -%}} Section: {} {{%- endcomment -%}}", name);
    let _ = writeln!(
        out,
        "<section class=\"themeops-section\" id=\"section-{name}\" data-section=\"{name}\">"
    );
    out.push_str("  <div class=\"themeops-section__inner\">\n");
    let _ = writeln!(
        out,
        "    <h2 class=\"themeops-section__label\">{}</h2>",
        name
    );
    out.push_str("    {{ section.settings.body }}\n");
    out.push_str("  </div>\n");
    out.push_str("</section>\n\n");
    out.push_str("{% schema %}\n");
    out.push_str(&schema);
    out.push_str("\n{% endschema %}\n");
    out
}

/// Page template that includes each section when its setting is enabled
pub fn render_template(name: &str, sections: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{{%- comment -%}} Template: {} {{%- endcomment -%}}", name);
    let _ = writeln!(
        out,
        "<div class=\"themeops-template\" data-template=\"{}\">",
        name
    );
    for section in sections {
        let _ = writeln!(out, "{{%- if settings.show_{} %}}", setting_key(section));
        let _ = writeln!(out, "  {{% section '{}' %}}", section);
        out.push_str("{%- endif %}\n");
    }
    out.push_str("</div>\n");
    out
}

fn setting_key(section: &str) -> String {
    section.replace('-', "_")
}

/// `settings_schema.json`: exactly `[]`
pub fn empty_list_stub() -> String {
    serde_json::to_string(&Vec::<serde_json::Value>::new()).unwrap_or_else(|_| "[]".to_string())
}

/// `settings_data.json`: exactly `{}`
pub fn empty_object_stub() -> String {
    serde_json::to_string(&serde_json::Map::new()).unwrap_or_else(|_| "{}".to_string())
}
