//! Tera rendering engine: [`TableFormat`] and [`TableRenderer`].
//!
//! | Format     | Template              | Shape                                  |
//! |------------|-----------------------|----------------------------------------|
//! | `Html`     | `html/table.tera`     | `<table>…</table>` on exactly one line |
//! | `Markdown` | `markdown/table.tera` | pipe table, one row per line           |
//!
//! HTML output is what gets spliced into documents: the patcher replaces a
//! single line, so the table must not contain a newline.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use tera::Tera;

use actiondocs_core::{AttributeKind, AttributeSet};

use crate::context::TableContext;
use crate::error::RenderError;
use crate::rows::build_rows;

// ---------------------------------------------------------------------------
// Template sources
// ---------------------------------------------------------------------------

/// Read `<dir>/<name>` if it exists.
fn read_override(dir: &Path, name: &str) -> Result<Option<String>, RenderError> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(RenderError::Io { path, source }),
    }
}

/// One template per [`TableFormat`]; an override in `user_template_dir`
/// replaces the embedded source of the same name. Other files are ignored.
fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    for format in TableFormat::all() {
        let name = format.template_name();
        let user = match user_template_dir {
            Some(dir) => read_override(dir, name)?,
            None => None,
        };
        let source = user.as_deref().unwrap_or_else(|| format.embedded_template());
        tera.add_raw_template(name, source)?;
    }
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TableFormat
// ---------------------------------------------------------------------------

/// Output container for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableFormat {
    #[default]
    Html,
    Markdown,
}

impl TableFormat {
    pub fn all() -> &'static [TableFormat] {
        &[TableFormat::Html, TableFormat::Markdown]
    }

    /// Template rendered for this format.
    pub fn template_name(&self) -> &'static str {
        match self {
            TableFormat::Html => "html/table.tera",
            TableFormat::Markdown => "markdown/table.tera",
        }
    }

    /// Template source compiled into the binary.
    fn embedded_template(&self) -> &'static str {
        match self {
            TableFormat::Html => include_str!("templates/table.html.tera"),
            TableFormat::Markdown => include_str!("templates/table.md.tera"),
        }
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(TableFormat::Html),
            "markdown" | "md" => Ok(TableFormat::Markdown),
            other => Err(format!(
                "unknown table format '{other}'; expected: html, markdown"
            )),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFormat::Html => write!(f, "html"),
            TableFormat::Markdown => write!(f, "markdown"),
        }
    }
}

// ---------------------------------------------------------------------------
// TableRenderer
// ---------------------------------------------------------------------------

/// Tera-based renderer for attribute tables.
///
/// `user_template_dir` may contain `html/table.tera` or `markdown/table.tera`
/// overriding the embedded defaults. Create once and reuse.
pub struct TableRenderer {
    tera: Tera,
}

impl TableRenderer {
    /// Construct a new [`TableRenderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template_dir(None)
    }

    /// Construct a renderer, loading overrides found in `user_template_dir`.
    pub fn with_template_dir(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TableRenderer { tera })
    }

    /// Render `set` as a `kind` table in `format`.
    ///
    /// An empty set renders a header-only table.
    pub fn render(
        &self,
        set: &AttributeSet,
        kind: AttributeKind,
        format: TableFormat,
    ) -> Result<String, RenderError> {
        let rows = build_rows(set, kind);
        let ctx = TableContext::new(kind, &rows, format);
        self.render_context(&ctx, format)
    }

    /// Render a caller-provided [`TableContext`].
    pub fn render_context(
        &self,
        ctx: &TableContext,
        format: TableFormat,
    ) -> Result<String, RenderError> {
        let rendered = self.tera.render(format.template_name(), &ctx.to_tera_context()?)?;
        Ok(match format {
            TableFormat::Html => rendered.replace(['\r', '\n'], ""),
            TableFormat::Markdown => rendered.replace("\r\n", "\n"),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use actiondocs_core::AttributeEntry;

    fn token_set() -> AttributeSet {
        AttributeSet(vec![AttributeEntry::named("token")
            .with_description("Auth token.")
            .with_required(true)])
    }

    #[test]
    fn renderer_new_succeeds() {
        TableRenderer::new().expect("TableRenderer::new should succeed with embedded templates");
    }

    #[test]
    fn html_inputs_table_is_one_line() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer
            .render(&token_set(), AttributeKind::Inputs, TableFormat::Html)
            .unwrap();
        assert!(!html.contains('\n'));
        assert_eq!(
            html,
            "<table><thead><tr><th>name</th><th>description</th><th>default</th><th>required</th></tr></thead>\
             <tbody><tr><td><p><code>token</code></p></td><td><p>Auth token.</p></td><td></td>\
             <td><p><code>true</code></p></td></tr></tbody></table>"
        );
    }

    #[test]
    fn markdown_outputs_table() {
        let renderer = TableRenderer::new().unwrap();
        let set = AttributeSet(vec![AttributeEntry::named("hit").with_description("Hit.")]);
        let md = renderer
            .render(&set, AttributeKind::Outputs, TableFormat::Markdown)
            .unwrap();
        assert_eq!(
            md,
            "| name | description |\n| :--- | :--- |\n| <p><code>hit</code></p> | <p>Hit.</p> |\n"
        );
    }

    #[test]
    fn empty_set_renders_header_only() {
        let renderer = TableRenderer::new().unwrap();
        let html = renderer
            .render(&AttributeSet::default(), AttributeKind::Outputs, TableFormat::Html)
            .unwrap();
        assert_eq!(
            html,
            "<table><thead><tr><th>name</th><th>description</th></tr></thead><tbody></tbody></table>"
        );
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("HTML".parse::<TableFormat>(), Ok(TableFormat::Html));
        assert_eq!("md".parse::<TableFormat>(), Ok(TableFormat::Markdown));
        assert!("csv".parse::<TableFormat>().is_err());
    }

    #[test]
    fn template_names_are_registered() {
        let renderer = TableRenderer::new().unwrap();
        for format in TableFormat::all() {
            let names: Vec<_> = renderer.tera.get_template_names().collect();
            assert!(names.contains(&format.template_name()), "missing {format}");
        }
    }
}
