//! Row builder: one row of pre-HTML cell text per attribute.
//!
//! Cell rules:
//! - name is always a code span;
//! - `default` absent renders as an empty cell, `""` as `` `""` ``;
//! - `required` absent renders like `required: false`;
//! - booleans render as lowercase `true`/`false` code spans.

use actiondocs_core::{AttributeEntry, AttributeKind, AttributeSet, Scalar};

/// Ordered cell strings of one table row.
pub type Row = Vec<String>;

/// Render a scalar as an inline code span.
pub fn pretty_code(value: &Scalar) -> String {
    match value {
        Scalar::String(s) if s.is_empty() => r#"`""`"#.to_string(),
        Scalar::Bool(b) => format!("`{b}`"),
        other => code_span(&other.to_string()),
    }
}

/// Wrap `text` in backticks, widening the fence when the text itself has one.
fn code_span(text: &str) -> String {
    if text.contains('`') {
        format!("`` {text} ``")
    } else {
        format!("`{text}`")
    }
}

/// Build rows for every entry of `set`, in order. No header row.
pub fn build_rows(set: &AttributeSet, kind: AttributeKind) -> Vec<Row> {
    set.iter().map(|entry| build_row(entry, kind)).collect()
}

fn build_row(entry: &AttributeEntry, kind: AttributeKind) -> Row {
    let mut row = vec![
        code_span(&entry.name),
        entry.description.clone().unwrap_or_default(),
    ];
    if kind.has_extra_columns() {
        row.push(entry.default.as_ref().map(pretty_code).unwrap_or_default());
        row.push(pretty_code(&Scalar::Bool(entry.is_required())));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: Vec<AttributeEntry>) -> AttributeSet {
        AttributeSet(entries)
    }

    #[test]
    fn full_input_row() {
        let rows = build_rows(
            &set(vec![AttributeEntry::named("a")
                .with_description("d")
                .with_default("v")
                .with_required(true)]),
            AttributeKind::Inputs,
        );
        assert_eq!(rows, vec![vec!["`a`", "d", "`v`", "`true`"]]);
    }

    #[test]
    fn empty_default_differs_from_absent_default() {
        let rows = build_rows(
            &set(vec![
                AttributeEntry::named("empty").with_default(""),
                AttributeEntry::named("absent"),
            ]),
            AttributeKind::Inputs,
        );
        assert_eq!(rows[0][2], r#"`""`"#);
        assert_eq!(rows[1][2], "");
    }

    #[test]
    fn absent_required_matches_false() {
        let rows = build_rows(
            &set(vec![
                AttributeEntry::named("absent"),
                AttributeEntry::named("explicit").with_required(false),
            ]),
            AttributeKind::Inputs,
        );
        assert_eq!(rows[0][3], rows[1][3]);
        assert_eq!(rows[0][3], "`false`");
    }

    #[test]
    fn output_rows_have_two_cells() {
        let rows = build_rows(
            &set(vec![AttributeEntry::named("hit")
                .with_description("Cache hit.")
                .with_default("x")
                .with_required(true)]),
            AttributeKind::Outputs,
        );
        assert_eq!(rows, vec![vec!["`hit`", "Cache hit."]]);
    }

    #[test]
    fn boolean_false_default_is_explicit() {
        assert_eq!(pretty_code(&Scalar::Bool(false)), "`false`");
    }

    #[test]
    fn backtick_in_value_widens_fence() {
        assert_eq!(pretty_code(&Scalar::from("a`b")), "`` a`b ``");
    }
}
