//! Template context: serializable rendering payload built from rows.

use serde::{Deserialize, Serialize};

use actiondocs_core::AttributeKind;

use crate::engine::TableFormat;
use crate::error::RenderError;
use crate::markdown::inline_html;
use crate::rows::Row;

/// Header, alignment rule, and HTML-converted body cells of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContext {
    pub header: Vec<String>,
    /// Pipe-table alignment row; left-aligned for every column.
    pub rule: Vec<String>,
    pub rows: Vec<Row>,
}

impl TableContext {
    /// Build a [`TableContext`] from raw rows, converting each cell to inline HTML.
    pub fn new(kind: AttributeKind, rows: &[Row], format: TableFormat) -> Self {
        let columns = kind.columns();
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let html = inline_html(cell);
                        match format {
                            TableFormat::Html => html,
                            TableFormat::Markdown => escape_pipes(&html),
                        }
                    })
                    .collect()
            })
            .collect();

        TableContext {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rule: columns.iter().map(|_| ":---".to_string()).collect(),
            rows,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn escape_pipes(cell: &str) -> String {
    cell.replace('|', "\\|")
}
