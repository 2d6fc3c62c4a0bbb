//! # actiondocs-renderer
//!
//! Turns an [`AttributeSet`](actiondocs_core::AttributeSet) into an HTML or
//! Markdown table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actiondocs_core::{ActionMetadata, AttributeKind};
//! use actiondocs_renderer::{TableFormat, TableRenderer};
//!
//! fn print_inputs(meta: &ActionMetadata) {
//!     if let (Ok(renderer), Some(inputs)) = (TableRenderer::new(), &meta.inputs) {
//!         if let Ok(table) = renderer.render(inputs, AttributeKind::Inputs, TableFormat::Html) {
//!             println!("{table}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod markdown;
pub mod rows;

pub use context::TableContext;
pub use engine::{TableFormat, TableRenderer};
pub use error::RenderError;
pub use rows::{build_rows, pretty_code, Row};
