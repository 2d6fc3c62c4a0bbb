//! # actiondocs-patch
//!
//! Splices rendered attribute tables into documentation files.
//!
//! Call [`patch_target`] for a single (metadata, document) pair, or
//! [`patch_all`] for every target of a [`PatchConfig`](actiondocs_core::PatchConfig).
//! [`diff_all`] shows what a patch would change without writing.

pub mod diff;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_all, diff_target, FileDiff};
pub use document::{
    heading_marker, patch_document, Document, SectionOutcome, SectionResult,
    HEADING_CONTENT_OFFSET,
};
pub use error::PatchError;
pub use writer::{patch_all, patch_target, render_target, PatchTargetResult, PatchedDocument, WriteResult};
