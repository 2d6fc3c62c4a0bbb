//! actiondocs core library: metadata types, loading, patch configuration, errors.
//!
//! - [`types`]: attribute entries, attribute sets, action metadata
//! - [`metadata`]: load an `action.yml` into [`ActionMetadata`]
//! - [`config`]: the list of documents to patch
//! - [`error`]: [`LoadError`]

pub mod config;
pub mod error;
pub mod metadata;
pub mod types;

pub use config::{DocTarget, PatchConfig};
pub use error::LoadError;
pub use types::{ActionMetadata, AttributeEntry, AttributeKind, AttributeSet, Scalar};
