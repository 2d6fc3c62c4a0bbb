//! Metadata loading and patch-config integration tests.

use assert_fs::prelude::*;
use actiondocs_core::{
    config::CONFIG_FILE_NAME,
    metadata::{load_metadata, parse_metadata},
    AttributeKind, DocTarget, LoadError, PatchConfig, Scalar,
};
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::Path;

const CACHE_ACTION: &str = r#"name: Cache
description: Cache artifacts like dependencies and build outputs.
inputs:
  primary-key:
    description: A key for restoring and saving the cache.
    required: true
  paths:
    description: |
      A list of files, directories, and wildcard patterns to cache.
    default: ""
  gc-max-store-size:
    description: Maximum Nix store size in bytes.
  save:
    description: Whether to save the cache.
    default: true
outputs:
  hit:
    description: A boolean value to indicate a match was found.
runs:
  using: node20
  main: dist/restore/index.js
branding:
  icon: archive
"#;

// ---------------------------------------------------------------------------
// 1. Load
// ---------------------------------------------------------------------------

#[test]
fn load_realistic_action() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let action = root.child("action.yml");
    action.write_str(CACHE_ACTION).expect("write");

    let meta = load_metadata(action.path()).expect("load");
    let inputs = meta.attributes(AttributeKind::Inputs).expect("inputs");
    let names: Vec<_> = inputs.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["primary-key", "paths", "gc-max-store-size", "save"]);

    let paths = inputs.get("paths").unwrap();
    assert_eq!(paths.default, Some(Scalar::from("")));
    assert!(paths.description.as_deref().unwrap().starts_with("A list of files"));
    assert_eq!(inputs.get("gc-max-store-size").unwrap().default, None);
    assert_eq!(inputs.get("save").unwrap().default, Some(Scalar::Bool(true)));

    assert_eq!(meta.attributes(AttributeKind::Outputs).map(|s| s.len()), Some(1));
}

#[test]
fn load_missing_file_reports_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let err = load_metadata(&root.path().join("restore").join("action.yml")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("restore"));
}

#[rstest]
#[case::unclosed_flow(b"inputs: [unclosed\n".as_slice())]
#[case::top_level_list(b"- this is a list, not a mapping\n".as_slice())]
#[case::inputs_as_list(b"inputs:\n  - a\n  - b\n".as_slice())]
#[case::required_as_text(b"inputs:\n  a:\n    required: maybe\n".as_slice())]
fn malformed_metadata_returns_parse_error(#[case] contents: &[u8]) {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let action = root.child("action.yml");
    action.write_binary(contents).expect("write");

    let err = load_metadata(action.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("action.yml"));
}

#[rstest]
#[case("default: 0", "0")]
#[case("default: 1.5", "1.5")]
#[case("default: false", "false")]
#[case("default: ubuntu-latest", "ubuntu-latest")]
#[case("default: '${{ github.token }}'", "${{ github.token }}")]
fn default_scalars_display_as_written(#[case] line: &str, #[case] expected: &str) {
    let yaml = format!("inputs:\n  x:\n    {line}\n");
    let meta = parse_metadata(Path::new("action.yml"), &yaml).expect("parse");
    let default = meta.inputs.unwrap().get("x").unwrap().default.clone().expect("default");
    assert_eq!(default.to_string(), expected);
}

#[rstest]
#[case::quoted_false("required: 'false'", false)]
#[case::quoted_true("required: \"true\"", true)]
#[case::capitalised("required: 'True'", true)]
#[case::plain_bool("required: false", false)]
fn quoted_required_loads_as_bool(#[case] line: &str, #[case] expected: bool) {
    let yaml = format!("inputs:\n  a:\n    description: x\n    {line}\n");
    let meta = parse_metadata(Path::new("action.yml"), &yaml).expect("parse");
    assert_eq!(meta.inputs.unwrap().get("a").unwrap().required, Some(expected));
}

#[test]
fn loading_never_touches_the_file() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let action = root.child("action.yml");
    action.write_str(CACHE_ACTION).expect("write");
    load_metadata(action.path()).expect("load");
    action.assert(predicate::str::diff(CACHE_ACTION));
}

// ---------------------------------------------------------------------------
// 2. Patch config
// ---------------------------------------------------------------------------

#[test]
fn discover_prefers_config_file() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child(CONFIG_FILE_NAME)
        .write_str(
            "targets:\n  - metadata: action.yml\n    heading_level: 2\n    document: docs/README.md\n",
        )
        .expect("write");

    let config = PatchConfig::discover(root.path()).expect("discover");
    assert_eq!(
        config.targets,
        vec![DocTarget::new("action.yml", true, 2).with_document("docs/README.md")]
    );
}

#[test]
fn discover_surfaces_broken_config() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child(CONFIG_FILE_NAME)
        .write_str("targets: {not: a list}\n")
        .expect("write");
    let err = PatchConfig::discover(root.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "got: {err}");
}

#[test]
fn resolve_keeps_flags() {
    let config = PatchConfig::default_targets().resolve(Path::new("/repo"));
    let save = &config.targets[0];
    assert_eq!(save.metadata, Path::new("/repo/save/action.yml"));
    assert_eq!(save.document_path(), Path::new("/repo/save/README.md"));
    assert!(!save.has_outputs);
}
