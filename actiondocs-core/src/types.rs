//! Domain types for action metadata.
//!
//! An `action.yml` carries two optional attribute sets, `inputs` and `outputs`.
//! Each set is an ordered mapping from attribute name to a small spec
//! (`description`, `default`, `required`). Document order is preserved.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which attribute set of an action a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Inputs,
    Outputs,
}

impl AttributeKind {
    /// All kinds in patch order.
    pub fn all() -> &'static [AttributeKind] {
        &[AttributeKind::Inputs, AttributeKind::Outputs]
    }

    /// Top-level key in the metadata document.
    pub fn key(&self) -> &'static str {
        match self {
            AttributeKind::Inputs => "inputs",
            AttributeKind::Outputs => "outputs",
        }
    }

    /// Label used in the documentation heading (`### Inputs`).
    pub fn heading_label(&self) -> &'static str {
        match self {
            AttributeKind::Inputs => "Inputs",
            AttributeKind::Outputs => "Outputs",
        }
    }

    /// Inputs carry the `default` and `required` columns; outputs do not.
    pub fn has_extra_columns(&self) -> bool {
        matches!(self, AttributeKind::Inputs)
    }

    /// Header labels, in column order.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            AttributeKind::Inputs => &["name", "description", "default", "required"],
            AttributeKind::Outputs => &["name", "description"],
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A YAML scalar, as found in an attribute's `default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
}

impl Scalar {
    /// `true` for the empty string, which renders differently from an absent value.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Scalar::String(s) if s.is_empty())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Attribute entries
// ---------------------------------------------------------------------------

/// The value side of one attribute, as written in YAML.
#[derive(Debug, Clone, Default, Deserialize)]
struct AttributeSpec {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default: Option<Scalar>,
    #[serde(default, deserialize_with = "deserialize_required")]
    required: Option<bool>,
}

/// `required` as a YAML boolean, or the quoted text `"true"` / `"false"`
/// (any case). Other text is rejected.
fn deserialize_required<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrText {
        Bool(bool),
        Text(String),
    }

    match Option::<BoolOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrText::Bool(b)) => Ok(Some(b)),
        Some(BoolOrText::Text(text)) => match text.to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(de::Error::invalid_value(
                Unexpected::Str(&text),
                &"a boolean or the text \"true\" / \"false\"",
            )),
        },
    }
}

/// One named input or output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeEntry {
    pub name: String,
    pub description: Option<String>,
    /// `None` when the key is absent (or null); `Some("")` is kept distinct.
    pub default: Option<Scalar>,
    /// `None` when the key is absent; treated as `false`.
    pub required: Option<bool>,
}

impl AttributeEntry {
    /// An entry with only a name; every attribute absent.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Scalar>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// `required`, with absence read as `false`.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    fn from_spec(name: String, spec: AttributeSpec) -> Self {
        Self {
            name,
            description: spec.description,
            default: spec.default,
            required: spec.required,
        }
    }
}

/// Ordered attribute set; order is the order of keys in the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeSet(pub Vec<AttributeEntry>);

impl AttributeSet {
    pub fn iter(&self) -> std::slice::Iter<'_, AttributeEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeEntry> {
        self.0.iter().find(|e| e.name == name)
    }
}

impl FromIterator<AttributeEntry> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AttributeEntry;
    type IntoIter = std::slice::Iter<'a, AttributeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = AttributeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of attribute names to attribute specs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                // A bare `name:` with no body is an entry with every attribute absent.
                while let Some((name, spec)) = map.next_entry::<String, Option<AttributeSpec>>()? {
                    entries.push(AttributeEntry::from_spec(name, spec.unwrap_or_default()));
                }
                Ok(AttributeSet(entries))
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

// ---------------------------------------------------------------------------
// Action metadata
// ---------------------------------------------------------------------------

/// The parts of an `action.yml` this tool reads. Other keys are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ActionMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inputs: Option<AttributeSet>,
    #[serde(default)]
    pub outputs: Option<AttributeSet>,
}

impl ActionMetadata {
    /// The attribute set for `kind`, if the document declares one.
    pub fn attributes(&self, kind: AttributeKind) -> Option<&AttributeSet> {
        match kind {
            AttributeKind::Inputs => self.inputs.as_ref(),
            AttributeKind::Outputs => self.outputs.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_columns() {
        assert_eq!(AttributeKind::Inputs.columns().len(), 4);
        assert_eq!(AttributeKind::Outputs.columns(), &["name", "description"]);
        assert!(AttributeKind::Inputs.has_extra_columns());
        assert!(!AttributeKind::Outputs.has_extra_columns());
    }

    #[test]
    fn kind_display_is_metadata_key() {
        assert_eq!(AttributeKind::Inputs.to_string(), "inputs");
        assert_eq!(AttributeKind::Outputs.heading_label(), "Outputs");
    }

    #[test]
    fn attribute_set_preserves_document_order() {
        let yaml = "zeta: {}\nalpha: {}\nmid: {}\n";
        let set: AttributeSet = serde_yaml::from_str(yaml).expect("parse");
        let names: Vec<_> = set.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn null_entry_body_is_an_empty_entry() {
        let set: AttributeSet = serde_yaml::from_str("token:\n").expect("parse");
        assert_eq!(set.get("token"), Some(&AttributeEntry::named("token")));
    }

    #[test]
    fn scalar_variants() {
        let set: AttributeSet = serde_yaml::from_str(
            "a: {default: true}\nb: {default: 3}\nc: {default: \"\"}\nd: {default: \"true\"}\n",
        )
        .expect("parse");
        assert_eq!(set.get("a").unwrap().default, Some(Scalar::Bool(true)));
        assert!(matches!(set.get("b").unwrap().default, Some(Scalar::Number(_))));
        assert!(set.get("c").unwrap().default.as_ref().unwrap().is_empty_string());
        assert_eq!(set.get("d").unwrap().default, Some(Scalar::from("true")));
    }

    #[test]
    fn quoted_required_reads_as_bool() {
        let set: AttributeSet =
            serde_yaml::from_str("a: {required: 'false'}\nb: {required: \"TRUE\"}\nc: {required: ~}\n")
                .expect("parse");
        assert_eq!(set.get("a").unwrap().required, Some(false));
        assert_eq!(set.get("b").unwrap().required, Some(true));
        assert_eq!(set.get("c").unwrap().required, None);
        assert!(serde_yaml::from_str::<AttributeSet>("a: {required: maybe}\n").is_err());
    }

    #[test]
    fn absent_required_is_false() {
        assert!(!AttributeEntry::named("x").is_required());
        assert!(AttributeEntry::named("x").with_required(true).is_required());
    }
}
