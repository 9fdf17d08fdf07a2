use std::collections::BTreeMap;

use serde::Deserialize;

/// Target format name used for OpenAPI 3 schema fragments.
pub const OPENAPI3_FORMAT: &str = "openapi3";

/// One mapping of an external subtype for a target format.
///
/// For the `openapi3` format `type_fragment` holds a literal JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeMappingEntry {
  #[serde(rename = "type")]
  pub type_fragment: String,
  #[serde(default)]
  pub init: Option<String>,
  #[serde(default)]
  pub import: Option<String>,
}

/// Lookup table from external attribute subtypes to per-format fragments.
///
/// Mirrors the `_type.mapping` file layout:
///
/// ```yaml
/// '[]byte':
///   openapi3:
///     type: '{"type": "string"}'
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
  entries: BTreeMap<String, BTreeMap<String, TypeMappingEntry>>,
}

impl TypeMapping {
  pub fn mapping(&self, format: &str, subtype: &str) -> Option<&TypeMappingEntry> {
    self.entries.get(subtype)?.get(format)
  }

  pub fn insert(&mut self, subtype: impl Into<String>, format: impl Into<String>, fragment: impl Into<String>) {
    self.entries.entry(subtype.into()).or_default().insert(
      format.into(),
      TypeMappingEntry {
        type_fragment: fragment.into(),
        init: None,
        import: None,
      },
    );
  }

  #[must_use]
  pub fn with(mut self, subtype: impl Into<String>, format: impl Into<String>, fragment: impl Into<String>) -> Self {
    self.insert(subtype, format, fragment);
    self
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_by_format_and_subtype() {
    let mapping = TypeMapping::default()
      .with("[]byte", OPENAPI3_FORMAT, r#"{"type":"string"}"#)
      .with("[]byte", "elemental", "[]byte");

    assert_eq!(
      mapping.mapping(OPENAPI3_FORMAT, "[]byte").map(|e| e.type_fragment.as_str()),
      Some(r#"{"type":"string"}"#)
    );
    assert!(mapping.mapping(OPENAPI3_FORMAT, "json.RawMessage").is_none());
    assert!(mapping.mapping("typescript", "[]byte").is_none());
    assert_eq!(mapping.len(), 1);
  }

  #[test]
  fn test_parse_type_mapping_file() {
    let raw = "'map[string]string':\n  openapi3:\n    type: |-\n      {\n        \"type\": \"object\"\n      }\n";
    let mapping: TypeMapping = serde_yaml::from_str(raw).unwrap();

    let entry = mapping.mapping(OPENAPI3_FORMAT, "map[string]string").unwrap();
    let fragment: serde_json::Value = serde_json::from_str(&entry.type_fragment).unwrap();
    assert_eq!(fragment, serde_json::json!({"type": "object"}));
  }
}
