use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::is_false;
use crate::utils::SCHEMA_REF_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
  String,
  Integer,
  Number,
  Boolean,
  Object,
  Array,
}

/// Either a `$ref` to a component schema or an inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaRef {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(Box<Schema>),
}

impl SchemaRef {
  /// A reference to `#/components/schemas/<name>`.
  pub fn component(name: &str) -> Self {
    Self::Ref {
      ref_path: format!("{SCHEMA_REF_PREFIX}{name}"),
    }
  }

  pub fn as_schema(&self) -> Option<&Schema> {
    match self {
      Self::Object(schema) => Some(schema),
      Self::Ref { .. } => None,
    }
  }

  /// Calls `visit` on every `$ref` path reachable from this node.
  pub fn visit_refs_mut(&mut self, visit: &mut impl FnMut(&mut String)) {
    match self {
      Self::Ref { ref_path } => visit(ref_path),
      Self::Object(schema) => schema.visit_refs_mut(visit),
    }
  }
}

impl From<Schema> for SchemaRef {
  fn from(schema: Schema) -> Self {
    Self::Object(Box::new(schema))
  }
}

/// The subset of the OpenAPI 3.0 schema object this generator emits.
///
/// Keywords outside that subset, which external type fragments may carry,
/// are kept verbatim in `extensions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<SchemaType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub default: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub example: Option<Value>,
  #[serde(default, skip_serializing_if = "is_false")]
  pub deprecated: bool,
  #[serde(default, skip_serializing_if = "is_false")]
  pub read_only: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<SchemaRef>>,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub properties: BTreeMap<String, SchemaRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub additional_properties: Option<Box<SchemaRef>>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(flatten)]
  pub extensions: BTreeMap<String, Value>,
}

impl Schema {
  fn typed(schema_type: SchemaType) -> Self {
    Self {
      schema_type: Some(schema_type),
      ..Default::default()
    }
  }

  pub fn string() -> Self {
    Self::typed(SchemaType::String)
  }

  pub fn integer() -> Self {
    Self::typed(SchemaType::Integer)
  }

  pub fn number() -> Self {
    Self::typed(SchemaType::Number)
  }

  pub fn boolean() -> Self {
    Self::typed(SchemaType::Boolean)
  }

  pub fn date_time() -> Self {
    Self {
      format: Some("date-time".to_string()),
      ..Self::string()
    }
  }

  pub fn object() -> Self {
    Self::typed(SchemaType::Object)
  }

  pub fn array(items: SchemaRef) -> Self {
    Self {
      items: Some(Box::new(items)),
      ..Self::typed(SchemaType::Array)
    }
  }

  pub fn map_of(values: SchemaRef) -> Self {
    Self {
      additional_properties: Some(Box::new(values)),
      ..Self::object()
    }
  }

  /// A schema holding only the `enum` keyword, without a `type`.
  pub fn enumeration(choices: &[String]) -> Self {
    Self {
      enum_values: choices.iter().cloned().map(Value::String).collect(),
      ..Default::default()
    }
  }

  pub fn into_ref(self) -> SchemaRef {
    SchemaRef::from(self)
  }

  pub fn visit_refs_mut(&mut self, visit: &mut impl FnMut(&mut String)) {
    if let Some(items) = self.items.as_deref_mut() {
      items.visit_refs_mut(visit);
    }
    for property in self.properties.values_mut() {
      property.visit_refs_mut(visit);
    }
    if let Some(values) = self.additional_properties.as_deref_mut() {
      values.visit_refs_mut(visit);
    }
    for (keyword, value) in &mut self.extensions {
      visit_raw_refs_mut(keyword, value, visit);
    }
  }
}

/// Walks keywords kept as raw JSON (`allOf`, `oneOf`, `not`, ...) and visits
/// every string stored under a `$ref` key.
fn visit_raw_refs_mut(keyword: &str, value: &mut Value, visit: &mut impl FnMut(&mut String)) {
  match value {
    Value::String(ref_path) if keyword == "$ref" => visit(ref_path),
    Value::Object(entries) => {
      for (key, entry) in entries.iter_mut() {
        visit_raw_refs_mut(key, entry, visit);
      }
    }
    Value::Array(entries) => {
      for entry in entries {
        visit_raw_refs_mut("", entry, visit);
      }
    }
    _ => {}
  }
}
