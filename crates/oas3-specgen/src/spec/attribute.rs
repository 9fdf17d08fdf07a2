use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// The closed set of types an attribute can declare.
///
/// Parsed from the camelCase names used in specification files
/// (`string`, `refList`, `external`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String")]
pub enum AttributeType {
  String,
  Int,
  Float,
  Bool,
  Time,
  Enum,
  Object,
  List,
  Ref,
  RefList,
  RefMap,
  External,
}

impl AttributeType {
  /// Parses a type name, reporting unknown names as
  /// [`Error::UnhandledAttributeType`].
  pub fn parse(name: &str) -> Result<Self, Error> {
    name
      .parse()
      .map_err(|_| Error::UnhandledAttributeType(name.to_string()))
  }
}

impl TryFrom<String> for AttributeType {
  type Error = Error;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::parse(&value)
  }
}

/// One attribute of a model.
#[derive(Debug, Clone, PartialEq, Deserialize, bon::Builder)]
pub struct Attribute {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  #[serde(default)]
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub attr_type: AttributeType,
  /// Element type for `list`, referenced schema for `ref`/`refList`/`refMap`,
  /// mapping key for `external`.
  #[builder(into)]
  #[serde(default)]
  pub subtype: Option<String>,
  #[builder(default)]
  #[serde(default)]
  pub required: bool,
  #[builder(default)]
  #[serde(default)]
  pub exposed: bool,
  #[serde(default)]
  pub default_value: Option<Value>,
  #[serde(default)]
  pub example_value: Option<Value>,
  #[builder(default)]
  #[serde(default)]
  pub read_only: bool,
  #[builder(default)]
  #[serde(default)]
  pub deprecated: bool,
  #[builder(default)]
  #[serde(default)]
  pub allowed_choices: Vec<String>,
}
