use serde::Deserialize;
use serde_json::Value;

/// Types a query parameter can declare.
///
/// Unlike attribute types this set is open: names that are not recognized
/// land in [`ParameterType::Unsupported`] and are dropped during conversion.
#[derive(Debug, Clone, PartialEq, Eq, strum::EnumString, strum::Display, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String")]
pub enum ParameterType {
  Integer,
  Boolean,
  String,
  Float,
  Time,
  Duration,
  Enum,
  #[strum(default)]
  Unsupported(String),
}

impl From<String> for ParameterType {
  fn from(value: String) -> Self {
    value.parse().unwrap_or(Self::Unsupported(value))
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize, bon::Builder)]
pub struct Parameter {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  #[serde(default)]
  pub description: Option<String>,
  #[serde(rename = "type")]
  pub param_type: ParameterType,
  #[serde(default)]
  pub default_value: Option<Value>,
  #[serde(default)]
  pub example_value: Option<Value>,
  #[builder(default)]
  #[serde(default)]
  pub allowed_choices: Vec<String>,
  #[builder(default)]
  #[serde(default)]
  pub multiple: bool,
}

/// Ordered parameter entries of an action. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParameterDefinition {
  #[serde(default)]
  pub entries: Vec<Parameter>,
}

impl ParameterDefinition {
  pub fn new(entries: impl IntoIterator<Item = Parameter>) -> Self {
    Self {
      entries: entries.into_iter().collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parameter_type_names() {
    assert_eq!(ParameterType::from("integer".to_string()), ParameterType::Integer);
    assert_eq!(ParameterType::from("duration".to_string()), ParameterType::Duration);
    assert_eq!(
      ParameterType::from("geo".to_string()),
      ParameterType::Unsupported("geo".to_string())
    );
  }

  #[test]
  fn test_parameter_definition_from_yaml() {
    let def: ParameterDefinition = serde_yaml::from_str(
      "entries:\n- name: q\n  type: string\n  default_value: all\n- name: when\n  type: time\n",
    )
    .unwrap();

    assert_eq!(def.entries.len(), 2);
    assert_eq!(def.entries[0].default_value, Some(Value::String("all".to_string())));
    assert_eq!(def.entries[1].param_type, ParameterType::Time);
  }
}
