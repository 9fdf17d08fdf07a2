use serde::Deserialize;

use super::parameter::ParameterDefinition;

/// A model-level or relation-level action such as `get` or `create`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Action {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default, rename = "parameters")]
  pub parameter_definition: Option<ParameterDefinition>,
}

impl Action {
  pub fn new(description: impl Into<String>) -> Self {
    Self {
      description: Some(description.into()),
      parameter_definition: None,
    }
  }

  #[must_use]
  pub fn with_parameters(mut self, parameters: ParameterDefinition) -> Self {
    self.parameter_definition = Some(parameters);
    self
  }
}

/// Metadata and top-level actions of one resource.
#[derive(Debug, Clone, PartialEq, Deserialize, bon::Builder)]
pub struct Model {
  #[builder(into)]
  pub rest_name: String,
  #[builder(into)]
  pub resource_name: String,
  #[builder(into, default)]
  #[serde(default)]
  pub entity_name: String,
  #[builder(into, default)]
  #[serde(default)]
  pub package: String,
  #[builder(into, default)]
  #[serde(default)]
  pub group: String,
  #[builder(into)]
  #[serde(default)]
  pub description: Option<String>,
  #[builder(default)]
  #[serde(default)]
  pub private: bool,
  #[builder(default)]
  #[serde(default, rename = "root")]
  pub is_root: bool,
  pub get: Option<Action>,
  pub update: Option<Action>,
  pub delete: Option<Action>,
}

impl Model {
  pub(crate) fn has_singleton_actions(&self) -> bool {
    self.get.is_some() || self.update.is_some() || self.delete.is_some()
  }
}

/// A parent to child association exposing nested collection actions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relation {
  pub rest_name: String,
  #[serde(default)]
  pub get: Option<Action>,
  #[serde(default)]
  pub create: Option<Action>,
}

impl Relation {
  pub fn new(rest_name: impl Into<String>) -> Self {
    Self {
      rest_name: rest_name.into(),
      get: None,
      create: None,
    }
  }

  #[must_use]
  pub fn with_get(mut self, action: Action) -> Self {
    self.get = Some(action);
    self
  }

  #[must_use]
  pub fn with_create(mut self, action: Action) -> Self {
    self.create = Some(action);
    self
  }

  pub(crate) fn has_actions(&self) -> bool {
    self.get.is_some() || self.create.is_some()
  }
}
