//! Input model of a REST resource specification set.
//!
//! A set holds one [`Specification`] per resource, the set-wide
//! [`SpecConfig`] and the [`TypeMapping`] table used for external attribute
//! types. Everything here is read-only once loaded.

mod attribute;
mod loader;
mod model;
mod parameter;
mod type_mapping;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use attribute::{Attribute, AttributeType};
pub use loader::{CONFIG_FILE_NAME, SPEC_FILE_EXTENSION, SpecSetLoader, TYPE_MAPPING_FILE_NAME};
pub use model::{Action, Model, Relation};
pub use parameter::{Parameter, ParameterDefinition, ParameterType};
pub use type_mapping::{OPENAPI3_FORMAT, TypeMapping, TypeMappingEntry};

/// Set-wide metadata, used to fill the `info` object of every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpecConfig {
  pub name: String,
  pub version: String,
  pub description: Option<String>,
  pub author: String,
  pub url: String,
  pub email: String,
}

/// One resource: its model, versioned attributes and relations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Specification {
  model: Model,
  #[serde(default)]
  attributes: BTreeMap<String, Vec<Attribute>>,
  #[serde(default)]
  relations: Vec<Relation>,
}

impl Specification {
  pub fn new(model: Model) -> Self {
    Self {
      model,
      attributes: BTreeMap::new(),
      relations: Vec::new(),
    }
  }

  #[must_use]
  pub fn with_attributes(mut self, version: impl Into<String>, attributes: Vec<Attribute>) -> Self {
    self.attributes.entry(version.into()).or_default().extend(attributes);
    self
  }

  #[must_use]
  pub fn with_relations(mut self, relations: Vec<Relation>) -> Self {
    self.relations.extend(relations);
    self
  }

  pub fn model(&self) -> &Model {
    &self.model
  }

  /// Returns the attributes of one version, or of every version in version
  /// order when `version` is `None`.
  pub fn attributes(&self, version: Option<&str>) -> Vec<&Attribute> {
    match version {
      Some(version) => self
        .attributes
        .get(version)
        .map(|attrs| attrs.iter().collect())
        .unwrap_or_default(),
      None => self.attributes.values().flatten().collect(),
    }
  }

  pub fn relations(&self) -> &[Relation] {
    &self.relations
  }
}

/// All specifications of one API, keyed by `rest_name`.
#[derive(Debug, Clone, Default)]
pub struct SpecificationSet {
  config: SpecConfig,
  type_mapping: TypeMapping,
  specs: BTreeMap<String, Specification>,
}

impl SpecificationSet {
  pub fn new(config: SpecConfig, type_mapping: TypeMapping, specs: impl IntoIterator<Item = Specification>) -> Self {
    let specs = specs
      .into_iter()
      .map(|spec| (spec.model.rest_name.clone(), spec))
      .collect();

    Self {
      config,
      type_mapping,
      specs,
    }
  }

  /// Iterates specifications ordered by `rest_name`.
  pub fn specifications(&self) -> impl Iterator<Item = &Specification> {
    self.specs.values()
  }

  pub fn specification(&self, rest_name: &str) -> Option<&Specification> {
    self.specs.get(rest_name)
  }

  pub fn configuration(&self) -> &SpecConfig {
    &self.config
  }

  pub fn type_mapping(&self) -> &TypeMapping {
    &self.type_mapping
  }

  pub fn len(&self) -> usize {
    self.specs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.specs.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task_spec() -> Specification {
    let raw = r"
model:
  rest_name: task
  resource_name: tasks
  entity_name: Task
  package: todo
  group: core
  description: Represents a task.
attributes:
  v1:
  - name: name
    type: string
    exposed: true
  v2:
  - name: status
    type: enum
    allowed_choices: [Open, Done]
    exposed: true
relations:
- rest_name: comment
  get:
    description: Retrieves the comments.
";
    serde_yaml::from_str(raw).unwrap()
  }

  #[test]
  fn test_attributes_all_versions() {
    let spec = task_spec();
    let names: Vec<_> = spec.attributes(None).iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["name", "status"]);
  }

  #[test]
  fn test_attributes_single_version() {
    let spec = task_spec();
    let names: Vec<_> = spec.attributes(Some("v2")).iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["status"]);
    assert!(spec.attributes(Some("v9")).is_empty());
  }

  #[test]
  fn test_model_and_relations_from_yaml() {
    let spec = task_spec();
    assert_eq!(spec.model().resource_name, "tasks");
    assert!(!spec.model().is_root);
    assert_eq!(spec.relations().len(), 1);
    assert!(spec.relations()[0].get.is_some());
    assert!(spec.relations()[0].create.is_none());
  }

  #[test]
  fn test_set_lookup_by_rest_name() {
    let set = SpecificationSet::new(SpecConfig::default(), TypeMapping::default(), vec![task_spec()]);
    assert_eq!(set.len(), 1);
    assert!(set.specification("task").is_some());
    assert!(set.specification("tasks").is_none());
  }
}
