use std::collections::{BTreeMap, HashMap};

use crate::{openapi::Tag, spec::Model};

/// Tag names attached to every operation acting on `model`.
pub(crate) fn operation_tags(model: &Model) -> Vec<String> {
  [&model.group, &model.package]
    .into_iter()
    .filter(|name| !name.is_empty())
    .cloned()
    .collect()
}

fn model_tags(model: &Model) -> Vec<Tag> {
  let group = Tag {
    name: model.group.clone(),
    description: Some(format!("This tag is for group '{}'", model.group)),
  };
  let package = Tag {
    name: model.package.clone(),
    description: Some(format!("This tag is for package '{}'", model.package)),
  };

  [group, package].into_iter().filter(|tag| !tag.name.is_empty()).collect()
}

/// Document-level tags collected from converted models.
#[derive(Debug, Default)]
pub(crate) struct TagRegistry {
  global: BTreeMap<String, Tag>,
  per_model: HashMap<String, Vec<Tag>>,
}

impl TagRegistry {
  pub(crate) fn record(&mut self, model: &Model) {
    let tags = model_tags(model);
    for tag in &tags {
      self.global.insert(tag.name.clone(), tag.clone());
    }
    self.per_model.insert(model.rest_name.clone(), tags);
  }

  /// Every recorded tag, one per name, sorted by name.
  pub(crate) fn global(&self) -> Vec<Tag> {
    self.global.values().cloned().collect()
  }

  pub(crate) fn for_model(&self, rest_name: &str) -> Vec<Tag> {
    self.per_model.get(rest_name).cloned().unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn model(rest_name: &str, group: &str, package: &str) -> Model {
    Model::builder()
      .rest_name(rest_name)
      .resource_name(format!("{rest_name}s"))
      .group(group)
      .package(package)
      .build()
  }

  #[test]
  fn test_global_tags_are_unique_and_sorted() {
    let mut registry = TagRegistry::default();
    registry.record(&model("task", "core", "todo"));
    registry.record(&model("note", "core", "notes"));

    let names: Vec<_> = registry.global().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["core", "notes", "todo"]);
  }

  #[test]
  fn test_model_tags_keep_group_then_package() {
    let mut registry = TagRegistry::default();
    registry.record(&model("task", "core", "todo"));

    let tags = registry.for_model("task");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].description.as_deref(), Some("This tag is for group 'core'"));
    assert_eq!(tags[1].description.as_deref(), Some("This tag is for package 'todo'"));
    assert!(registry.for_model("note").is_empty());
  }

  #[test]
  fn test_operation_tags_skip_empty_names() {
    assert_eq!(operation_tags(&model("task", "core", "")), vec!["core".to_string()]);
  }
}
