use std::collections::BTreeMap;

use super::{
  parameters::{PARAM_NAME_ID, build_query_parameters, insert_path_id_parameter},
  tags::operation_tags,
};
use crate::{
  error::{Error, Result},
  openapi::{Operation, PathItem, RequestBody, Response, Schema, SchemaRef, json_content},
  spec::{Action, Model, Relation, SpecificationSet},
};

pub(crate) type PathItems = BTreeMap<String, PathItem>;

const OK_STATUS: &str = "200";
const OK_DESCRIPTION: &str = "n/a";

#[derive(Debug, Clone, Copy)]
enum ByIdVerb {
  Get,
  Update,
  Delete,
}

impl ByIdVerb {
  const fn as_str(self) -> &'static str {
    match self {
      Self::Get => "get",
      Self::Update => "update",
      Self::Delete => "delete",
    }
  }

  const fn takes_body(self) -> bool {
    matches!(self, Self::Update)
  }
}

/// Turns model and relation actions into path items.
pub(crate) struct PathSynthesizer<'a> {
  spec_set: &'a SpecificationSet,
  skip_private_models: bool,
}

impl<'a> PathSynthesizer<'a> {
  pub(crate) fn new(spec_set: &'a SpecificationSet, skip_private_models: bool) -> Self {
    Self {
      spec_set,
      skip_private_models,
    }
  }

  /// `/{resourceName}` collection paths for the relations of the root model.
  pub(crate) fn root_relations(&self, relations: &[Relation]) -> Result<PathItems> {
    let mut paths = PathItems::new();

    for relation in relations.iter().filter(|r| r.has_actions()) {
      let Some(target) = self.relation_target(relation)? else {
        continue;
      };

      let item = PathItem {
        get: relation.get.as_ref().map(|action| retrieve_all(action, target, None)),
        post: relation.create.as_ref().map(|action| create(action, target, None)),
        ..Default::default()
      };

      paths.insert(format!("/{}", target.resource_name), item);
    }

    Ok(paths)
  }

  /// `/{parent}/{id}/{child}` collection paths for the relations of a
  /// non-root model.
  pub(crate) fn nested_relations(&self, parent: &Model, relations: &[Relation]) -> Result<PathItems> {
    let mut paths = PathItems::new();

    for relation in relations.iter().filter(|r| r.has_actions()) {
      let Some(target) = self.relation_target(relation)? else {
        continue;
      };

      let mut item = PathItem {
        get: relation
          .get
          .as_ref()
          .map(|action| retrieve_all(action, target, Some(parent))),
        post: relation
          .create
          .as_ref()
          .map(|action| create(action, target, Some(parent))),
        ..Default::default()
      };
      insert_path_id_parameter(&mut item.parameters);

      let uri = format!(
        "/{}/{{{PARAM_NAME_ID}}}/{}",
        parent.resource_name, target.resource_name
      );
      paths.insert(uri, item);
    }

    Ok(paths)
  }

  /// `/{resourceName}/{id}` path for the get/update/delete actions of a
  /// non-root model.
  pub(crate) fn model_singleton(&self, model: &Model) -> Option<(String, PathItem)> {
    if !model.has_singleton_actions() {
      return None;
    }

    let mut item = PathItem {
      get: model.get.as_ref().map(|action| by_id(ByIdVerb::Get, action, model)),
      put: model.update.as_ref().map(|action| by_id(ByIdVerb::Update, action, model)),
      delete: model.delete.as_ref().map(|action| by_id(ByIdVerb::Delete, action, model)),
      ..Default::default()
    };
    insert_path_id_parameter(&mut item.parameters);

    Some((format!("/{}/{{{PARAM_NAME_ID}}}", model.resource_name), item))
  }

  /// Resolves the model a relation points at, or `None` when that model is
  /// private and private models are skipped.
  fn relation_target(&self, relation: &Relation) -> Result<Option<&'a Model>> {
    let spec = self
      .spec_set
      .specification(&relation.rest_name)
      .ok_or_else(|| Error::RelationTargetMissing {
        rest_name: relation.rest_name.clone(),
      })?;

    let model = spec.model();
    if self.skip_private_models && model.private {
      tracing::debug!(target_model = %model.rest_name, "skipping relation to private model");
      return Ok(None);
    }

    Ok(Some(model))
  }
}

fn retrieve_all(action: &Action, target: &Model, parent: Option<&Model>) -> Operation {
  let body = Schema::array(SchemaRef::component(&target.rest_name)).into_ref();

  Operation {
    tags: operation_tags(target),
    description: action_description(action),
    operation_id: Some(operation_id(format!("get-all-{}", target.resource_name), parent)),
    parameters: build_query_parameters(action.parameter_definition.as_ref()),
    request_body: None,
    responses: ok_response(body),
  }
}

fn create(action: &Action, target: &Model, parent: Option<&Model>) -> Operation {
  let body = SchemaRef::component(&target.rest_name);

  Operation {
    tags: operation_tags(target),
    description: action_description(action),
    operation_id: Some(operation_id(format!("create-a-new-{}", target.rest_name), parent)),
    parameters: build_query_parameters(action.parameter_definition.as_ref()),
    request_body: Some(RequestBody {
      content: json_content(body.clone()),
    }),
    responses: ok_response(body),
  }
}

fn by_id(verb: ByIdVerb, action: &Action, model: &Model) -> Operation {
  let body = SchemaRef::component(&model.rest_name);

  Operation {
    tags: operation_tags(model),
    description: action_description(action),
    operation_id: Some(format!("{}-{}-by-id", verb.as_str(), model.rest_name)),
    parameters: build_query_parameters(action.parameter_definition.as_ref()),
    request_body: verb.takes_body().then(|| RequestBody {
      content: json_content(body.clone()),
    }),
    responses: ok_response(body),
  }
}

fn operation_id(base: String, parent: Option<&Model>) -> String {
  match parent {
    Some(parent) => format!("{base}-for-a-given-{}", parent.rest_name),
    None => base,
  }
}

fn action_description(action: &Action) -> Option<String> {
  action.description.clone().filter(|d| !d.is_empty())
}

// TODO: model 4xx/5xx responses once actions declare their error payloads.
fn ok_response(schema: SchemaRef) -> BTreeMap<String, Response> {
  BTreeMap::from([(
    OK_STATUS.to_string(),
    Response {
      description: OK_DESCRIPTION.to_string(),
      content: json_content(schema),
    },
  )])
}
