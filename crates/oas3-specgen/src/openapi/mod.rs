//! OpenAPI 3.0.3 document model emitted by the generator.
//!
//! Only the parts of the specification the generator produces are modeled.
//! Maps are `BTreeMap`s so the serialized output is deterministic.

mod schema;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use schema::{Schema, SchemaRef, SchemaType};

pub const OPENAPI_VERSION: &str = "3.0.3";
pub const APPLICATION_JSON: &str = "application/json";
pub const TERMS_OF_SERVICE_PLACEHOLDER: &str = "https://localhost/TODO";
pub const LICENSE_PLACEHOLDER: &str = "TODO";

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
  !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
  pub openapi: String,
  pub info: Info,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<Tag>,
  #[serde(default)]
  pub paths: BTreeMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
}

impl Document {
  pub fn new(info: Info) -> Self {
    Self {
      openapi: OPENAPI_VERSION.to_string(),
      info,
      tags: Vec::new(),
      paths: BTreeMap::new(),
      components: Components::default(),
    }
  }

  pub fn operation_count(&self) -> usize {
    self.paths.values().map(PathItem::operation_count).sum()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
  pub title: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub terms_of_service: String,
  pub contact: Contact,
  pub license: License,
  pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub schemas: BTreeMap<String, SchemaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<Parameter>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub get: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub put: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub post: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delete: Option<Operation>,
}

impl PathItem {
  pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
    [
      ("get", self.get.as_ref()),
      ("put", self.put.as_ref()),
      ("post", self.post.as_ref()),
      ("delete", self.delete.as_ref()),
    ]
    .into_iter()
    .filter_map(|(method, op)| op.map(|op| (method, op)))
  }

  pub fn operation_count(&self) -> usize {
    self.operations().count()
  }

  pub fn visit_refs_mut(&mut self, visit: &mut impl FnMut(&mut String)) {
    for param in &mut self.parameters {
      param.visit_refs_mut(visit);
    }
    for op in [&mut self.get, &mut self.put, &mut self.post, &mut self.delete]
      .into_iter()
      .flatten()
    {
      op.visit_refs_mut(visit);
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<Parameter>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub request_body: Option<RequestBody>,
  #[serde(default)]
  pub responses: BTreeMap<String, Response>,
}

impl Operation {
  fn visit_refs_mut(&mut self, visit: &mut impl FnMut(&mut String)) {
    for param in &mut self.parameters {
      param.visit_refs_mut(visit);
    }
    if let Some(body) = &mut self.request_body {
      visit_content_refs(&mut body.content, visit);
    }
    for response in self.responses.values_mut() {
      visit_content_refs(&mut response.content, visit);
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
  Query,
  Path,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterLocation,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "is_false")]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub example: Option<Value>,
}

impl Parameter {
  fn visit_refs_mut(&mut self, visit: &mut impl FnMut(&mut String)) {
    if let Some(schema) = &mut self.schema {
      schema.visit_refs_mut(visit);
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
  pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
  pub description: String,
  #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
  pub content: BTreeMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaRef>,
}

/// `application/json` content carrying `schema`.
pub fn json_content(schema: SchemaRef) -> BTreeMap<String, MediaType> {
  BTreeMap::from([(APPLICATION_JSON.to_string(), MediaType { schema: Some(schema) })])
}

fn visit_content_refs(content: &mut BTreeMap<String, MediaType>, visit: &mut impl FnMut(&mut String)) {
  for media in content.values_mut() {
    if let Some(schema) = &mut media.schema {
      schema.visit_refs_mut(visit);
    }
  }
}
