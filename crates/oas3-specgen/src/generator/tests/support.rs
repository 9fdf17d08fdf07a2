use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
  error::Result,
  generator::{Converter, ConverterConfig},
  openapi::Document,
  spec::{Attribute, AttributeType, Model, SpecConfig, Specification, SpecificationSet, TypeMapping},
};

pub(super) fn spec_config() -> SpecConfig {
  SpecConfig {
    name: "gaia".to_string(),
    version: "1.0".to_string(),
    description: Some("This is the API of the platform.".to_string()),
    author: "Aporeto Inc.".to_string(),
    url: "https://go.aporeto.io/api".to_string(),
    email: "dev@aporeto.com".to_string(),
  }
}

pub(super) fn model(rest_name: &str, resource_name: &str) -> Model {
  Model::builder()
    .rest_name(rest_name)
    .resource_name(resource_name)
    .group("core")
    .package(format!("{rest_name}s"))
    .build()
}

pub(super) fn root_model() -> Model {
  Model::builder()
    .rest_name("root")
    .resource_name("root")
    .is_root(true)
    .build()
}

/// An exposed attribute without a subtype.
pub(super) fn exposed(name: &str, attr_type: AttributeType) -> Attribute {
  Attribute::builder().name(name).attr_type(attr_type).exposed(true).build()
}

pub(super) fn exposed_with_subtype(name: &str, attr_type: AttributeType, subtype: &str) -> Attribute {
  Attribute::builder()
    .name(name)
    .attr_type(attr_type)
    .subtype(subtype)
    .exposed(true)
    .build()
}

pub(super) fn spec_set(specs: Vec<Specification>) -> SpecificationSet {
  SpecificationSet::new(spec_config(), TypeMapping::default(), specs)
}

pub(super) fn convert(set: &SpecificationSet, config: ConverterConfig) -> Result<BTreeMap<String, Document>> {
  Converter::new(set, config).convert()
}

pub(super) fn convert_toplevel(set: &SpecificationSet) -> Value {
  let docs = convert(set, ConverterConfig::default()).expect("conversion should succeed");
  assert_eq!(docs.len(), 1, "non-split output must hold exactly one document");
  serde_json::to_value(&docs["toplevel"]).expect("document should serialize")
}

pub(super) fn convert_split(set: &SpecificationSet) -> BTreeMap<String, Value> {
  let config = ConverterConfig::builder().split_output(true).build();
  convert(set, config)
    .expect("conversion should succeed")
    .into_iter()
    .map(|(name, doc)| (name, serde_json::to_value(doc).expect("document should serialize")))
    .collect()
}
