//! Drives the conversion of a whole specification set.
//!
//! Every specification contributes its schema and paths to a single
//! [`WorkingDocument`]. Once all of them are processed the working document is
//! finalized into either one `toplevel` document or, in split mode, one
//! document per resource (see [`super::split`]).

use std::{
  collections::{BTreeMap, HashMap},
  io::Write,
};

use super::{
  attributes::AttributeConverter,
  emit::write_documents,
  paths::{PathItems, PathSynthesizer},
  split::DocumentSplitter,
  tags::TagRegistry,
};
use crate::{
  error::Result,
  openapi::{Contact, Document, Info, LICENSE_PLACEHOLDER, License, PathItem, Schema, SchemaRef, TERMS_OF_SERVICE_PLACEHOLDER},
  spec::{SpecConfig, Specification, SpecificationSet},
};

pub const DEFAULT_DOC_NAME: &str = "toplevel";

/// Options consumed by the converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, bon::Builder)]
pub struct ConverterConfig {
  /// Omit private models together with their schemas and paths.
  #[builder(default)]
  pub skip_private_models: bool,
  /// Emit one document per resource instead of a single combined one.
  #[builder(default)]
  pub split_output: bool,
}

/// Schemas and paths accumulated over the whole specification set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingDocument {
  pub schemas: BTreeMap<String, SchemaRef>,
  pub paths: BTreeMap<String, PathItem>,
}

impl WorkingDocument {
  fn merge_paths(&mut self, paths: PathItems) {
    self.paths.extend(paths);
  }
}

/// Statistics about one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  pub documents_written: usize,
  pub schemas_converted: usize,
  pub paths_converted: usize,
  pub operations_converted: usize,
}

pub struct Converter<'a> {
  spec_set: &'a SpecificationSet,
  config: ConverterConfig,
  resource_to_rest: HashMap<String, String>,
  tags: TagRegistry,
  working: WorkingDocument,
}

impl<'a> Converter<'a> {
  pub fn new(spec_set: &'a SpecificationSet, config: ConverterConfig) -> Self {
    let resource_to_rest = spec_set
      .specifications()
      .map(|spec| {
        let model = spec.model();
        (model.resource_name.clone(), model.rest_name.clone())
      })
      .collect();

    Self {
      spec_set,
      config,
      resource_to_rest,
      tags: TagRegistry::default(),
      working: WorkingDocument::default(),
    }
  }

  /// Converts the set and writes every resulting document to a sink obtained
  /// from `new_writer`.
  ///
  /// # Errors
  ///
  /// Stops at the first mapping, writer creation, encoding or write failure.
  pub fn run<F, W>(self, new_writer: F) -> Result<GenerationStats>
  where
    F: FnMut(&str) -> std::io::Result<W>,
    W: Write,
  {
    let documents = self.convert()?;

    let stats = GenerationStats {
      documents_written: documents.len(),
      schemas_converted: documents.values().map(|doc| doc.components.schemas.len()).sum(),
      paths_converted: documents.values().map(|doc| doc.paths.len()).sum(),
      operations_converted: documents.values().map(Document::operation_count).sum(),
    };

    write_documents(&documents, new_writer)?;
    Ok(stats)
  }

  /// Converts the set into named documents without writing them.
  pub fn convert(mut self) -> Result<BTreeMap<String, Document>> {
    let spec_set = self.spec_set;
    for spec in spec_set.specifications() {
      self.process_spec(spec)?;
    }
    Ok(self.finalize())
  }

  fn process_spec(&mut self, spec: &Specification) -> Result<()> {
    let model = spec.model();

    if self.config.skip_private_models && model.private {
      tracing::debug!(model = %model.rest_name, "skipping private model");
      return Ok(());
    }

    let synthesizer = PathSynthesizer::new(self.spec_set, self.config.skip_private_models);

    if model.is_root {
      let paths = synthesizer
        .root_relations(spec.relations())
        .map_err(|err| err.in_model(&model.rest_name))?;
      tracing::debug!(model = %model.rest_name, paths = paths.len(), "converted root relations");
      self.working.merge_paths(paths);
      return Ok(());
    }

    let schema = self.convert_model(spec).map_err(|err| err.in_model(&model.rest_name))?;
    self.working.schemas.insert(model.rest_name.clone(), schema);
    self.tags.record(model);

    if let Some((uri, item)) = synthesizer.model_singleton(model) {
      self.working.paths.insert(uri, item);
    }

    let paths = synthesizer
      .nested_relations(model, spec.relations())
      .map_err(|err| err.in_model(&model.rest_name))?;
    self.working.merge_paths(paths);

    tracing::debug!(model = %model.rest_name, "converted model");
    Ok(())
  }

  /// Builds the object schema of a non-root model from its exposed
  /// attributes.
  fn convert_model(&self, spec: &Specification) -> Result<SchemaRef> {
    let attribute_converter = AttributeConverter::new(self.spec_set.type_mapping());

    let mut schema = Schema {
      description: spec.model().description.clone().filter(|d| !d.is_empty()),
      ..Schema::object()
    };

    for attr in spec.attributes(None).into_iter().filter(|attr| attr.exposed) {
      let property = attribute_converter
        .convert(attr)
        .map_err(|err| err.in_attribute(&attr.name))?;
      tracing::trace!(attribute = %attr.name, attr_type = %attr.attr_type, "converted attribute");

      schema.properties.insert(attr.name.clone(), property);
      if attr.required {
        schema.required.push(attr.name.clone());
      }
    }

    schema.required.sort();
    schema.required.dedup();

    Ok(schema.into_ref())
  }

  fn finalize(self) -> BTreeMap<String, Document> {
    let config = self.spec_set.configuration();

    if !self.config.split_output || self.working.schemas.is_empty() {
      let mut doc = new_document(config, DEFAULT_DOC_NAME);
      doc.tags = self.tags.global();
      doc.components.schemas = self.working.schemas;
      doc.paths = self.working.paths;
      return BTreeMap::from([(DEFAULT_DOC_NAME.to_string(), doc)]);
    }

    DocumentSplitter::new(&self.resource_to_rest, |name: &str| {
      let mut doc = new_document(config, name);
      doc.tags = self.tags.for_model(name);
      doc
    })
    .split(self.working)
  }
}

/// An empty document whose `info` is filled from the set configuration.
pub fn new_document(config: &SpecConfig, title: &str) -> Document {
  let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

  Document::new(Info {
    title: title.to_string(),
    description: config.description.clone().filter(|d| !d.is_empty()),
    terms_of_service: TERMS_OF_SERVICE_PLACEHOLDER.to_string(),
    contact: Contact {
      name: non_empty(&config.author),
      url: non_empty(&config.url),
      email: non_empty(&config.email),
    },
    license: License {
      name: LICENSE_PLACEHOLDER.to_string(),
    },
    version: config.version.clone(),
  })
}
