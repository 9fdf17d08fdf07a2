use std::collections::{BTreeMap, HashMap};

use super::converter::WorkingDocument;
use crate::{
  openapi::Document,
  utils::{cross_document_ref, parse_schema_ref_path},
};

/// Partitions a working document into one document per schema.
///
/// Each schema is owned by the document named after it. Paths go to the
/// document owning their first segment's resource. References between
/// documents are rewritten to relative `./<doc>#/components/schemas/<name>`
/// form; references inside a document keep the short form.
pub(crate) struct DocumentSplitter<'a, F> {
  resource_to_rest: &'a HashMap<String, String>,
  new_document: F,
}

impl<'a, F> DocumentSplitter<'a, F>
where
  F: Fn(&str) -> Document,
{
  pub(crate) fn new(resource_to_rest: &'a HashMap<String, String>, new_document: F) -> Self {
    Self {
      resource_to_rest,
      new_document,
    }
  }

  pub(crate) fn split(&self, working: WorkingDocument) -> BTreeMap<String, Document> {
    let mut documents: BTreeMap<String, Document> = working
      .schemas
      .into_iter()
      .map(|(name, schema)| {
        let mut doc = (self.new_document)(&name);
        doc.components.schemas.insert(name.clone(), schema);
        (name, doc)
      })
      .collect();

    for (uri, item) in working.paths {
      let Some(doc) = self.path_owner(&uri).and_then(|owner| documents.get_mut(owner)) else {
        tracing::warn!(path = %uri, "dropping path without an owning document");
        continue;
      };
      doc.paths.insert(uri, item);
    }

    let owners: Vec<String> = documents.keys().cloned().collect();
    for (doc_name, doc) in &mut documents {
      rewrite_document_refs(doc_name, doc, &owners);
    }

    documents
  }

  /// The rest name owning `uri`, resolved from its first segment.
  fn path_owner(&self, uri: &str) -> Option<&'a str> {
    let resource = uri.trim_start_matches('/').split('/').next()?;
    self.resource_to_rest.get(resource).map(String::as_str)
  }
}

fn rewrite_document_refs(doc_name: &str, doc: &mut Document, owners: &[String]) {
  let mut rewrite = |ref_path: &mut String| {
    let Some(schema_name) = parse_schema_ref_path(ref_path) else {
      return;
    };
    if schema_name == doc_name {
      return;
    }
    if !owners.iter().any(|owner| owner == schema_name) {
      tracing::warn!(document = %doc_name, schema = %schema_name, "reference to a schema without a document left unchanged");
      return;
    }
    *ref_path = cross_document_ref(schema_name, schema_name);
  };

  for schema in doc.components.schemas.values_mut() {
    schema.visit_refs_mut(&mut rewrite);
  }
  for item in doc.paths.values_mut() {
    item.visit_refs_mut(&mut rewrite);
  }
}
