use std::{collections::BTreeMap, io::Write};

use crate::{
  error::{Error, Result},
  openapi::Document,
};

/// Serializes each document as 2-space indented JSON followed by a newline
/// and hands it to the sink `new_writer` returns for the document name.
///
/// Each sink is dropped before the next one is requested. Documents written
/// before a failure are left in place.
pub(crate) fn write_documents<F, W>(documents: &BTreeMap<String, Document>, mut new_writer: F) -> Result<()>
where
  F: FnMut(&str) -> std::io::Result<W>,
  W: Write,
{
  for (name, doc) in documents {
    let mut writer = new_writer(name).map_err(|source| Error::WriterCreationFailed {
      name: name.clone(),
      source,
    })?;

    let encoded = serde_json::to_vec_pretty(doc).map_err(|source| Error::EncodingFailed {
      name: name.clone(),
      source,
    })?;

    writer
      .write_all(&encoded)
      .and_then(|()| writer.write_all(b"\n"))
      .and_then(|()| writer.flush())
      .map_err(|source| Error::WriteFailed {
        name: name.clone(),
        source,
      })?;

    tracing::debug!(document = %name, bytes = encoded.len() + 1, "wrote document");
  }

  Ok(())
}
