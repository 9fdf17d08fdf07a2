use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use super::{SpecConfig, Specification, SpecificationSet, TypeMapping};
use crate::error::{Error, Result};

pub const SPEC_FILE_EXTENSION: &str = "spec";
pub const TYPE_MAPPING_FILE_NAME: &str = "_type.mapping";
pub const CONFIG_FILE_NAME: &str = "_config.yaml";

/// Loads a specification set from a directory.
///
/// Every `*.spec` file holds one specification, `_type.mapping` holds the
/// external type table and `_config.yaml` the set configuration. Both of the
/// latter are optional.
pub struct SpecSetLoader {
  dir: PathBuf,
}

impl SpecSetLoader {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  pub async fn load(&self) -> Result<SpecificationSet> {
    let config: SpecConfig = self.read_optional(CONFIG_FILE_NAME).await?.unwrap_or_default();
    let type_mapping: TypeMapping = self.read_optional(TYPE_MAPPING_FILE_NAME).await?.unwrap_or_default();

    let mut specs = Vec::new();
    for path in self.spec_files().await? {
      let spec: Specification = read_yaml(&path).await?;
      tracing::trace!(path = %path.display(), rest_name = %spec.model().rest_name, "loaded specification");
      specs.push(spec);
    }

    tracing::debug!(
      dir = %self.dir.display(),
      specs = specs.len(),
      mappings = type_mapping.len(),
      "loaded specification set"
    );

    Ok(SpecificationSet::new(config, type_mapping, specs))
  }

  async fn spec_files(&self) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| Error::Io {
      path: self.dir.clone(),
      source,
    };

    let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(io_err)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
      let path = entry.path();
      if path.extension().and_then(OsStr::to_str) == Some(SPEC_FILE_EXTENSION) {
        files.push(path);
      }
    }

    files.sort();
    Ok(files)
  }

  async fn read_optional<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>> {
    let path = self.dir.join(file_name);
    match tokio::fs::try_exists(&path).await {
      Ok(true) => read_yaml(&path).await.map(Some),
      Ok(false) => Ok(None),
      Err(source) => Err(Error::Io { path, source }),
    }
  }
}

async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
  let content = tokio::fs::read_to_string(path).await.map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;

  serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
    path: path.to_path_buf(),
    source,
  })
}
