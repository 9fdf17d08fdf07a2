use std::{io, path::PathBuf};

/// Errors raised while loading a specification set or compiling it into
/// OpenAPI documents.
///
/// Mapping failures are wrapped in [`Error::Attribute`] and [`Error::Model`]
/// as they unwind, so the rendered chain reads like
/// `model 'task': attribute 'owner': unhandled attribute type: 'blob'`.
/// Use [`Error::root_cause`] to reach the failure underneath the context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("unhandled attribute type: '{0}'")]
  UnhandledAttributeType(String),

  #[error("retrieving '{format}' type mapping for external attribute subtype '{subtype}': no mapping defined")]
  ExternalTypeMappingMissing { format: String, subtype: String },

  #[error("unmarshaling {format} external type mapping '{subtype}'")]
  ExternalTypeMalformed {
    format: String,
    subtype: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("relation targets unknown specification '{rest_name}'")]
  RelationTargetMissing { rest_name: String },

  #[error("model '{rest_name}'")]
  Model {
    rest_name: String,
    #[source]
    source: Box<Error>,
  },

  #[error("attribute '{name}'")]
  Attribute {
    name: String,
    #[source]
    source: Box<Error>,
  },

  #[error("'{name}': unable to create write destination")]
  WriterCreationFailed {
    name: String,
    #[source]
    source: io::Error,
  },

  #[error("'{name}': marshaling openapi3 document")]
  EncodingFailed {
    name: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("'{name}': writing openapi3 document")]
  WriteFailed {
    name: String,
    #[source]
    source: io::Error,
  },

  #[error("'{}': unable to read specification file", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("'{}': malformed specification file", path.display())]
  Yaml {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  pub(crate) fn in_model(self, rest_name: &str) -> Self {
    Self::Model {
      rest_name: rest_name.to_string(),
      source: Box::new(self),
    }
  }

  pub(crate) fn in_attribute(self, name: &str) -> Self {
    Self::Attribute {
      name: name.to_string(),
      source: Box::new(self),
    }
  }

  /// Returns the innermost error, skipping model and attribute context.
  #[must_use]
  pub fn root_cause(&self) -> &Self {
    match self {
      Self::Model { source, .. } | Self::Attribute { source, .. } => source.root_cause(),
      other => other,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_context_chain_renders_outer_first() {
    let err = Error::UnhandledAttributeType("blob".to_string())
      .in_attribute("payload")
      .in_model("task");

    assert_eq!(err.to_string(), "model 'task'");
    let chain = anyhow::Error::from(err);
    assert_eq!(
      format!("{chain:#}"),
      "model 'task': attribute 'payload': unhandled attribute type: 'blob'"
    );
  }

  #[test]
  fn test_root_cause_skips_context() {
    let err = Error::ExternalTypeMappingMissing {
      format: "openapi3".to_string(),
      subtype: "[]byte".to_string(),
    }
    .in_attribute("data")
    .in_model("file");

    assert!(matches!(
      err.root_cause(),
      Error::ExternalTypeMappingMissing { subtype, .. } if subtype == "[]byte"
    ));
  }

  #[test]
  fn test_root_cause_of_plain_error_is_itself() {
    let err = Error::RelationTargetMissing {
      rest_name: "ghost".to_string(),
    };
    assert!(std::ptr::eq(err.root_cause(), &err));
  }
}
