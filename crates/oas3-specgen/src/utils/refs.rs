pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Extracts the schema name from a same-document `$ref` path.
///
/// Returns `None` for references into another document (`./other#/...`)
/// and for paths that do not point at `#/components/schemas/`.
pub fn parse_schema_ref_path(ref_path: &str) -> Option<&str> {
  ref_path
    .strip_prefix(SCHEMA_REF_PREFIX)
    .filter(|name| !name.is_empty() && !name.contains('/'))
}

/// Builds a `$ref` to a schema living in the sibling document `doc_name`.
pub fn cross_document_ref(doc_name: &str, schema_name: &str) -> String {
  format!("./{doc_name}{SCHEMA_REF_PREFIX}{schema_name}")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_internal_schema_ref() {
    assert_eq!(parse_schema_ref_path("#/components/schemas/employee"), Some("employee"));
  }

  #[test]
  fn test_parse_rejects_other_refs() {
    assert_eq!(parse_schema_ref_path("./employee#/components/schemas/employee"), None);
    assert_eq!(parse_schema_ref_path("#/components/responses/NotFound"), None);
    assert_eq!(parse_schema_ref_path("#/components/schemas/"), None);
  }

  #[test]
  fn test_cross_document_ref() {
    assert_eq!(
      cross_document_ref("employee", "employee"),
      "./employee#/components/schemas/employee"
    );
  }
}
