use crate::{
  error::{Error, Result},
  openapi::{Schema, SchemaRef},
  spec::{Attribute, AttributeType, OPENAPI3_FORMAT, TypeMapping},
};

/// Maps attribute declarations to schema nodes.
///
/// Container types recurse on a synthetic attribute built from the subtype.
/// Metadata from the attribute is applied to the outermost node only, once
/// the recursive build succeeded.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AttributeConverter<'a> {
  type_mapping: &'a TypeMapping,
}

impl<'a> AttributeConverter<'a> {
  pub(crate) fn new(type_mapping: &'a TypeMapping) -> Self {
    Self { type_mapping }
  }

  pub(crate) fn convert(&self, attr: &Attribute) -> Result<SchemaRef> {
    let mut schema_ref = self.build(attr.attr_type, attr.subtype.as_deref(), &attr.allowed_choices)?;
    Self::decorate(&mut schema_ref, attr);
    Ok(schema_ref)
  }

  /// Builds the schema of one type without any attribute metadata.
  ///
  /// Errors from nested builds are returned as-is so the caller wraps them
  /// in attribute context exactly once.
  fn build(&self, attr_type: AttributeType, subtype: Option<&str>, choices: &[String]) -> Result<SchemaRef> {
    let subtype_name = subtype.unwrap_or_default();

    let schema = match attr_type {
      AttributeType::String => Schema::string(),
      AttributeType::Int => Schema::integer(),
      AttributeType::Float => Schema::number(),
      AttributeType::Bool => Schema::boolean(),
      AttributeType::Time => Schema::date_time(),
      AttributeType::Enum => Schema::enumeration(choices),
      AttributeType::Object => Schema::object(),
      AttributeType::List => {
        let item_type = AttributeType::parse(subtype_name)?;
        Schema::array(self.build(item_type, None, &[])?)
      }
      AttributeType::Ref => return Ok(SchemaRef::component(subtype_name)),
      AttributeType::RefList => Schema::array(self.build(AttributeType::Ref, subtype, &[])?),
      AttributeType::RefMap => Schema::map_of(self.build(AttributeType::Ref, subtype, &[])?),
      AttributeType::External => return self.external(subtype_name),
    };

    Ok(schema.into_ref())
  }

  fn external(&self, subtype: &str) -> Result<SchemaRef> {
    let entry = self
      .type_mapping
      .mapping(OPENAPI3_FORMAT, subtype)
      .ok_or_else(|| Error::ExternalTypeMappingMissing {
        format: OPENAPI3_FORMAT.to_string(),
        subtype: subtype.to_string(),
      })?;

    // A bare `{"$ref": ...}` fragment stays a reference and is not decorated.
    serde_json::from_str(&entry.type_fragment).map_err(|source| Error::ExternalTypeMalformed {
      format: OPENAPI3_FORMAT.to_string(),
      subtype: subtype.to_string(),
      source,
    })
  }

  /// References carry no metadata; only inline schemas are decorated.
  fn decorate(schema_ref: &mut SchemaRef, attr: &Attribute) {
    let SchemaRef::Object(schema) = schema_ref else {
      return;
    };

    schema.description = attr.description.clone().filter(|d| !d.is_empty());
    schema.default.clone_from(&attr.default_value);
    schema.example.clone_from(&attr.example_value);
    schema.deprecated = attr.deprecated;
    schema.read_only = attr.read_only;
  }
}
