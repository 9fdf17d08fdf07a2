use itertools::Itertools;

use crate::{
  openapi::{Parameter, ParameterLocation, Schema},
  spec::{self, ParameterDefinition, ParameterType},
};

pub(crate) const PARAM_NAME_ID: &str = "id";

/// Converts an action's parameter definition into query parameters.
///
/// Repeated names keep their first entry. Entries with a parameter type that
/// has no schema equivalent are dropped. The result is sorted by name.
pub(crate) fn build_query_parameters(param_def: Option<&ParameterDefinition>) -> Vec<Parameter> {
  let Some(param_def) = param_def else {
    return Vec::new();
  };

  param_def
    .entries
    .iter()
    .unique_by(|entry| entry.name.clone())
    .filter_map(|entry| convert_parameter(entry, ParameterLocation::Query))
    .sorted_by(|a, b| a.name.cmp(&b.name))
    .collect()
}

fn convert_parameter(entry: &spec::Parameter, location: ParameterLocation) -> Option<Parameter> {
  let schema = match &entry.param_type {
    ParameterType::Integer => Schema::integer(),
    ParameterType::Boolean => Schema::boolean(),
    ParameterType::String | ParameterType::Duration => Schema::string(),
    ParameterType::Float => Schema::number(),
    ParameterType::Time => Schema::date_time(),
    ParameterType::Enum => Schema::enumeration(&entry.allowed_choices),
    ParameterType::Unsupported(name) => {
      tracing::warn!(parameter = %entry.name, param_type = %name, "dropping parameter with unsupported type");
      return None;
    }
  };

  Some(Parameter {
    name: entry.name.clone(),
    location,
    description: entry.description.clone().filter(|d| !d.is_empty()),
    required: false,
    schema: Some(schema.into_ref()),
    example: entry.example_value.clone().or_else(|| entry.default_value.clone()),
  })
}

/// Appends the required `id` path parameter.
pub(crate) fn insert_path_id_parameter(params: &mut Vec<Parameter>) {
  params.push(Parameter {
    name: PARAM_NAME_ID.to_string(),
    location: ParameterLocation::Path,
    description: None,
    required: true,
    schema: Some(Schema::string().into_ref()),
    example: None,
  });
}
