use serde_json::json;

use super::support::{convert, convert_toplevel, model, root_model, spec_set};
use crate::{
  error::Error,
  generator::ConverterConfig,
  spec::{Action, Model, Parameter, ParameterDefinition, ParameterType, Relation, Specification},
};

fn task_with_actions() -> Model {
  Model::builder()
    .rest_name("task")
    .resource_name("tasks")
    .group("core")
    .package("todo")
    .get(Action::new("Retrieves the task with the given ID."))
    .update(Action::new("Updates the task with the given ID."))
    .delete(Action::new("Deletes the task with the given ID."))
    .build()
}

#[test]
fn test_singleton_path_has_single_id_parameter() {
  let set = spec_set(vec![Specification::new(task_with_actions())]);
  let doc = convert_toplevel(&set);

  let item = &doc["paths"]["/tasks/{id}"];
  assert_eq!(
    item["parameters"],
    json!([{"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}])
  );

  for method in ["get", "put", "delete"] {
    assert!(item[method]["parameters"].is_null(), "{method} must not repeat the id parameter");
    assert_eq!(item[method]["tags"], json!(["core", "todo"]));
  }
  assert!(item["post"].is_null());
}

#[test]
fn test_singleton_operations() {
  let set = spec_set(vec![Specification::new(task_with_actions())]);
  let doc = convert_toplevel(&set);
  let item = &doc["paths"]["/tasks/{id}"];

  let task_ref = json!({"$ref": "#/components/schemas/task"});

  assert_eq!(item["get"]["operationId"], "get-task-by-id");
  assert_eq!(item["get"]["description"], "Retrieves the task with the given ID.");
  assert!(item["get"]["requestBody"].is_null());
  assert_eq!(item["get"]["responses"]["200"]["description"], "n/a");
  assert_eq!(
    item["get"]["responses"]["200"]["content"]["application/json"]["schema"],
    task_ref
  );

  assert_eq!(item["put"]["operationId"], "update-task-by-id");
  assert_eq!(
    item["put"]["requestBody"]["content"]["application/json"]["schema"],
    task_ref
  );

  assert_eq!(item["delete"]["operationId"], "delete-task-by-id");
  assert!(item["delete"]["requestBody"].is_null());
}

#[test]
fn test_model_without_actions_has_no_singleton_path() {
  let set = spec_set(vec![Specification::new(model("task", "tasks"))]);
  let doc = convert_toplevel(&set);

  assert_eq!(doc["paths"], json!({}));
  assert!(doc["components"]["schemas"]["task"].is_object());
}

#[test]
fn test_singleton_query_parameters() {
  let task = Model::builder()
    .rest_name("task")
    .resource_name("tasks")
    .delete(
      Action::new("Deletes the task.").with_parameters(ParameterDefinition::new([
        Parameter::builder().name("force").param_type(ParameterType::Boolean).build(),
      ])),
    )
    .build();
  let set = spec_set(vec![Specification::new(task)]);
  let doc = convert_toplevel(&set);

  assert_eq!(
    doc["paths"]["/tasks/{id}"]["delete"]["parameters"],
    json!([{"name": "force", "in": "query", "schema": {"type": "boolean"}}])
  );
}

#[test]
fn test_root_relations() {
  let root = Specification::new(root_model()).with_relations(vec![
    Relation::new("task")
      .with_get(Action::new("Retrieves the list of tasks."))
      .with_create(Action::new("Creates a new task.")),
  ]);
  let set = spec_set(vec![root, Specification::new(model("task", "tasks"))]);
  let doc = convert_toplevel(&set);

  let item = &doc["paths"]["/tasks"];
  assert!(item["parameters"].is_null());

  assert_eq!(item["get"]["operationId"], "get-all-tasks");
  assert_eq!(item["get"]["tags"], json!(["core", "tasks"]));
  assert_eq!(
    item["get"]["responses"]["200"]["content"]["application/json"]["schema"],
    json!({"type": "array", "items": {"$ref": "#/components/schemas/task"}})
  );

  assert_eq!(item["post"]["operationId"], "create-a-new-task");
  assert_eq!(
    item["post"]["requestBody"]["content"]["application/json"]["schema"],
    json!({"$ref": "#/components/schemas/task"})
  );

  assert!(doc["components"]["schemas"].get("root").is_none());
}

#[test]
fn test_root_model_actions_are_ignored() {
  let root = Model::builder()
    .rest_name("root")
    .resource_name("root")
    .is_root(true)
    .get(Action::new("Retrieves the root."))
    .update(Action::new("Updates the root."))
    .delete(Action::new("Deletes the root."))
    .build();
  let root = Specification::new(root)
    .with_relations(vec![Relation::new("task").with_get(Action::new("Retrieves the tasks."))]);
  let set = spec_set(vec![root, Specification::new(model("task", "tasks"))]);
  let doc = convert_toplevel(&set);

  let paths: Vec<_> = doc["paths"].as_object().unwrap().keys().cloned().collect();
  assert_eq!(paths, vec!["/tasks"]);
  assert!(doc["components"]["schemas"].get("root").is_none());
}

#[test]
fn test_root_relation_without_actions_has_no_path() {
  let root = Specification::new(root_model()).with_relations(vec![Relation::new("task")]);
  let set = spec_set(vec![root, Specification::new(model("task", "tasks"))]);
  let doc = convert_toplevel(&set);

  assert_eq!(doc["paths"], json!({}));
  assert_eq!(doc["components"]["schemas"]["task"], json!({"type": "object"}));
}

#[test]
fn test_nested_relations() {
  let task = Specification::new(model("task", "tasks")).with_relations(vec![
    Relation::new("comment")
      .with_get(Action::new("Retrieves the comments of the task."))
      .with_create(Action::new("Adds a comment to the task.")),
  ]);
  let set = spec_set(vec![task, Specification::new(model("comment", "comments"))]);
  let doc = convert_toplevel(&set);

  let item = &doc["paths"]["/tasks/{id}/comments"];
  assert_eq!(
    item["parameters"],
    json!([{"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}])
  );
  assert_eq!(item["get"]["operationId"], "get-all-comments-for-a-given-task");
  assert_eq!(item["get"]["tags"], json!(["core", "comments"]));
  assert_eq!(item["post"]["operationId"], "create-a-new-comment-for-a-given-task");
  assert_eq!(item["post"]["description"], "Adds a comment to the task.");
}

#[test]
fn test_relation_to_unknown_model_fails() {
  let root = Specification::new(root_model()).with_relations(vec![
    Relation::new("ghost").with_get(Action::new("Retrieves ghosts.")),
  ]);
  let set = spec_set(vec![root]);

  let err = convert(&set, ConverterConfig::default()).unwrap_err();

  assert_eq!(err.to_string(), "model 'root'");
  assert!(matches!(
    err.root_cause(),
    Error::RelationTargetMissing { rest_name } if rest_name == "ghost"
  ));
}
