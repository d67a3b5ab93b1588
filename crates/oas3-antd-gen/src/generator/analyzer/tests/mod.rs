use http::Method;

use crate::generator::{analyzer::AnalyzedSpec, errors::GeneratorError};

fn parse(spec_json: &str) -> oas3::Spec {
  oas3::from_json(spec_json).expect("failed to parse test spec")
}

#[test]
fn test_info_and_model_index() {
  let spec = parse(include_str!("../../../../fixtures/widgets.json"));
  let analyzed = AnalyzedSpec::new(&spec).unwrap();

  assert_eq!(analyzed.info().title, "App");
  assert_eq!(analyzed.info().version, "1.2.0");
  assert_eq!(analyzed.models().count(), 6);
  assert!(analyzed.model("AppWidgetSort").is_some());
  assert!(analyzed.model("appwidgetsort").is_none());
}

#[test]
fn test_operation_index() {
  let spec = parse(include_str!("../../../../fixtures/widgets.json"));
  let analyzed = AnalyzedSpec::new(&spec).unwrap();

  let delete = analyzed.operation("DeleteWidget").unwrap();
  assert_eq!(delete.method, Method::DELETE);
  assert_eq!(delete.path, "/widgets/{id}");
  assert_eq!(delete.primary_tag(), Some("widget"));
  assert_eq!(analyzed.operations().count(), 5);
}

#[test]
fn test_missing_operation_id_is_generated() {
  let spec = parse(
    r#"{
      "openapi": "3.0.3",
      "info": { "title": "Ids", "version": "1.0.0" },
      "paths": {
        "/widgets/{id}": {
          "get": { "tags": ["", "widget"], "responses": { "200": { "description": "OK" } } }
        }
      }
    }"#,
  );
  let analyzed = AnalyzedSpec::new(&spec).unwrap();

  let operation = analyzed.operation("get_widgets_by_id").unwrap();
  assert_eq!(operation.primary_tag(), Some("widget"));
}

#[test]
fn test_duplicate_operation_ids_fail() {
  let spec = parse(
    r#"{
      "openapi": "3.0.3",
      "info": { "title": "Dupes", "version": "1.0.0" },
      "paths": {
        "/a": { "get": { "operationId": "Same", "responses": { "200": { "description": "OK" } } } },
        "/b": { "get": { "operationId": "Same", "responses": { "200": { "description": "OK" } } } }
      }
    }"#,
  );

  let result = AnalyzedSpec::new(&spec);
  assert!(matches!(result, Err(GeneratorError::Specification(message)) if message.contains("Same")));
}

#[test]
fn test_unresolvable_schema_fails() {
  let spec = parse(
    r##"{
      "openapi": "3.0.3",
      "info": { "title": "Broken", "version": "1.0.0" },
      "paths": {},
      "components": {
        "schemas": {
          "Dangling": { "$ref": "#/components/schemas/Missing" }
        }
      }
    }"##,
  );

  assert!(matches!(AnalyzedSpec::new(&spec), Err(GeneratorError::Specification(_))));
}
