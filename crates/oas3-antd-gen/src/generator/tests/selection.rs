use crate::generator::{
  errors::{GeneratorError, SelectionKind},
  selection::{select_models, select_operations},
};

use super::support::{WIDGETS_SPEC, analyze, parse_spec};

const NONE: [&str; 0] = [];

#[test]
fn test_empty_request_selects_all_models() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let models = select_models(&analyzed, &NONE).unwrap();
  let names: Vec<_> = models.iter().map(|model| model.name.as_str()).collect();
  assert_eq!(
    names,
    ["AppCategory", "AppWidgetFilter", "AppWidgetSort", "Envelope", "Metadata", "Upload"]
  );

  let blank = select_models(&analyzed, &["", "  "]).unwrap();
  assert_eq!(blank.len(), 6);
}

#[test]
fn test_models_selected_in_request_order() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let models = select_models(&analyzed, &["Metadata", "AppCategory", "Metadata"]).unwrap();
  let names: Vec<_> = models.iter().map(|model| model.name.as_str()).collect();
  assert_eq!(names, ["Metadata", "AppCategory"]);
}

#[test]
fn test_unknown_model_fails() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let err = select_models(&analyzed, &["AppCategory", "Nope"]).unwrap_err();
  match err {
    GeneratorError::Selection { kind, name } => {
      assert_eq!(kind, SelectionKind::Model);
      assert_eq!(name, "Nope");
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_empty_request_selects_all_operations() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let operations = select_operations(&analyzed, &NONE).unwrap();
  assert_eq!(operations.len(), 5);
  assert_eq!(operations[0].id, "ListCategories");
}

#[test]
fn test_operations_selected_by_id() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let operations = select_operations(&analyzed, &[" ListWidgets ".to_string()]).unwrap();
  assert_eq!(operations.len(), 1);
  assert_eq!(operations[0].id, "ListWidgets");
  assert_eq!(operations[0].path, "/widgets");
}

#[test]
fn test_unknown_operation_fails() {
  let spec = parse_spec(WIDGETS_SPEC);
  let analyzed = analyze(&spec);

  let err = select_operations(&analyzed, &["ListGadgets"]).unwrap_err();
  assert!(matches!(
    err,
    GeneratorError::Selection {
      kind: SelectionKind::Operation,
      ..
    }
  ));
  assert_eq!(err.to_string(), "unknown operation 'ListGadgets'");
}
