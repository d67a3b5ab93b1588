use std::path::Path;

use crate::generator::{
  config::RunMode,
  context::{GroupContext, ModelContext, OperationContext},
  errors::GeneratorError,
  grouping::{attach_imports, group_models},
  operation_filter::assign_and_filter,
  render::{AssetRegistry, TemplateEngine, join_path, trim_prefix},
  sections::{AssetRef, Sections},
};

use super::support::{group, widgets_app};

#[test]
fn test_join_path() {
  assert_eq!(join_path("out".to_string(), "widget".to_string()), Path::new("out").join("widget").to_string_lossy());
  assert_eq!(join_path("out".to_string(), String::new()), "out");
  assert_eq!(join_path("out".to_string(), "/".to_string()), "out");
}

#[test]
fn test_trim_prefix() {
  assert_eq!(trim_prefix("AppWidgetFilter".to_string(), "App".to_string()), "WidgetFilter");
  assert_eq!(trim_prefix("Envelope".to_string(), "App".to_string()), "Envelope");
  assert_eq!(trim_prefix("App".to_string(), String::new()), "App");
}

#[test]
fn test_builtin_assets_are_registered() {
  let registry = AssetRegistry::default();
  assert!(registry.overridden().is_empty());
  assert!(TemplateEngine::new(&registry).is_ok());
}

#[test]
fn test_model_targets_and_contents() {
  let app = widgets_app();
  let groups = group_models(&app.name, &app.models).unwrap();
  let registry = AssetRegistry::default();
  let engine = TemplateEngine::new(&registry).unwrap();
  let sections = Sections::configure(RunMode::Grouped);

  let widget = groups.get("Widget").unwrap();
  let files = engine.render_all(&sections.models, &ModelContext::new(&app, widget)).unwrap();
  assert_eq!(files.len(), 2);
  assert_eq!(files[0].path, Path::new("out").join("Widget").join("data.ts"));
  assert_eq!(files[1].path, Path::new("out").join("Widget").join("columns.tsx"));
  assert_eq!(files[0].template, "antd data");

  let data = &files[0].contents;
  assert!(data.contains("export type WidgetFilter = {"));
  assert!(data.contains("export type WidgetSort = {"));
  assert!(data.contains("name: string;"));
  assert!(data.contains("status?: 'active' | 'retired';"));
  assert!(data.contains("tags?: string[];"));
  assert!(data.contains("category?: AppCategory;"));
  assert!(data.contains("/** Widget name */"));

  let columns = &files[1].contents;
  assert!(columns.contains("ProColumns<WidgetFilter>[]"));
  assert!(columns.contains("dataIndex: 'status'"));
  assert!(columns.contains("title: 'Widget name'"));
  assert!(columns.contains("title: 'Status'"));

  let default = groups.get("").unwrap();
  let files = engine.render_all(&sections.models, &ModelContext::new(&app, default)).unwrap();
  assert_eq!(files[0].path, Path::new("out").join("data.ts"));
  assert!(files[0].contents.contains("export type Envelope = {"));
  assert!(files[0].contents.contains("export type Metadata = {"));
}

#[test]
fn test_operation_and_group_contents() {
  let mut app = widgets_app();
  let groups = group_models(&app.name, &app.models).unwrap();
  attach_imports(&groups, &mut app.operation_groups);
  let selections = assign_and_filter(&app.name, &mut app.operation_groups);

  let registry = AssetRegistry::default();
  let engine = TemplateEngine::new(&registry).unwrap();
  let sections = Sections::configure(RunMode::Grouped);

  let index = app.operation_groups.iter().position(|group| group.name == "widget").unwrap();
  let group = &app.operation_groups[index];
  let operation = selections[index].operation(group).unwrap();

  let list = engine
    .render(&sections.operations[0], &OperationContext::new(&app, group, operation))
    .unwrap();
  assert_eq!(list.path, Path::new("out").join("Widget").join("list.tsx"));
  assert!(list.contents.contains("import { ListWidgets } from './service';"));
  assert!(list.contents.contains("import { columns } from '../Widget/columns';"));
  assert!(list.contents.contains("/** List widgets */"));
  assert!(list.contents.contains("export default ListWidgetsPage;"));
  assert!(list.contents.contains("      rowKey=\"id\"\n      columns={columns}\n      request="));

  let service = engine
    .render(&sections.operation_groups[0], &GroupContext::new(&app, group))
    .unwrap();
  assert_eq!(service.path, Path::new("out").join("Widget").join("service.ts"));
  assert!(
    service
      .contents
      .contains("import type { WidgetFilter, WidgetSort } from '../Widget/data';")
  );
  assert!(service.contents.contains("export async function ListWidgets("));
  assert!(service.contents.contains("export async function CreateWidget("));
  assert!(service.contents.contains("export async function DeleteWidget("));
  assert!(service.contents.contains("method: 'POST',\n    data: params,"));
  assert!(service.contents.contains("/** Create a widget */"));
}

#[test]
fn test_group_without_imports_skips_import_line() {
  let mut app = widgets_app();
  assign_and_filter(&app.name, &mut app.operation_groups);
  let registry = AssetRegistry::default();
  let engine = TemplateEngine::new(&registry).unwrap();
  let sections = Sections::configure(RunMode::Grouped);

  let gadget = group(&app, "gadget").unwrap();
  let service = engine
    .render(&sections.operation_groups[0], &GroupContext::new(&app, gadget))
    .unwrap();
  assert_eq!(service.path, Path::new("out").join("Gadget").join("service.ts"));
  assert!(!service.contents.contains("import type"));
  assert!(service.contents.contains("/** GET /gadgets */"));
}

#[test]
fn test_list_without_model_group_skips_columns() {
  let mut app = widgets_app();
  let selections = assign_and_filter(&app.name, &mut app.operation_groups);
  let registry = AssetRegistry::default();
  let engine = TemplateEngine::new(&registry).unwrap();
  let sections = Sections::configure(RunMode::Grouped);

  let index = app.operation_groups.iter().position(|group| group.name == "widget").unwrap();
  let group = &app.operation_groups[index];
  let operation = selections[index].operation(group).unwrap();

  let list = engine
    .render(&sections.operations[0], &OperationContext::new(&app, group, operation))
    .unwrap();
  assert!(!list.contents.contains("columns"));
  assert!(list.contents.contains("      rowKey=\"id\"\n      request="));
}

#[test]
fn test_template_dir_overrides_asset() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("antd_service.ts.j2"), "// {{ name }} has {{ operations | length }}\n").unwrap();

  let registry = AssetRegistry::load(Some(dir.path())).unwrap();
  assert_eq!(registry.overridden(), [AssetRef::SERVICE]);

  let mut app = widgets_app();
  assign_and_filter(&app.name, &mut app.operation_groups);
  let engine = TemplateEngine::new(&registry).unwrap();
  let sections = Sections::configure(RunMode::Grouped);

  let widget = group(&app, "widget").unwrap();
  let service = engine
    .render(&sections.operation_groups[0], &GroupContext::new(&app, widget))
    .unwrap();
  assert_eq!(service.contents, "// widget has 3\n");
}

#[test]
fn test_invalid_override_fails_to_compile() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("antd_list.tsx.j2"), "{% for %}").unwrap();

  let registry = AssetRegistry::load(Some(dir.path())).unwrap();
  let Err(err) = TemplateEngine::new(&registry) else {
    panic!("expected a render error");
  };
  match err {
    GeneratorError::Render { template, .. } => assert_eq!(template, "asset:antdList"),
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_target_expression_errors_are_render_errors() {
  let registry = AssetRegistry::default();
  let engine = TemplateEngine::new(&registry).unwrap();
  let mut spec = Sections::configure(RunMode::Flat).application[0].clone();
  spec.target = "{{ target";

  let app = widgets_app();
  let result = engine.target(&spec, &crate::generator::context::ApplicationContext::new(&app, vec![]));
  assert!(matches!(result, Err(GeneratorError::Render { .. })));
}
