//! Typed template contexts, one per section kind.
//!
//! Every context exposes `target` (the output root) next to the rendered item's
//! own fields, so target expressions like `joinPath(target, path_suffix)` resolve
//! against a single flat namespace.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::generator::model::{
  AppInfo, ApplicationModel, ModelDefinition, ModelSchema, OperationDefinition, OperationGroup, PackageNames,
};

fn target_string(target: &Path) -> String {
  target.to_string_lossy().into_owned()
}

#[derive(Debug, Serialize)]
pub struct ModelContext<'a> {
  pub target: String,
  pub app_name: &'a str,
  pub info: &'a AppInfo,
  pub name: &'a str,
  pub package_key: &'a str,
  pub path_suffix: &'a str,
  pub schema: &'a ModelSchema,
  pub extra_schemas: &'a [ModelSchema],
}

impl<'a> ModelContext<'a> {
  pub fn new(app: &'a ApplicationModel, model: &'a ModelDefinition) -> Self {
    Self {
      target: target_string(&app.target),
      app_name: &app.name,
      info: &app.info,
      name: &model.name,
      package_key: &model.package_key,
      path_suffix: &model.path_suffix,
      schema: &model.schema,
      extra_schemas: &model.extra_schemas,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct GroupContext<'a> {
  pub target: String,
  pub app_name: &'a str,
  pub info: &'a AppInfo,
  pub name: &'a str,
  pub root_package_name: &'a str,
  pub operations: &'a [OperationDefinition],
  pub imports: &'a IndexMap<String, String>,
  pub model_dir: Option<&'a str>,
  pub packages: &'a PackageNames,
}

impl<'a> GroupContext<'a> {
  pub fn new(app: &'a ApplicationModel, group: &'a OperationGroup) -> Self {
    Self {
      target: target_string(&app.target),
      app_name: &app.name,
      info: &app.info,
      name: &group.name,
      root_package_name: &group.root_package_name,
      operations: &group.operations,
      imports: &group.imports,
      model_dir: group.model_dir.as_deref(),
      packages: &app.packages,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct OperationContext<'a> {
  pub target: String,
  pub app_name: &'a str,
  pub info: &'a AppInfo,
  pub group: &'a str,
  pub id: &'a str,
  pub name: &'a str,
  pub method: &'a str,
  pub path: &'a str,
  pub summary: Option<&'a str>,
  pub package_name: &'a str,
  pub root_package_name: &'a str,
  pub imports: &'a IndexMap<String, String>,
  pub model_dir: Option<&'a str>,
}

impl<'a> OperationContext<'a> {
  pub fn new(app: &'a ApplicationModel, group: &'a OperationGroup, operation: &'a OperationDefinition) -> Self {
    Self {
      target: target_string(&app.target),
      app_name: &app.name,
      info: &app.info,
      group: &group.name,
      id: &operation.id,
      name: &operation.name,
      method: &operation.method,
      path: &operation.path,
      summary: operation.summary.as_deref(),
      package_name: &operation.package_name,
      root_package_name: &operation.root_package_name,
      imports: &group.imports,
      model_dir: group.model_dir.as_deref(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ApplicationContext<'a> {
  pub target: String,
  pub name: &'a str,
  pub info: &'a AppInfo,
  pub models: &'a [ModelDefinition],
  pub operation_groups: &'a [OperationGroup],
  /// The selected list operation of each group that has one, in group order.
  pub list_operations: Vec<&'a OperationDefinition>,
  pub packages: &'a PackageNames,
}

impl<'a> ApplicationContext<'a> {
  pub fn new(app: &'a ApplicationModel, list_operations: Vec<&'a OperationDefinition>) -> Self {
    Self {
      target: target_string(&app.target),
      name: &app.name,
      info: &app.info,
      models: &app.models,
      operation_groups: &app.operation_groups,
      list_operations,
      packages: &app.packages,
    }
  }
}
