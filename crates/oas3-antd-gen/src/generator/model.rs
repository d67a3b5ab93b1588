//! The application model: the canonical representation every template renders from.
//!
//! An [`ApplicationModel`] is assembled once per run. Grouping and operation
//! filtering only touch the fields documented on each type; everything else is
//! read-only after assembly.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

/// Package names for the api, model, server and client layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageNames {
  pub api: String,
  pub model: String,
  pub server: String,
  pub client: String,
}

/// Title, version and description of the specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppInfo {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationModel {
  pub name: String,
  pub info: AppInfo,
  pub models: Vec<ModelDefinition>,
  pub operation_groups: Vec<OperationGroup>,
  pub target: PathBuf,
  pub packages: PackageNames,
}

/// A named data shape taken from `components.schemas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDefinition {
  pub name: String,
  /// Carries the grouping tag (`antd_model:<group>`) when present.
  pub description: Option<String>,
  pub schema: ModelSchema,
  /// Schemas of every model merged into this one by grouping, in first-seen order.
  pub extra_schemas: Vec<ModelSchema>,
  pub package_key: String,
  pub path_suffix: String,
  /// Binary string payloads; never part of grouped output.
  pub is_stream: bool,
}

/// The structural definition of a model as exposed to templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelSchema {
  pub name: String,
  pub title: Option<String>,
  pub description: Option<String>,
  /// Application name, used by templates to strip the prefix off type names.
  pub custom_tag: String,
  pub properties: Vec<PropertyDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDefinition {
  pub name: String,
  pub ts_type: String,
  pub required: bool,
  pub description: Option<String>,
  pub is_array: bool,
  /// Referenced component name, when the property (or its array items) is a `$ref`.
  pub ref_name: Option<String>,
}

/// Operations sharing a tag, rendered into one service file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationGroup {
  pub name: String,
  pub root_package_name: String,
  pub operations: Vec<OperationDefinition>,
  /// Short model name to import path placeholder.
  pub imports: IndexMap<String, String>,
  /// Directory of the model group whose imports were attached.
  pub model_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationDefinition {
  /// Identifier the operation was selected by.
  pub id: String,
  pub name: String,
  pub method: String,
  pub path: String,
  pub summary: Option<String>,
  pub package_name: String,
  pub root_package_name: String,
}
