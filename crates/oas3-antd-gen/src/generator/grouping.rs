//! Regroups models by the `antd_model:` tag carried in their description.
//!
//! Every model whose description reads `antd_model:<group>` belongs to
//! `<group>`; models without the tag share the default bucket (empty key). The
//! first model seen for a group becomes its representative and collects the
//! schemas of every model in the group.

use indexmap::IndexMap;

use crate::generator::{
  errors::{GeneratorError, GeneratorResult},
  model::{ModelDefinition, OperationGroup},
  naming::identifiers::{strip_app_name, title_case},
};

pub const MODEL_TAG_PREFIX: &str = "antd_model:";

/// Key of the bucket holding models without a group tag.
pub const DEFAULT_GROUP: &str = "";

/// Module holding a model group's type declarations, relative to its directory.
const DATA_MODULE: &str = "data";

/// Group name to short model name to import path placeholder.
pub type ImportMap = IndexMap<String, IndexMap<String, String>>;

/// The outcome of grouping: one representative per group plus the import side table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelGroups {
  representatives: IndexMap<String, ModelDefinition>,
  imports: ImportMap,
}

impl ModelGroups {
  /// Representatives in first-seen group order.
  pub fn representatives(&self) -> impl Iterator<Item = &ModelDefinition> {
    self.representatives.values()
  }

  pub fn get(&self, package_key: &str) -> Option<&ModelDefinition> {
    self.representatives.get(package_key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.representatives.keys().map(String::as_str)
  }

  pub fn imports(&self) -> &ImportMap {
    &self.imports
  }

  /// Finds the imports for an operation group.
  ///
  /// The model group key must equal the title-cased group name exactly, so
  /// `antd_model:Widget` serves the operation tags `widget` and `Widget`, while
  /// `antd_model:widget` serves neither.
  pub fn imports_for(&self, group_name: &str) -> Option<(&str, &IndexMap<String, String>)> {
    self
      .imports
      .get_key_value(&title_case(group_name))
      .map(|(key, imports)| (key.as_str(), imports))
  }
}

/// Derives a model's group from its description.
pub fn package_key(description: Option<&str>) -> String {
  description
    .map(str::trim)
    .and_then(|text| text.strip_prefix(MODEL_TAG_PREFIX))
    .map(|group| group.trim().to_string())
    .unwrap_or_else(|| DEFAULT_GROUP.to_string())
}

/// Rejects group keys that would leave the target directory once used as a path segment.
fn check_package_key(model: &ModelDefinition, key: &str) -> GeneratorResult<()> {
  if key == "." || key == ".." || key.contains(['/', '\\']) {
    return Err(GeneratorError::Specification(format!(
      "model '{}' has group '{key}', which is not a single directory name",
      model.name
    )));
  }
  Ok(())
}

/// Deduplicates `models` into one representative per group.
///
/// Stream models are skipped. Every other model is stamped with its group as
/// `package_key` and `path_suffix`, and its schema (tagged with the application
/// name) is appended to the representative's `extra_schemas`.
///
/// # Errors
///
/// Returns a `Specification` error when a group is `.`, `..` or contains a
/// path separator.
pub fn group_models(app_name: &str, models: &[ModelDefinition]) -> GeneratorResult<ModelGroups> {
  let mut representatives: IndexMap<String, ModelDefinition> = IndexMap::new();

  for model in models.iter().filter(|model| !model.is_stream) {
    let key = package_key(model.description.as_deref());
    check_package_key(model, &key)?;

    let mut variant = model.clone();
    variant.schema.custom_tag = app_name.to_string();
    variant.package_key.clone_from(&key);
    variant.path_suffix.clone_from(&key);

    let schema = variant.schema.clone();
    representatives.entry(key).or_insert(variant).extra_schemas.push(schema);
  }

  Ok(ModelGroups {
    representatives,
    imports: resolve_imports(app_name, models),
  })
}

/// Builds the import side table: for each group, the short name of every model in it.
///
/// The short name is the model name with the application name removed once,
/// case-insensitively. Placeholders start empty and are filled by templates.
pub fn resolve_imports(app_name: &str, models: &[ModelDefinition]) -> ImportMap {
  let mut imports = ImportMap::new();

  for model in models.iter().filter(|model| !model.is_stream) {
    imports
      .entry(package_key(model.description.as_deref()))
      .or_default()
      .insert(strip_app_name(&model.name, app_name), String::new());
  }

  imports
}

/// Attaches resolved imports to the matching operation groups.
///
/// A matched group records the model group's directory as `model_dir`, and
/// every import placeholder is filled with the path of that group's data module
/// as seen from a sibling directory. Returns the tagged model groups that matched
/// no operation group.
pub fn attach_imports(groups: &ModelGroups, operation_groups: &mut [OperationGroup]) -> Vec<String> {
  for group in operation_groups.iter_mut() {
    if let Some((key, imports)) = groups.imports_for(&group.name) {
      let module = format!("../{key}/{DATA_MODULE}");
      group.imports = imports.keys().map(|name| (name.clone(), module.clone())).collect();
      group.model_dir = Some(key.to_string());
    }
  }

  groups
    .imports()
    .keys()
    .filter(|key| !key.is_empty())
    .filter(|key| !operation_groups.iter().any(|group| title_case(&group.name) == **key))
    .cloned()
    .collect()
}
