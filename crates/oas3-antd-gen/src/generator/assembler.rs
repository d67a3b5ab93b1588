use indexmap::IndexMap;

use crate::generator::{
  analyzer::{AnalyzedSpec, ModelEntry, OperationEntry},
  config::RunConfig,
  errors::{GeneratorError, GeneratorResult},
  model::{ApplicationModel, ModelDefinition, OperationDefinition, OperationGroup, PackageNames},
  naming::{
    NamingStrategy,
    identifiers::{app_name_or_default, title_case},
    packages::{
      DEFAULT_CLIENT_NAME, DEFAULT_CLIENT_TARGET, DEFAULT_MODELS_TARGET, DEFAULT_OPERATIONS_TARGET,
      DEFAULT_SERVER_TARGET,
    },
  },
  schema::{is_stream_schema, model_schema},
};

/// Group of operations that carry no tag.
pub const DEFAULT_OPERATION_GROUP: &str = "operations";

/// Builds the [`ApplicationModel`] from the analyzed spec and the selections.
pub struct AppAssembler<'a, N> {
  config: &'a RunConfig,
  naming: &'a N,
}

impl<'a, N> AppAssembler<'a, N>
where
  N: NamingStrategy,
{
  pub fn new(config: &'a RunConfig, naming: &'a N) -> Self {
    Self { config, naming }
  }

  /// Assembles the application model.
  ///
  /// Models keep their selection order. Operations are grouped by their first tag
  /// (untagged operations go to [`DEFAULT_OPERATION_GROUP`]), groups in first-seen
  /// order; each operation belongs to exactly one group.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::NoOperationsSelected`] when `operations` is empty.
  pub fn assemble(
    &self,
    analyzed: &AnalyzedSpec,
    models: &[&ModelEntry],
    operations: &[&OperationEntry],
  ) -> GeneratorResult<ApplicationModel> {
    if operations.is_empty() {
      return Err(GeneratorError::NoOperationsSelected);
    }

    let info = analyzed.info().clone();
    let name = app_name_or_default(self.config.app_name.as_deref(), Some(&info.title), DEFAULT_CLIENT_NAME);

    Ok(ApplicationModel {
      name,
      info,
      models: models.iter().map(|entry| Self::model_definition(entry)).collect(),
      operation_groups: Self::operation_groups(operations),
      target: self.config.target.clone(),
      packages: self.package_names(),
    })
  }

  /// Resolves the package names, falling back to the defaults for anything unset.
  pub fn package_names(&self) -> PackageNames {
    let config = self.config;
    PackageNames {
      api: self
        .naming
        .mangle_package_path(config.api_package.as_deref(), DEFAULT_OPERATIONS_TARGET),
      model: self
        .naming
        .mangle_package_path(config.model_package.as_deref(), DEFAULT_MODELS_TARGET),
      server: self
        .naming
        .mangle_package_path(config.server_package.as_deref(), DEFAULT_SERVER_TARGET),
      client: self
        .naming
        .mangle_package_name(config.client_package.as_deref(), DEFAULT_CLIENT_TARGET),
    }
  }

  fn model_definition(entry: &ModelEntry) -> ModelDefinition {
    let name = title_case(&entry.name);
    ModelDefinition {
      schema: model_schema(&name, &entry.schema),
      name,
      description: entry.schema.description.clone(),
      extra_schemas: vec![],
      package_key: String::new(),
      path_suffix: String::new(),
      is_stream: is_stream_schema(&entry.schema),
    }
  }

  fn operation_groups(operations: &[&OperationEntry]) -> Vec<OperationGroup> {
    let mut groups: IndexMap<String, OperationGroup> = IndexMap::new();

    for entry in operations {
      let group_name = entry.primary_tag().unwrap_or(DEFAULT_OPERATION_GROUP).to_string();
      groups
        .entry(group_name.clone())
        .or_insert_with(|| OperationGroup {
          name: group_name,
          root_package_name: String::new(),
          operations: vec![],
          imports: IndexMap::new(),
          model_dir: None,
        })
        .operations
        .push(OperationDefinition {
          id: entry.id.clone(),
          name: title_case(&entry.id),
          method: entry.method.as_str().to_string(),
          path: entry.path.clone(),
          summary: entry.summary.clone(),
          package_name: String::new(),
          root_package_name: String::new(),
        });
    }

    groups.into_values().collect()
  }
}
