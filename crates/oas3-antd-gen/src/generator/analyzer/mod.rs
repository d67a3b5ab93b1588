//! Indexes the parts of an OpenAPI document the generator consumes.
//!
//! [`AnalyzedSpec`] resolves every component schema and registers every
//! operation under a stable identifier, preserving specification order so that
//! selection and grouping stay deterministic.

use http::Method;
use indexmap::IndexMap;
use oas3::{Spec, spec::ObjectSchema};

use crate::generator::{
  errors::{GeneratorError, GeneratorResult},
  model::AppInfo,
  naming::identifiers::generate_operation_id,
};

/// A component schema resolved against the document.
#[derive(Debug, Clone)]
pub struct ModelEntry {
  pub name: String,
  pub schema: ObjectSchema,
}

/// Metadata for a single API operation.
#[derive(Debug, Clone)]
pub struct OperationEntry {
  /// The `operationId`, or an identifier derived from method and path when absent.
  pub id: String,
  pub method: Method,
  pub path: String,
  pub tags: Vec<String>,
  pub summary: Option<String>,
}

impl OperationEntry {
  /// The tag that decides the operation's group, if any.
  pub fn primary_tag(&self) -> Option<&str> {
    self.tags.iter().map(|tag| tag.trim()).find(|tag| !tag.is_empty())
  }
}

#[derive(Debug)]
pub struct AnalyzedSpec {
  info: AppInfo,
  models: IndexMap<String, ModelEntry>,
  operations: IndexMap<String, OperationEntry>,
}

impl AnalyzedSpec {
  /// Analyzes the document.
  ///
  /// # Errors
  ///
  /// Fails with [`GeneratorError::Specification`] when a component schema cannot be
  /// resolved or two operations share an identifier.
  pub fn new(spec: &Spec) -> GeneratorResult<Self> {
    let info = AppInfo {
      title: spec.info.title.clone(),
      version: spec.info.version.clone(),
      description: spec.info.description.clone(),
    };

    let mut models = IndexMap::new();
    if let Some(components) = &spec.components {
      for (name, schema_ref) in &components.schemas {
        let schema = schema_ref
          .resolve(spec)
          .map_err(|error| GeneratorError::Specification(format!("cannot resolve schema '{name}': {error}")))?;
        models.insert(
          name.clone(),
          ModelEntry {
            name: name.clone(),
            schema,
          },
        );
      }
    }

    let mut operations = IndexMap::new();
    for (path, method, operation) in spec.operations() {
      let id = operation
        .operation_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| generate_operation_id(method.as_str(), path.as_str()));

      if operations.contains_key(&id) {
        return Err(GeneratorError::Specification(format!(
          "duplicate operation id '{id}' at {method} {path}"
        )));
      }

      operations.insert(
        id.clone(),
        OperationEntry {
          id,
          method: method.clone(),
          path,
          tags: operation.tags.clone(),
          summary: operation.summary.clone(),
        },
      );
    }

    Ok(Self {
      info,
      models,
      operations,
    })
  }

  pub fn info(&self) -> &AppInfo {
    &self.info
  }

  pub fn model(&self, name: &str) -> Option<&ModelEntry> {
    self.models.get(name)
  }

  /// Models in specification order.
  pub fn models(&self) -> impl Iterator<Item = &ModelEntry> {
    self.models.values()
  }

  pub fn operation(&self, id: &str) -> Option<&OperationEntry> {
    self.operations.get(id)
  }

  /// Operations in specification order.
  pub fn operations(&self) -> impl Iterator<Item = &OperationEntry> {
    self.operations.values()
  }
}

#[cfg(test)]
mod tests;
