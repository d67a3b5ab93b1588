//! Resolves the requested model names and operation identifiers.
//!
//! An empty (or all blank) request selects everything, in specification order. A non-empty
//! request is honored in request order; duplicates are selected once and any
//! unknown name aborts the selection.

use indexmap::IndexSet;

use crate::generator::{
  analyzer::{AnalyzedSpec, ModelEntry, OperationEntry},
  errors::{GeneratorError, GeneratorResult},
};

pub fn select_models<'a, S>(analyzed: &'a AnalyzedSpec, names: &[S]) -> GeneratorResult<Vec<&'a ModelEntry>>
where
  S: AsRef<str>,
{
  let names = requested(names);
  if names.is_empty() {
    return Ok(analyzed.models().collect());
  }

  names
    .into_iter()
    .map(|name| analyzed.model(name).ok_or_else(|| GeneratorError::unknown_model(name)))
    .collect()
}

pub fn select_operations<'a, S>(analyzed: &'a AnalyzedSpec, ids: &[S]) -> GeneratorResult<Vec<&'a OperationEntry>>
where
  S: AsRef<str>,
{
  let ids = requested(ids);
  if ids.is_empty() {
    return Ok(analyzed.operations().collect());
  }

  ids
    .into_iter()
    .map(|id| analyzed.operation(id).ok_or_else(|| GeneratorError::unknown_operation(id)))
    .collect()
}

fn requested<S>(names: &[S]) -> IndexSet<&str>
where
  S: AsRef<str>,
{
  names.iter().map(AsRef::as_ref).map(str::trim).filter(|name| !name.is_empty()).collect()
}
