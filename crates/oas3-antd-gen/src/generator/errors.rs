use thiserror::Error;

/// Terminal failures of a generation run.
///
/// Every stage of the pipeline returns the first error it encounters; none of
/// these are retried or recovered from.
#[derive(Debug, Error)]
pub enum GeneratorError {
  /// Invalid run options, reported before any I/O takes place.
  #[error("invalid configuration: {0}")]
  Configuration(String),

  /// The specification could not be loaded or analyzed.
  #[error("invalid specification: {0}")]
  Specification(String),

  /// A requested model or operation does not exist in the specification.
  #[error("unknown {kind} '{name}'")]
  Selection { kind: SelectionKind, name: String },

  #[error("no operations were selected")]
  NoOperationsSelected,

  /// The template engine failed for a given template spec.
  #[error("failed to render '{template}': {message}")]
  Render { template: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum SelectionKind {
  #[strum(to_string = "model")]
  Model,
  #[strum(to_string = "operation")]
  Operation,
}

impl GeneratorError {
  pub(crate) fn render(template: impl Into<String>, error: impl std::fmt::Display) -> Self {
    Self::Render {
      template: template.into(),
      message: error.to_string(),
    }
  }

  pub(crate) fn unknown_model(name: impl Into<String>) -> Self {
    Self::Selection {
      kind: SelectionKind::Model,
      name: name.into(),
    }
  }

  pub(crate) fn unknown_operation(name: impl Into<String>) -> Self {
    Self::Selection {
      kind: SelectionKind::Operation,
      name: name.into(),
    }
  }
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
