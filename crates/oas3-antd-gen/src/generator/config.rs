use std::path::PathBuf;

use crate::generator::errors::{GeneratorError, GeneratorResult};

/// How rendered artifacts are laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum RunMode {
  /// One directory per model group and per operation group.
  #[default]
  #[strum(to_string = "grouped")]
  Grouped,
  /// Four files for the whole application in the target directory.
  #[strum(to_string = "flat")]
  Flat,
}

/// Immutable options for one generation run.
#[derive(Debug, Clone, bon::Builder)]
pub struct RunConfig {
  #[builder(into)]
  pub spec_path: PathBuf,
  #[builder(into)]
  pub target: PathBuf,
  #[builder(default)]
  pub mode: RunMode,
  /// Overrides the application name derived from the spec title.
  #[builder(into)]
  pub app_name: Option<String>,
  /// Component schema names to generate; empty selects all.
  #[builder(default)]
  pub models: Vec<String>,
  /// Operation identifiers to generate; empty selects all.
  #[builder(default)]
  pub operations: Vec<String>,
  #[builder(into)]
  pub api_package: Option<String>,
  #[builder(into)]
  pub model_package: Option<String>,
  #[builder(into)]
  pub server_package: Option<String>,
  #[builder(into)]
  pub client_package: Option<String>,
  /// Directory whose template files replace the embedded assets of the same name.
  #[builder(into)]
  pub template_dir: Option<PathBuf>,
  #[builder(default)]
  pub dump_data: bool,
}

impl RunConfig {
  /// Checks the options before any generation work starts.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Configuration`] for an empty spec path, an empty target,
  /// a target that is an existing regular file, or a template directory that does not exist.
  pub fn validate(&self) -> GeneratorResult<()> {
    if self.spec_path.as_os_str().is_empty() {
      return Err(GeneratorError::Configuration("a specification path is required".to_string()));
    }

    if self.target.as_os_str().is_empty() {
      return Err(GeneratorError::Configuration("a target directory is required".to_string()));
    }

    if self.target.is_file() {
      return Err(GeneratorError::Configuration(format!(
        "target '{}' is a file, expected a directory",
        self.target.display()
      )));
    }

    if let Some(dir) = &self.template_dir
      && !dir.is_dir()
    {
      return Err(GeneratorError::Configuration(format!(
        "template directory '{}' does not exist",
        dir.display()
      )));
    }

    Ok(())
  }
}
