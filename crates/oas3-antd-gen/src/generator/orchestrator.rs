//! Orchestration for the OpenAPI to Ant Design scaffold pipeline.
//!
//! The [`Orchestrator`] owns a parsed specification and an immutable
//! [`RunConfig`] and drives every stage in a fixed, fail-fast order:
//!
//! 1. validate the run options
//! 2. load and compile the template assets
//! 3. analyze the specification
//! 4. select models, then operations
//! 5. assemble the application model
//! 6. configure the sections for the run mode
//! 7. render (grouped or flat)
//!
//! The first error of any stage aborts the run. Rendering produces an ordered
//! list of files; writing them is left to the caller.

use indexmap::IndexMap;

use crate::generator::{
  analyzer::AnalyzedSpec,
  assembler::AppAssembler,
  config::{RunConfig, RunMode},
  errors::GeneratorResult,
  metrics::{GenerationStats, GenerationWarning},
  mode::{FlatMode, GenerationMode, GroupedMode},
  model::ApplicationModel,
  naming::{NamingStrategy, PackageNaming},
  render::{AssetRegistry, GeneratedFile, TemplateEngine},
  sections::Sections,
  selection::{select_models, select_operations},
};

/// Everything a run produced, with files in write order.
#[derive(Debug)]
pub struct GeneratedOutput {
  pub app: ApplicationModel,
  pub sections: Sections,
  pub files: Vec<GeneratedFile>,
  pub stats: GenerationStats,
}

pub struct Orchestrator<N = PackageNaming> {
  spec: oas3::Spec,
  config: RunConfig,
  naming: N,
}

impl Orchestrator {
  pub fn new(spec: oas3::Spec, config: RunConfig) -> Self {
    Self::with_naming(spec, config, PackageNaming)
  }
}

impl<N> Orchestrator<N>
where
  N: NamingStrategy,
{
  pub fn with_naming(spec: oas3::Spec, config: RunConfig, naming: N) -> Self {
    Self { spec, config, naming }
  }

  /// Runs the pipeline up to the assembled application model, without rendering.
  ///
  /// # Errors
  ///
  /// Returns the first configuration, specification or selection error.
  pub fn assemble(&self) -> GeneratorResult<ApplicationModel> {
    self.config.validate()?;
    self.build(&mut GenerationStats::default())
  }

  /// Runs the whole pipeline.
  ///
  /// # Errors
  ///
  /// Returns the first error of any stage; nothing is rendered past it.
  pub fn run(&self) -> GeneratorResult<GeneratedOutput> {
    self.config.validate()?;

    let registry = AssetRegistry::load(self.config.template_dir.as_deref())?;
    let engine = TemplateEngine::new(&registry)?;

    let mut stats = GenerationStats::default();
    stats.record_overrides(registry.overridden().len());
    let mut app = self.build(&mut stats)?;

    let sections = Sections::configure(self.config.mode);
    let mode: &dyn GenerationMode = match self.config.mode {
      RunMode::Grouped => &GroupedMode,
      RunMode::Flat => &FlatMode,
    };
    let files = mode.generate(&mut app, &engine, &sections, &mut stats)?;

    stats.record_files(files.len());
    stats.record_warnings(duplicate_paths(&files));

    Ok(GeneratedOutput {
      app,
      sections,
      files,
      stats,
    })
  }

  fn build(&self, stats: &mut GenerationStats) -> GeneratorResult<ApplicationModel> {
    let analyzed = AnalyzedSpec::new(&self.spec)?;
    let models = select_models(&analyzed, &self.config.models)?;
    let operations = select_operations(&analyzed, &self.config.operations)?;

    let app = AppAssembler::new(&self.config, &self.naming).assemble(&analyzed, &models, &operations)?;

    let stream_models = app.models.iter().filter(|model| model.is_stream).count();
    stats.record_models(app.models.len(), stream_models);
    stats.record_operations(operations.len(), app.operation_groups.len());

    Ok(app)
  }
}

fn duplicate_paths(files: &[GeneratedFile]) -> Vec<GenerationWarning> {
  let mut counts: IndexMap<_, usize> = IndexMap::new();
  for file in files {
    *counts.entry(&file.path).or_default() += 1;
  }

  counts
    .into_iter()
    .filter(|(_, count)| *count > 1)
    .map(|(path, count)| GenerationWarning::DuplicateOutputPath {
      path: path.display().to_string(),
      count,
    })
    .collect()
}
