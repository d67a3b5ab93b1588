use std::path::Path;

use oas3::Spec;

use crate::generator::{
  analyzer::AnalyzedSpec,
  assembler::AppAssembler,
  config::{RunConfig, RunMode},
  model::{ApplicationModel, OperationGroup},
  naming::PackageNaming,
  selection::{select_models, select_operations},
};

pub(super) const WIDGETS_SPEC: &str = include_str!("../../../fixtures/widgets.json");
pub(super) const NO_OPERATIONS_SPEC: &str = include_str!("../../../fixtures/no_operations.json");
pub(super) const UNTAGGED_SPEC: &str = include_str!("../../../fixtures/untagged.yaml");

pub(super) fn parse_spec(spec_json: &str) -> Spec {
  oas3::from_json(spec_json).expect("failed to parse test spec")
}

pub(super) fn parse_yaml_spec(spec_yaml: &str) -> Spec {
  oas3::from_yaml(spec_yaml).expect("failed to parse test spec")
}

pub(super) fn analyze(spec: &Spec) -> AnalyzedSpec {
  AnalyzedSpec::new(spec).expect("failed to analyze test spec")
}

pub(super) fn config(target: impl AsRef<Path>, mode: RunMode) -> RunConfig {
  RunConfig::builder()
    .spec_path("widgets.json")
    .target(target.as_ref())
    .mode(mode)
    .build()
}

pub(super) fn assemble(spec: &Spec, config: &RunConfig) -> ApplicationModel {
  let analyzed = analyze(spec);
  let models = select_models(&analyzed, &config.models).expect("model selection failed");
  let operations = select_operations(&analyzed, &config.operations).expect("operation selection failed");
  AppAssembler::new(config, &PackageNaming)
    .assemble(&analyzed, &models, &operations)
    .expect("assembly failed")
}

pub(super) fn group<'a>(app: &'a ApplicationModel, name: &str) -> Option<&'a OperationGroup> {
  app.operation_groups.iter().find(|group| group.name == name)
}

pub(super) fn widgets_app() -> ApplicationModel {
  assemble(&parse_spec(WIDGETS_SPEC), &config("out", RunMode::Grouped))
}
