//! Template specs grouped by the kind of item they render.
//!
//! Each spec pairs an embedded asset with a target expression evaluated
//! against the item's context and a fixed output file name.

use std::fmt;

use crate::generator::config::RunMode;

pub const DATA_FILE: &str = "data.ts";
pub const COLUMNS_FILE: &str = "columns.tsx";
pub const LIST_FILE: &str = "list.tsx";
pub const SERVICE_FILE: &str = "service.ts";

const MODEL_TARGET: &str = "{{ joinPath(target, path_suffix) }}";
const GROUP_TARGET: &str = "{{ joinPath(target, titleCase(name)) }}";
const OPERATION_TARGET: &str = "{{ joinPath(target, package_name) }}";
const APPLICATION_TARGET: &str = "{{ target }}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SectionKind {
  #[strum(to_string = "models")]
  Models,
  #[strum(to_string = "operation groups")]
  OperationGroups,
  #[strum(to_string = "operations")]
  Operations,
  #[strum(to_string = "application")]
  Application,
}

/// Name of an embedded template asset, displayed as `asset:<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetRef(&'static str);

impl AssetRef {
  pub const DATA: Self = Self("antdData");
  pub const COLUMNS: Self = Self("antdColumns");
  pub const LIST: Self = Self("antdList");
  pub const SERVICE: Self = Self("antdService");
  pub const APP_DATA: Self = Self("antdAppData");
  pub const APP_COLUMNS: Self = Self("antdAppColumns");
  pub const APP_LIST: Self = Self("antdAppList");
  pub const APP_SERVICE: Self = Self("antdAppService");

  pub const fn name(self) -> &'static str {
    self.0
  }
}

impl fmt::Display for AssetRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "asset:{}", self.0)
  }
}

/// One rendering instruction: which asset, where, and under which file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
  pub name: &'static str,
  pub asset: AssetRef,
  pub target: &'static str,
  pub file_name: &'static str,
}

impl TemplateSpec {
  const fn new(name: &'static str, asset: AssetRef, target: &'static str, file_name: &'static str) -> Self {
    Self {
      name,
      asset,
      target,
      file_name,
    }
  }
}

/// The template specs of a run, by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
  pub models: Vec<TemplateSpec>,
  pub operation_groups: Vec<TemplateSpec>,
  pub operations: Vec<TemplateSpec>,
  pub application: Vec<TemplateSpec>,
}

impl Sections {
  /// Returns the sections for `mode`.
  ///
  /// Grouped mode renders per model group, per operation group and per list
  /// operation, with an empty application section. Flat mode renders only the
  /// application section, as four files directly under the target.
  pub fn configure(mode: RunMode) -> Self {
    match mode {
      RunMode::Grouped => Self {
        models: vec![
          TemplateSpec::new("antd data", AssetRef::DATA, MODEL_TARGET, DATA_FILE),
          TemplateSpec::new("antd columns", AssetRef::COLUMNS, MODEL_TARGET, COLUMNS_FILE),
        ],
        operation_groups: vec![TemplateSpec::new(
          "antd service",
          AssetRef::SERVICE,
          GROUP_TARGET,
          SERVICE_FILE,
        )],
        operations: vec![TemplateSpec::new("antd list", AssetRef::LIST, OPERATION_TARGET, LIST_FILE)],
        application: vec![],
      },
      RunMode::Flat => Self {
        application: vec![
          TemplateSpec::new("antd app data", AssetRef::APP_DATA, APPLICATION_TARGET, DATA_FILE),
          TemplateSpec::new("antd app columns", AssetRef::APP_COLUMNS, APPLICATION_TARGET, COLUMNS_FILE),
          TemplateSpec::new("antd app list", AssetRef::APP_LIST, APPLICATION_TARGET, LIST_FILE),
          TemplateSpec::new("antd app service", AssetRef::APP_SERVICE, APPLICATION_TARGET, SERVICE_FILE),
        ],
        ..Self::default()
      },
    }
  }

  pub fn get(&self, kind: SectionKind) -> &[TemplateSpec] {
    match kind {
      SectionKind::Models => &self.models,
      SectionKind::OperationGroups => &self.operation_groups,
      SectionKind::Operations => &self.operations,
      SectionKind::Application => &self.application,
    }
  }

  /// Every spec with its section, in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &TemplateSpec)> {
    [
      SectionKind::Models,
      SectionKind::OperationGroups,
      SectionKind::Operations,
      SectionKind::Application,
    ]
    .into_iter()
    .flat_map(move |kind| self.get(kind).iter().map(move |spec| (kind, spec)))
  }
}
