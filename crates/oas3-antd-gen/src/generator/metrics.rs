use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub models_selected: usize,
  pub stream_models_skipped: usize,
  pub model_groups: usize,
  pub operations_selected: usize,
  pub operation_groups: usize,
  pub list_views_rendered: usize,
  pub files_rendered: usize,
  pub templates_overridden: usize,
  pub group_details: Vec<GroupDetail>,
  pub warnings: Vec<GenerationWarning>,
}

/// Per operation group outcome of list operation selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDetail {
  pub name: String,
  pub package_name: String,
  pub expected_operation: String,
  pub selected_operation: Option<String>,
  pub imports: usize,
}

impl GenerationStats {
  pub fn record_models(&mut self, selected: usize, stream_models: usize) {
    self.models_selected += selected;
    self.stream_models_skipped += stream_models;
  }

  pub fn record_model_groups(&mut self, count: usize) {
    self.model_groups += count;
  }

  pub fn record_operations(&mut self, selected: usize, groups: usize) {
    self.operations_selected += selected;
    self.operation_groups += groups;
  }

  pub fn record_group(&mut self, detail: GroupDetail) {
    if detail.selected_operation.is_some() {
      self.list_views_rendered += 1;
    }
    self.group_details.push(detail);
  }

  pub fn record_files(&mut self, count: usize) {
    self.files_rendered += count;
  }

  pub fn record_overrides(&mut self, count: usize) {
    self.templates_overridden += count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Group '{group}' has {operations} operation(s) but none named '{expected}'; no list view rendered")]
  NoListOperation {
    group: String,
    expected: String,
    operations: usize,
  },
  #[strum(to_string = "Model group '{group}' matches no operation group; its imports are unused")]
  UnmatchedModelGroup { group: String },
  #[strum(to_string = "'{path}' is rendered {count} times; the last render wins")]
  DuplicateOutputPath { path: String, count: usize },
}

impl GenerationWarning {
  /// Warnings that mean an expected artifact was not generated.
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::NoListOperation { .. })
  }
}
