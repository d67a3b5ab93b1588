use crate::generator::{
  context::{ApplicationContext, GroupContext, ModelContext, OperationContext},
  errors::GeneratorResult,
  grouping::{attach_imports, group_models},
  metrics::{GenerationStats, GenerationWarning, GroupDetail},
  model::{ApplicationModel, OperationGroup},
  naming::identifiers::title_case,
  operation_filter::{ListSelection, assign_and_filter},
  render::{GeneratedFile, TemplateEngine},
  sections::Sections,
};

pub trait GenerationMode {
  fn generate(
    &self,
    app: &mut ApplicationModel,
    engine: &TemplateEngine<'_>,
    sections: &Sections,
    stats: &mut GenerationStats,
  ) -> GeneratorResult<Vec<GeneratedFile>>;
}

/// One directory per model group and per operation group.
pub struct GroupedMode;

impl GenerationMode for GroupedMode {
  fn generate(
    &self,
    app: &mut ApplicationModel,
    engine: &TemplateEngine<'_>,
    sections: &Sections,
    stats: &mut GenerationStats,
  ) -> GeneratorResult<Vec<GeneratedFile>> {
    let mut files = vec![];

    let groups = group_models(&app.name, &app.models)?;
    stats.record_model_groups(groups.keys().count());
    for representative in groups.representatives() {
      files.extend(engine.render_all(&sections.models, &ModelContext::new(app, representative))?);
    }

    let unmatched = attach_imports(&groups, &mut app.operation_groups);
    stats.record_warnings(
      unmatched
        .into_iter()
        .map(|group| GenerationWarning::UnmatchedModelGroup { group }),
    );

    let selections = assign_and_filter(&app.name, &mut app.operation_groups);
    for (group, selection) in app.operation_groups.iter().zip(&selections) {
      if let Some(operation) = selection.operation(group) {
        files.extend(engine.render_all(&sections.operations, &OperationContext::new(app, group, operation))?);
      }
      files.extend(engine.render_all(&sections.operation_groups, &GroupContext::new(app, group))?);
      record_selection(stats, group, selection);
    }

    Ok(files)
  }
}

/// The whole application rendered into the target directory.
pub struct FlatMode;

impl GenerationMode for FlatMode {
  fn generate(
    &self,
    app: &mut ApplicationModel,
    engine: &TemplateEngine<'_>,
    sections: &Sections,
    stats: &mut GenerationStats,
  ) -> GeneratorResult<Vec<GeneratedFile>> {
    let selections = assign_and_filter(&app.name, &mut app.operation_groups);
    for (group, selection) in app.operation_groups.iter().zip(&selections) {
      record_selection(stats, group, selection);
    }

    let list_operations = app
      .operation_groups
      .iter()
      .zip(&selections)
      .filter_map(|(group, selection)| selection.operation(group))
      .collect();

    engine.render_all(&sections.application, &ApplicationContext::new(app, list_operations))
  }
}

fn record_selection(stats: &mut GenerationStats, group: &OperationGroup, selection: &ListSelection) {
  let selected_operation = selection.operation(group).map(|operation| operation.name.clone());

  if selected_operation.is_none() && !group.operations.is_empty() {
    stats.record_warning(GenerationWarning::NoListOperation {
      group: group.name.clone(),
      expected: selection.expected.clone(),
      operations: group.operations.len(),
    });
  }

  stats.record_group(GroupDetail {
    name: group.name.clone(),
    package_name: title_case(&group.name),
    expected_operation: selection.expected.clone(),
    selected_operation,
    imports: group.imports.len(),
  });
}
