use crate::generator::{
  config::RunMode,
  sections::{AssetRef, SectionKind, Sections},
};

#[test]
fn test_grouped_sections() {
  let sections = Sections::configure(RunMode::Grouped);

  let models: Vec<_> = sections
    .models
    .iter()
    .map(|spec| (spec.name, spec.asset.to_string(), spec.file_name))
    .collect();
  assert_eq!(
    models,
    [
      ("antd data", "asset:antdData".to_string(), "data.ts"),
      ("antd columns", "asset:antdColumns".to_string(), "columns.tsx"),
    ]
  );
  assert!(sections.models.iter().all(|spec| spec.target == "{{ joinPath(target, path_suffix) }}"));

  assert_eq!(sections.operation_groups.len(), 1);
  assert_eq!(sections.operation_groups[0].asset, AssetRef::SERVICE);
  assert_eq!(sections.operation_groups[0].file_name, "service.ts");
  assert_eq!(
    sections.operation_groups[0].target,
    "{{ joinPath(target, titleCase(name)) }}"
  );

  assert_eq!(sections.operations.len(), 1);
  assert_eq!(sections.operations[0].asset.to_string(), "asset:antdList");
  assert_eq!(sections.operations[0].file_name, "list.tsx");
  assert_eq!(sections.operations[0].target, "{{ joinPath(target, package_name) }}");

  assert!(sections.application.is_empty());
}

#[test]
fn test_flat_sections() {
  let sections = Sections::configure(RunMode::Flat);

  assert!(sections.models.is_empty());
  assert!(sections.operation_groups.is_empty());
  assert!(sections.operations.is_empty());

  let files: Vec<_> = sections.application.iter().map(|spec| spec.file_name).collect();
  assert_eq!(files, ["data.ts", "columns.tsx", "list.tsx", "service.ts"]);
  assert!(sections.application.iter().all(|spec| spec.target == "{{ target }}"));
}

#[test]
fn test_iter_pairs_specs_with_kinds() {
  let sections = Sections::configure(RunMode::Grouped);
  let kinds: Vec<_> = sections.iter().map(|(kind, _)| kind).collect();
  assert_eq!(
    kinds,
    [
      SectionKind::Models,
      SectionKind::Models,
      SectionKind::OperationGroups,
      SectionKind::Operations,
    ]
  );
  assert_eq!(Sections::default().iter().count(), 0);
}

#[test]
fn test_configure_is_pure() {
  assert_eq!(Sections::configure(RunMode::Grouped), Sections::configure(RunMode::Grouped));
  assert_ne!(Sections::configure(RunMode::Grouped), Sections::configure(RunMode::Flat));
}
