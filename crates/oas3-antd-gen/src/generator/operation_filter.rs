//! Assigns package fields to operations and picks each group's list operation.
//!
//! A group named `widget` renders a list view only for the operation named
//! exactly `ListWidgets`: the literal `List` followed by the plural of the
//! title-cased group name. Every other operation is assigned its package
//! fields but never rendered on its own.

use crate::generator::{
  model::{OperationDefinition, OperationGroup},
  naming::identifiers::{pluralize, title_case},
};

const LIST_PREFIX: &str = "List";

/// The outcome of filtering one operation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSelection {
  pub expected: String,
  /// Index into the group's operations of the operation to render.
  pub selected: Option<usize>,
}

impl ListSelection {
  pub fn operation<'a>(&self, group: &'a OperationGroup) -> Option<&'a OperationDefinition> {
    self.selected.and_then(|index| group.operations.get(index))
  }
}

/// The name an operation must carry to be rendered as the group's list view.
pub fn expected_list_name(group_name: &str) -> String {
  format!("{LIST_PREFIX}{}", pluralize(&title_case(group_name)))
}

/// Assigns package fields to every operation of `group` and selects at most one to render.
///
/// When several operations carry the expected name, the first one wins.
pub fn assign_and_select(app_name: &str, group: &mut OperationGroup) -> ListSelection {
  let package_name = title_case(&group.name);
  let expected = expected_list_name(&group.name);

  group.root_package_name = app_name.to_string();
  for operation in &mut group.operations {
    operation.package_name.clone_from(&package_name);
    operation.root_package_name = app_name.to_string();
  }

  let selected = group.operations.iter().position(|operation| operation.name == expected);

  ListSelection { expected, selected }
}

/// Runs [`assign_and_select`] over every group, in order.
pub fn assign_and_filter(app_name: &str, groups: &mut [OperationGroup]) -> Vec<ListSelection> {
  groups
    .iter_mut()
    .map(|group| assign_and_select(app_name, group))
    .collect()
}
