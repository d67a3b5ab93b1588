use inflections::Inflect;

use super::identifiers::sanitize;

pub const DEFAULT_CLIENT_NAME: &str = "rest";
pub const DEFAULT_CLIENT_TARGET: &str = "client";
pub const DEFAULT_OPERATIONS_TARGET: &str = "operations";
pub const DEFAULT_MODELS_TARGET: &str = "models";
pub const DEFAULT_SERVER_TARGET: &str = "restapi";

/// Turns user supplied package names into identifiers usable as directory and
/// package names.
///
/// Implementations must be deterministic and total: any input, including an
/// empty or entirely illegal one, yields a usable identifier.
pub trait NamingStrategy {
  /// Mangles a single package name. Only the last path segment of `desired` is kept.
  fn mangle_package_name(&self, desired: Option<&str>, default: &str) -> String;

  /// Mangles a slash separated package path, segment by segment.
  fn mangle_package_path(&self, desired: Option<&str>, default: &str) -> String;
}

/// Default strategy: `snake_case` segments built from the ASCII transliteration of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageNaming;

impl PackageNaming {
  fn segment(raw: &str) -> Option<String> {
    let segment = sanitize(raw).to_snake_case();
    (!segment.is_empty()).then_some(segment)
  }
}

impl NamingStrategy for PackageNaming {
  fn mangle_package_name(&self, desired: Option<&str>, default: &str) -> String {
    desired
      .and_then(|name| name.rsplit(['/', '\\']).find_map(Self::segment))
      .unwrap_or_else(|| default.to_string())
  }

  fn mangle_package_path(&self, desired: Option<&str>, default: &str) -> String {
    let segments = desired
      .map(|path| path.split(['/', '\\']).filter_map(Self::segment).collect::<Vec<_>>())
      .unwrap_or_default();

    if segments.is_empty() {
      default.to_string()
    } else {
      segments.join("/")
    }
  }
}
