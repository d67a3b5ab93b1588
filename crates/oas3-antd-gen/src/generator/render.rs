//! Template assets and the minijinja engine that renders them.

use std::{
  borrow::Cow,
  path::{Path, PathBuf},
};

use indexmap::IndexMap;
use minijinja::Environment;
use serde::Serialize;

use crate::generator::{
  errors::{GeneratorError, GeneratorResult},
  naming::identifiers::title_case,
  sections::{AssetRef, TemplateSpec},
};

const BUILTIN_ASSETS: [(AssetRef, &str, &str); 8] = [
  (AssetRef::DATA, "antd_data.ts.j2", include_str!("../../templates/antd_data.ts.j2")),
  (
    AssetRef::COLUMNS,
    "antd_columns.tsx.j2",
    include_str!("../../templates/antd_columns.tsx.j2"),
  ),
  (AssetRef::LIST, "antd_list.tsx.j2", include_str!("../../templates/antd_list.tsx.j2")),
  (
    AssetRef::SERVICE,
    "antd_service.ts.j2",
    include_str!("../../templates/antd_service.ts.j2"),
  ),
  (
    AssetRef::APP_DATA,
    "app_data.ts.j2",
    include_str!("../../templates/app_data.ts.j2"),
  ),
  (
    AssetRef::APP_COLUMNS,
    "app_columns.tsx.j2",
    include_str!("../../templates/app_columns.tsx.j2"),
  ),
  (
    AssetRef::APP_LIST,
    "app_list.tsx.j2",
    include_str!("../../templates/app_list.tsx.j2"),
  ),
  (
    AssetRef::APP_SERVICE,
    "app_service.ts.j2",
    include_str!("../../templates/app_service.ts.j2"),
  ),
];

/// Template sources keyed by asset, embedded unless overridden from disk.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
  sources: IndexMap<AssetRef, Cow<'static, str>>,
  overridden: Vec<AssetRef>,
}

impl Default for AssetRegistry {
  fn default() -> Self {
    Self {
      sources: BUILTIN_ASSETS
        .iter()
        .map(|(asset, _, source)| (*asset, Cow::Borrowed(*source)))
        .collect(),
      overridden: vec![],
    }
  }
}

impl AssetRegistry {
  /// Loads the embedded assets, replacing any that have a file of the same name in `template_dir`.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Configuration`] when an override exists but cannot be read.
  pub fn load(template_dir: Option<&Path>) -> GeneratorResult<Self> {
    let mut registry = Self::default();
    let Some(dir) = template_dir else {
      return Ok(registry);
    };

    for (asset, file_name, _) in BUILTIN_ASSETS {
      let path = dir.join(file_name);
      if !path.is_file() {
        continue;
      }
      let source = std::fs::read_to_string(&path).map_err(|error| {
        GeneratorError::Configuration(format!("cannot read template '{}': {error}", path.display()))
      })?;
      registry.sources.insert(asset, Cow::Owned(source));
      registry.overridden.push(asset);
    }

    Ok(registry)
  }

  /// Assets replaced from the template directory, in load order.
  pub fn overridden(&self) -> &[AssetRef] {
    &self.overridden
  }
}

/// A rendered artifact waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub path: PathBuf,
  pub contents: String,
  /// Name of the template spec that produced the file.
  pub template: &'static str,
}

/// Compiled templates plus the helpers available to target expressions and templates.
pub struct TemplateEngine<'a> {
  env: Environment<'a>,
}

impl<'a> TemplateEngine<'a> {
  /// Compiles every asset of `registry`.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Render`] naming the asset whose source does not parse.
  pub fn new(registry: &'a AssetRegistry) -> GeneratorResult<Self> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_function("joinPath", join_path);
    env.add_function("titleCase", |name: String| title_case(&name));
    env.add_function("trimPrefix", trim_prefix);
    env.add_filter("titleCase", |name: String| title_case(&name));

    for (asset, source) in &registry.sources {
      env
        .add_template(asset.name(), source.as_ref())
        .map_err(|error| GeneratorError::render(asset.to_string(), error))?;
    }

    Ok(Self { env })
  }

  /// Evaluates a target expression against `ctx`.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Render`] when the expression fails or evaluates to nothing.
  pub fn target<S: Serialize>(&self, spec: &TemplateSpec, ctx: &S) -> GeneratorResult<PathBuf> {
    let target = self
      .env
      .render_str(spec.target, ctx)
      .map_err(|error| GeneratorError::render(spec.name, error))?;
    let target = target.trim();
    if target.is_empty() {
      return Err(GeneratorError::render(
        spec.name,
        format!("target '{}' evaluated to an empty path", spec.target),
      ));
    }
    Ok(PathBuf::from(target))
  }

  /// Renders one spec against `ctx`.
  ///
  /// # Errors
  ///
  /// Returns [`GeneratorError::Render`] when the target or the template fails.
  pub fn render<S: Serialize>(&self, spec: &TemplateSpec, ctx: &S) -> GeneratorResult<GeneratedFile> {
    let dir = self.target(spec, ctx)?;
    let contents = self
      .env
      .get_template(spec.asset.name())
      .and_then(|template| template.render(ctx))
      .map_err(|error| GeneratorError::render(spec.name, error))?;

    Ok(GeneratedFile {
      path: dir.join(spec.file_name),
      contents,
      template: spec.name,
    })
  }

  /// Renders every spec of a section against the same context, in order.
  pub fn render_all<S: Serialize>(&self, specs: &[TemplateSpec], ctx: &S) -> GeneratorResult<Vec<GeneratedFile>> {
    specs.iter().map(|spec| self.render(spec, ctx)).collect()
  }
}

/// Joins `segment` onto `base`; an empty segment yields `base`.
pub(crate) fn join_path(base: String, segment: String) -> String {
  let segment = segment.trim_matches(['/', '\\']);
  if segment.is_empty() {
    return base;
  }
  Path::new(&base).join(segment).to_string_lossy().into_owned()
}

pub(crate) fn trim_prefix(value: String, prefix: String) -> String {
  match value.strip_prefix(prefix.as_str()) {
    Some(rest) => rest.to_string(),
    None => value,
  }
}
