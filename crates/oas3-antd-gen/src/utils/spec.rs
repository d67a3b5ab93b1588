use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use oas3::OpenApiV3Spec;

use crate::generator::errors::{GeneratorError, GeneratorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(OsStr::to_str) {
      Some("yaml" | "yml") => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Memory-maps a specification file and parses it as JSON or YAML by extension.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> GeneratorResult<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .map_err(|error| GeneratorError::Specification(format!("cannot open '{}': {error}", path.display())))?;

    Ok(Self {
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn parse(&self) -> GeneratorResult<oas3::Spec> {
    match self.format {
      SpecFormat::Json => serde_json::from_slice::<OpenApiV3Spec>(self.file.as_slice())
        .map_err(|error| GeneratorError::Specification(format!("invalid JSON: {error}"))),
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice())
          .map_err(|error| GeneratorError::Specification(format!("invalid UTF-8: {error}")))?;
        oas3::from_yaml(content).map_err(|error| GeneratorError::Specification(format!("invalid YAML: {error}")))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn test_format_from_path() {
    assert_eq!(SpecFormat::from_path(&PathBuf::from("api.yaml")), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path(&PathBuf::from("api.yml")), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path(&PathBuf::from("api.json")), SpecFormat::Json);
    assert_eq!(SpecFormat::from_path(&PathBuf::from("api")), SpecFormat::Json);
  }

  #[tokio::test]
  async fn test_loads_json_and_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("widgets.json");
    let yaml = dir.path().join("untagged.yaml");
    tokio::fs::write(&json, include_str!("../../fixtures/widgets.json")).await.unwrap();
    tokio::fs::write(&yaml, include_str!("../../fixtures/untagged.yaml")).await.unwrap();

    let spec = SpecLoader::open(&json).await.unwrap().parse().unwrap();
    assert_eq!(spec.info.title, "App");

    let spec = SpecLoader::open(&yaml).await.unwrap().parse().unwrap();
    assert_eq!(spec.info.title, "Store API");
  }

  #[tokio::test]
  async fn test_invalid_documents_are_specification_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let result = SpecLoader::open(&path).await.unwrap().parse();
    assert!(matches!(result, Err(GeneratorError::Specification(_))));

    let missing = SpecLoader::open(&dir.path().join("missing.json")).await;
    assert!(matches!(missing, Err(GeneratorError::Specification(_))));
  }
}
