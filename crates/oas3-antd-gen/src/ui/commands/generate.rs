use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    config::{RunConfig, RunMode},
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
    render::GeneratedFile,
    sections::Sections,
  },
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub run: RunConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      mode,
      name,
      models,
      operations,
      api_package,
      model_package,
      server_package,
      client_package,
      template_dir,
      dump_data,
      verbose,
      quiet,
    } = command;

    let run = RunConfig::builder()
      .spec_path(input)
      .target(output)
      .mode(mode.into())
      .maybe_app_name(name)
      .models(models)
      .operations(operations)
      .maybe_api_package(api_package)
      .maybe_model_package(model_package)
      .maybe_server_package(server_package)
      .maybe_client_package(client_package)
      .maybe_template_dir(template_dir)
      .dump_data(dump_data)
      .build();
    run.validate()?;

    Ok(Self { run, verbose, quiet })
  }

  async fn load_spec(&self) -> anyhow::Result<oas3::Spec> {
    Ok(SpecLoader::open(&self.run.spec_path).await?.parse()?)
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    for file in files {
      if let Some(parent) = file.path.parent() {
        tokio::fs::create_dir_all(parent).await?;
      }
      tokio::fs::write(&file.path, &file.contents).await?;
    }
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.run.spec_path.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    let message = match self.config.run.mode {
      RunMode::Grouped => "Generating grouped Ant Design pages...",
      RunMode::Flat => "Generating Ant Design application files...",
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_sections(&self, sections: &Sections) {
    if !self.config.verbose || self.config.quiet {
      return;
    }

    for (kind, spec) in sections.iter() {
      println!(
        "              {:<18} {} -> {}",
        kind.to_string().with(self.colors.label()),
        spec.asset.to_string().with(self.colors.info()),
        spec.file_name.with(self.colors.value())
      );
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models selected:", stats.models_selected.to_string());
    if stats.stream_models_skipped > 0 {
      self.stat("", format!("{} stream models skipped", stats.stream_models_skipped));
    }
    if self.config.run.mode == RunMode::Grouped {
      self.stat("Model groups:", stats.model_groups.to_string());
    }
    self.stat("Operations selected:", stats.operations_selected.to_string());
    self.stat("Operation groups:", stats.operation_groups.to_string());
    self.stat("List views:", stats.list_views_rendered.to_string());
    self.stat("Files rendered:", stats.files_rendered.to_string());
    if stats.templates_overridden > 0 {
      self.stat("Templates overridden:", stats.templates_overridden.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_group_details(stats);
    self.print_warnings(stats);
  }

  fn print_group_details(&self, stats: &GenerationStats) {
    if !self.config.verbose {
      return;
    }

    for detail in &stats.group_details {
      let selected = match &detail.selected_operation {
        Some(name) => name.clone().with(self.colors.success()),
        None => format!("no {}", detail.expected_operation).with(self.colors.accent()),
      };
      println!(
        "              {} -> {}: {} ({} imports)",
        detail.name.as_str().with(self.colors.accent()),
        detail.package_name.as_str().with(self.colors.info()),
        selected,
        detail.imports
      );
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, files: &[GeneratedFile]) {
    self.info(
      &format!("Writing {} files to: {}", files.len(), self.config.run.target.display())
        .with(self.colors.primary())
        .to_string(),
    );

    if self.config.verbose && !self.config.quiet {
      for file in files {
        println!(
          "              {} {}",
          file.template.with(self.colors.label()),
          file.path.display().to_string().with(self.colors.info())
        );
      }
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Ant Design pages".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  if !config.run.dump_data {
    logger.log_loading();
  }
  let spec = config.load_spec().await?;
  let orchestrator = Orchestrator::new(spec, config.run.clone());

  if config.run.dump_data {
    let app = orchestrator.assemble()?;
    println!("{}", serde_json::to_string_pretty(&app)?);
    return Ok(());
  }

  logger.log_generating();
  let GeneratedOutput {
    sections, files, stats, ..
  } = orchestrator.run()?;
  logger.print_sections(&sections);
  logger.print_statistics(&stats);

  logger.log_writing(&files);
  config.write_files(&files).await?;

  logger.log_success();
  Ok(())
}
