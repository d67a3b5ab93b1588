use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};
use crate::generator::config::RunMode;

#[derive(Parser, Debug)]
#[command(name = "oas3-antd-gen")]
#[command(author, version, about = "OpenAPI to Ant Design admin scaffold generator")]
#[command(styles = super::Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate Ant Design pages from OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI JSON or YAML specification file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the generated files are written under
  #[arg(short, long, value_name = "DIR")]
  pub output: PathBuf,

  /// Output layout: one directory per group, or four files for the whole application
  #[arg(short, long, value_enum, default_value = "grouped")]
  pub mode: GenerateMode,

  /// Application name (default: derived from the spec title)
  #[arg(long, value_name = "NAME")]
  pub name: Option<String>,

  /// Generate only these component schemas (comma-separated)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub models: Vec<String>,

  /// Generate only these operations (comma-separated operation IDs)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub operations: Vec<String>,

  /// Package for the API pages
  #[arg(long, value_name = "PACKAGE")]
  pub api_package: Option<String>,

  /// Package for the data models
  #[arg(long, value_name = "PACKAGE")]
  pub model_package: Option<String>,

  /// Package for the server side
  #[arg(long, value_name = "PACKAGE")]
  pub server_package: Option<String>,

  /// Package for the client
  #[arg(long, value_name = "PACKAGE")]
  pub client_package: Option<String>,

  /// Directory with templates replacing the built-in ones of the same file name
  #[arg(long, value_name = "DIR")]
  pub template_dir: Option<PathBuf>,

  /// Print the assembled application model as JSON instead of generating files
  #[arg(long, default_value_t = false)]
  pub dump_data: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateMode {
  Grouped,
  Flat,
}

impl From<GenerateMode> for RunMode {
  fn from(mode: GenerateMode) -> Self {
    match mode {
      GenerateMode::Grouped => Self::Grouped,
      GenerateMode::Flat => Self::Flat,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all component schemas with their model group
  Models {
    /// Path to the OpenAPI JSON or YAML specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// List all operations with their operation group
  Operations {
    /// Path to the OpenAPI JSON or YAML specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
