use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    analyzer::AnalyzedSpec,
    assembler::DEFAULT_OPERATION_GROUP,
    grouping::package_key,
    schema::is_stream_schema,
  },
  ui::{Colors, colors::to_comfy, term_width},
  utils::spec::SpecLoader,
};

async fn analyze(input: &Path) -> anyhow::Result<AnalyzedSpec> {
  let spec = SpecLoader::open(input).await?.parse()?;
  Ok(AnalyzedSpec::new(&spec)?)
}

fn table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(to_comfy(colors.label())));
  }
  table.set_header(row);
  table
}

pub async fn list_models(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let analyzed = analyze(input).await?;
  let mut table = table(colors, &["MODEL", "GROUP", "PROPERTIES"]);

  for model in analyzed.models() {
    let group = if is_stream_schema(&model.schema) {
      "(stream)".to_string()
    } else {
      package_key(model.schema.description.as_deref())
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&model.name)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(group).fg(to_comfy(colors.accent())));
    row.add_cell(
      Cell::new(model.schema.properties.len())
        .fg(to_comfy(colors.primary()))
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let analyzed = analyze(input).await?;
  let mut table = table(colors, &["OPERATION ID", "GROUP", "METHOD", "PATH"]);

  for operation in analyzed.operations() {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&operation.id)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(operation.primary_tag().unwrap_or(DEFAULT_OPERATION_GROUP)).fg(to_comfy(colors.info())));
    row.add_cell(
      Cell::new(operation.method.as_str())
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&operation.path).fg(to_comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}
