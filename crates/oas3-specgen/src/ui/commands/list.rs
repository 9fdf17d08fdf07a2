use std::path::Path;

use anyhow::Context;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::ui::{Colors, term_width};

#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  operation_id: String,
  method: String,
  path: String,
  tags: String,
}

/// Collects the operations of a document, sorted by path then method.
fn collect_operations(spec: &oas3::Spec) -> Vec<OperationRow> {
  let mut rows: Vec<_> = spec
    .operations()
    .map(|(path, method, operation)| OperationRow {
      operation_id: operation.operation_id.clone().unwrap_or_else(|| "-".to_string()),
      method: method.as_str().to_string(),
      path,
      tags: operation.tags.join(", "),
    })
    .collect();

  rows.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));
  rows
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let file_content = tokio::fs::read_to_string(input)
    .await
    .with_context(|| format!("reading {}", input.display()))?;
  let spec: oas3::Spec = oas3::from_json(file_content)?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["OPERATION ID", "METHOD", "PATH", "TAGS"] {
    header.add_cell(Cell::new(title).fg(Colors::for_table(colors.label())));
  }
  table.set_header(header);

  for op in collect_operations(&spec) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(op.operation_id)
        .fg(Colors::for_table(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(op.method)
        .fg(Colors::for_table(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(op.path).fg(Colors::for_table(colors.primary())));
    row.add_cell(Cell::new(op.tags).fg(Colors::for_table(colors.timestamp())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
