//! CSV export of invalid records.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::InvalidRow;

/// Separator between messages in the `errors` column.
pub const ERROR_SEPARATOR: &str = "; ";

/// Write `rows` as CSV with the columns `row`, `id` and `errors`.
///
/// The header is written even when there are no rows.
pub fn write_invalid_rows<W: Write>(writer: W, rows: &[InvalidRow]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["row", "id", "errors"])?;
    for row in rows {
        csv.write_record([
            row.row.to_string(),
            row.id.clone().unwrap_or_default(),
            row.errors.join(ERROR_SEPARATOR),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_invalid_rows_to_path(path: &Path, rows: &[InvalidRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create report {}", path.display()))?;
    write_invalid_rows(file, rows).with_context(|| format!("write report {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote invalid record report");
    Ok(())
}
