use super::error::{ProcessError, ProcessResult};
use super::row::NormalizedRow;
use crate::extract::RawTable;
use tracing::{debug, instrument};

/// Trim whitespace; blank cells stay absent.
fn clean_cell(cell: &Option<String>) -> Option<String> {
    cell.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Stage 1: collapse variable-width raw rows to the fixed two-column shape.
///
/// The header row at index 0 is dropped. The effective column count comes
/// from the first data row; anything beyond index 1 is extraction noise and
/// gets truncated away. Truncating a row that is already narrow is a no-op,
/// so the drop never fails on short rows; a data row with fewer than two
/// columns, however, is structurally unusable and fatal.
#[instrument(level = "debug", skip(table), fields(rows = table.len()))]
pub fn normalize(table: &RawTable) -> ProcessResult<Vec<NormalizedRow>> {
    let data_rows = if table.is_empty() {
        &table.rows[..]
    } else {
        &table.rows[1..]
    };

    let effective_cols = data_rows.first().map(Vec::len).unwrap_or(0);
    if effective_cols > 2 {
        debug!(
            effective_cols,
            dropped = effective_cols - 2,
            "dropping extraction noise columns beyond index 1"
        );
    }

    let mut out = Vec::with_capacity(data_rows.len());
    for (i, raw) in data_rows.iter().enumerate() {
        if raw.len() < 2 {
            return Err(ProcessError::ExtractionShape {
                row: i + 1,
                cols: raw.len(),
            });
        }
        out.push(NormalizedRow {
            entity: clean_cell(&raw[0]),
            status_raw: clean_cell(&raw[1]),
        });
    }

    debug!(rows = out.len(), "normalized");
    Ok(out)
}
