pub mod date;
pub mod error;
pub mod normalize;
pub mod propagate;
pub mod reconcile;
pub mod records;
pub mod row;

pub use error::{ProcessError, ProcessResult};
pub use row::{AttendanceRecord, NormalizedRow, ReconciledRow, Status};

use crate::config::PipelineConfig;
use crate::extract::RawTable;
use chrono::NaiveDate;
use tracing::instrument;

/// Run the whole reconstruction over one extracted document:
/// normalize → reconcile → propagate → extract records.
///
/// Returns the inferred sitting date and the attendance records in document
/// order. Structural problems (unusably narrow rows, no attendance block,
/// unparseable date anchor) abort the document; cosmetic irregularities are
/// cleaned up along the way.
#[instrument(level = "info", skip(table, config), fields(raw_rows = table.len()))]
pub fn run(
    table: &RawTable,
    config: &PipelineConfig,
) -> ProcessResult<(NaiveDate, Vec<AttendanceRecord>)> {
    let normalized = normalize::normalize(table)?;
    let reconciled = reconcile::reconcile(&normalized);
    let propagated = propagate::propagate(&reconciled);
    records::extract_records(&normalized, &propagated, config)
}
