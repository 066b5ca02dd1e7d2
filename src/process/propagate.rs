use super::row::{ReconciledRow, Status};
use tracing::{debug, instrument};

/// Stage 3: forward-fill the block markers.
///
/// The printed roster states PRESENT:/ABSENT: once per block; every member
/// row beneath belongs to that block until the next marker. A single pass
/// carries the last-seen status into rows that have none. Rows strictly
/// before the first marker keep their null status and are filtered later.
#[instrument(level = "debug", skip(rows), fields(rows = rows.len()))]
pub fn propagate(rows: &[ReconciledRow]) -> Vec<ReconciledRow> {
    let mut last_seen: Option<Status> = None;
    let out: Vec<ReconciledRow> = rows
        .iter()
        .map(|row| {
            if row.status.is_some() {
                last_seen = row.status;
            }
            ReconciledRow {
                entity: row.entity.clone(),
                status: row.status.or(last_seen),
            }
        })
        .collect();

    debug!(
        filled = out.iter().filter(|r| r.status.is_some()).count(),
        "propagated statuses"
    );
    out
}
