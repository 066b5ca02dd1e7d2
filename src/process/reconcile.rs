use super::row::{NormalizedRow, ReconciledRow, Status};
use tracing::{debug, instrument};

/// Stage 2: merge the row's possible marker carriers into one canonical
/// status.
///
/// Stream-mode extraction misaligns columns page to page, so a block marker
/// can land in either the entity cell or the status cell. Both are tested
/// for exact marker equality and at most one can match (a cell is either a
/// marker or it is not); anything that is not a marker reconciles to no
/// status. A member's name can never false-positive because the match is
/// whole-cell equality, not substring.
#[instrument(level = "debug", skip(rows), fields(rows = rows.len()))]
pub fn reconcile(rows: &[NormalizedRow]) -> Vec<ReconciledRow> {
    let out: Vec<ReconciledRow> = rows
        .iter()
        .map(|row| {
            let from_entity = row.entity.as_deref().and_then(Status::from_marker);
            let from_status = row.status_raw.as_deref().and_then(Status::from_marker);
            ReconciledRow {
                entity: row.entity.clone(),
                status: from_status.or(from_entity),
            }
        })
        .collect();

    let markers = out.iter().filter(|r| r.status.is_some()).count();
    debug!(markers, "reconciled status markers");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entity: Option<&str>, status_raw: Option<&str>) -> NormalizedRow {
        NormalizedRow {
            entity: entity.map(str::to_string),
            status_raw: status_raw.map(str::to_string),
        }
    }

    #[test]
    fn marker_in_status_column() {
        let out = reconcile(&[row(None, Some("PRESENT:"))]);
        assert_eq!(out[0].status, Some(Status::Present));
    }

    #[test]
    fn marker_in_entity_column() {
        let out = reconcile(&[row(Some("ABSENT:"), None)]);
        assert_eq!(out[0].status, Some(Status::Absent));
        assert_eq!(out[0].entity.as_deref(), Some("ABSENT:"));
    }

    #[test]
    fn name_never_reconciles_to_a_status() {
        let out = reconcile(&[row(Some("Mr John Tan"), None)]);
        assert_eq!(out[0].status, None);
    }

    #[test]
    fn lowercase_marker_is_not_recognized() {
        let out = reconcile(&[row(None, Some("present:"))]);
        assert_eq!(out[0].status, None);
    }

    #[test]
    fn status_column_wins_when_entity_is_free_text() {
        // the status must come only from the status field here
        let out = reconcile(&[row(Some("Ms Jane Lee"), Some("PRESENT:"))]);
        assert_eq!(out[0].status, Some(Status::Present));
        assert_eq!(out[0].entity.as_deref(), Some("Ms Jane Lee"));
    }

    #[test]
    fn reconcile_is_idempotent_over_its_own_output() {
        let rows = vec![row(Some("PRESENT:"), None), row(Some("Mr John Tan"), None)];
        let once = reconcile(&rows);
        let re_input: Vec<NormalizedRow> = once
            .iter()
            .map(|r| NormalizedRow {
                entity: r.entity.clone(),
                status_raw: r.status.map(|s| match s {
                    Status::Present => "PRESENT:".to_string(),
                    Status::Absent => "ABSENT:".to_string(),
                }),
            })
            .collect();
        assert_eq!(reconcile(&re_input), once);
    }
}
