use super::date::parse_sitting_date;
use super::error::{ProcessError, ProcessResult};
use super::row::{AttendanceRecord, NormalizedRow, ReconciledRow, Status};
use crate::config::PipelineConfig;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Stage 4: anchor the sitting date and emit the final records.
///
/// Takes the propagated rows plus the normalized rows they came from: the
/// date lives in a cell that reconciliation has already nulled (it is not a
/// marker), so the anchor text must be read from the pre-reconcile view at
/// the same index.
#[instrument(level = "debug", skip_all, fields(rows = propagated.len()))]
pub fn extract_records(
    normalized: &[NormalizedRow],
    propagated: &[ReconciledRow],
    config: &PipelineConfig,
) -> ProcessResult<(NaiveDate, Vec<AttendanceRecord>)> {
    let date = anchor_date(normalized, propagated, config.date_anchor_offset)?;

    let records: Vec<AttendanceRecord> = propagated
        .iter()
        .filter(|row| row.status.is_some())
        .filter_map(|row| {
            let member = row.entity.as_deref()?.trim();
            if member.is_empty() {
                return None;
            }
            let title = member.split_whitespace().next()?;
            if !config.is_honorific(title) {
                debug!(member, "dropping row without recognized honorific");
                return None;
            }
            Some(AttendanceRecord {
                date,
                member: member.to_string(),
                status: row.status.expect("filtered to non-null status"),
            })
        })
        .collect();

    info!(date = %date, records = records.len(), "extracted attendance records");
    Ok((date, records))
}

/// The sitting date sits a fixed number of rows above the first PRESENT:
/// marker. The extraction drops it into either column, so both cells of the
/// anchor row are tried.
fn anchor_date(
    normalized: &[NormalizedRow],
    propagated: &[ReconciledRow],
    offset: usize,
) -> ProcessResult<NaiveDate> {
    let first_present = propagated
        .iter()
        .position(|r| r.status == Some(Status::Present))
        .ok_or(ProcessError::MissingPresentMarker)?;

    let anchor_idx =
        first_present
            .checked_sub(offset)
            .ok_or_else(|| ProcessError::DateAnchor {
                row: first_present,
                text: "<no row above first marker>".to_string(),
            })?;

    let anchor = &normalized[anchor_idx];
    anchor
        .entity
        .as_deref()
        .and_then(parse_sitting_date)
        .or_else(|| anchor.status_raw.as_deref().and_then(parse_sitting_date))
        .ok_or_else(|| ProcessError::DateAnchor {
            row: anchor_idx,
            text: anchor
                .entity
                .clone()
                .or_else(|| anchor.status_raw.clone())
                .unwrap_or_default(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(entity: Option<&str>, status_raw: Option<&str>) -> NormalizedRow {
        NormalizedRow {
            entity: entity.map(str::to_string),
            status_raw: status_raw.map(str::to_string),
        }
    }

    fn prop(entity: Option<&str>, status: Option<Status>) -> ReconciledRow {
        ReconciledRow {
            entity: entity.map(str::to_string),
            status,
        }
    }

    fn fixture() -> (Vec<NormalizedRow>, Vec<ReconciledRow>) {
        let normalized = vec![
            norm(None, Some("Tuesday, 1 September 2020")),
            norm(None, None),
            norm(None, Some("PRESENT:")),
            norm(Some("Mr John Tan"), None),
            norm(Some("Speaker"), None),
            norm(None, Some("ABSENT:")),
            norm(Some("Ms Jane Lee"), None),
        ];
        let propagated = vec![
            prop(None, None),
            prop(None, None),
            prop(None, Some(Status::Present)),
            prop(Some("Mr John Tan"), Some(Status::Present)),
            prop(Some("Speaker"), Some(Status::Present)),
            prop(None, Some(Status::Absent)),
            prop(Some("Ms Jane Lee"), Some(Status::Absent)),
        ];
        (normalized, propagated)
    }

    #[test]
    fn emits_records_for_honorific_rows_only() -> ProcessResult<()> {
        let (normalized, propagated) = fixture();
        let (date, records) = extract_records(&normalized, &propagated, &PipelineConfig::default())?;
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 9, 1).unwrap());
        assert_eq!(
            records,
            vec![
                AttendanceRecord {
                    date,
                    member: "Mr John Tan".to_string(),
                    status: Status::Present,
                },
                AttendanceRecord {
                    date,
                    member: "Ms Jane Lee".to_string(),
                    status: Status::Absent,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn no_present_marker_is_fatal() {
        let normalized = vec![norm(Some("Mr John Tan"), None)];
        let propagated = vec![prop(Some("Mr John Tan"), None)];
        match extract_records(&normalized, &propagated, &PipelineConfig::default()) {
            Err(ProcessError::MissingPresentMarker) => {}
            other => panic!("expected MissingPresentMarker, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_anchor_is_fatal() {
        let normalized = vec![
            norm(Some("not a date"), None),
            norm(None, None),
            norm(None, Some("PRESENT:")),
            norm(Some("Mr John Tan"), None),
        ];
        let propagated = vec![
            prop(Some("not a date"), None),
            prop(None, None),
            prop(None, Some(Status::Present)),
            prop(Some("Mr John Tan"), Some(Status::Present)),
        ];
        match extract_records(&normalized, &propagated, &PipelineConfig::default()) {
            Err(ProcessError::DateAnchor { row, text }) => {
                assert_eq!(row, 0);
                assert_eq!(text, "not a date");
            }
            other => panic!("expected DateAnchor, got {:?}", other),
        }
    }

    #[test]
    fn anchor_underflow_is_fatal() {
        let normalized = vec![norm(None, Some("PRESENT:")), norm(Some("Mr John Tan"), None)];
        let propagated = vec![
            prop(None, Some(Status::Present)),
            prop(Some("Mr John Tan"), Some(Status::Present)),
        ];
        match extract_records(&normalized, &propagated, &PipelineConfig::default()) {
            Err(ProcessError::DateAnchor { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected DateAnchor, got {:?}", other),
        }
    }

    #[test]
    fn anchor_date_read_from_entity_column_too() -> ProcessResult<()> {
        let normalized = vec![
            norm(Some("Tuesday, 1 September 2020"), None),
            norm(None, None),
            norm(Some("PRESENT:"), None),
            norm(Some("Dr Amy Khor"), None),
        ];
        let propagated = vec![
            prop(Some("Tuesday, 1 September 2020"), None),
            prop(None, None),
            prop(Some("PRESENT:"), Some(Status::Present)),
            prop(Some("Dr Amy Khor"), Some(Status::Present)),
        ];
        let (date, records) = extract_records(&normalized, &propagated, &PipelineConfig::default())?;
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 9, 1).unwrap());
        assert_eq!(records.len(), 1);
        Ok(())
    }

    #[test]
    fn null_status_rows_never_escape() -> ProcessResult<()> {
        let (normalized, propagated) = fixture();
        let (_, records) = extract_records(&normalized, &propagated, &PipelineConfig::default())?;
        // every record maps back to a propagated row with a concrete status
        // and a recognized honorific
        let cfg = PipelineConfig::default();
        for rec in &records {
            let title = rec.member.split_whitespace().next().unwrap();
            assert!(cfg.is_honorific(title));
        }
        Ok(())
    }
}
