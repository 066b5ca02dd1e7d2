use chrono::NaiveDate;
use serde::Serialize;

/// Canonical attendance status, recovered from the block markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }

    /// Recognize a block marker. Equality is exact on the trimmed text:
    /// colon required, case-sensitive, so free text in a name cell can never
    /// masquerade as a marker.
    pub fn from_marker(s: &str) -> Option<Self> {
        match s.trim() {
            "PRESENT:" => Some(Status::Present),
            "ABSENT:" => Some(Status::Absent),
            _ => None,
        }
    }
}

/// A raw row collapsed to the two columns that carry meaning: the member
/// name candidate and the status candidate. Cells are trimmed; blank cells
/// are absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub entity: Option<String>,
    pub status_raw: Option<String>,
}

/// Same row after marker reconciliation: any cell text that was not a
/// genuine marker is gone, leaving one canonical status or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledRow {
    pub entity: Option<String>,
    pub status: Option<Status>,
}

/// Final output: one member's attendance on one sitting date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub member: String,
    pub status: Status,
}
