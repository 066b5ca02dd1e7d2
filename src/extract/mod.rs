pub mod csv_table;
pub mod tabula;

pub use csv_table::CsvTableExtractor;
pub use tabula::TabulaExtractor;

use anyhow::Result;
use std::path::PathBuf;

/// The raw table handed over by the upstream PDF-to-table extraction.
///
/// No shape invariant holds: column counts vary per document and per row
/// (merged cells and stream-mode extraction both shed or grow columns), and
/// any cell may be absent. Row 0 is the header row the extraction emits.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Every extracted row in document order, header row included.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What the extraction collaborator is invoked with: the PDF, a page-range
/// specifier, and an optional crop rectangle `[top, left, height, width]`
/// in points.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub path: PathBuf,
    pub pages: String,
    pub area: Option<[f64; 4]>,
}

impl ExtractRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ExtractRequest {
            path: path.into(),
            pages: "all".to_string(),
            area: None,
        }
    }
}

/// Boundary to the table-extraction collaborator. Its layout inference is
/// opaque to this crate; all we require back is a `RawTable`.
pub trait TableExtractor {
    fn extract(&self, req: &ExtractRequest) -> Result<RawTable>;
}
