use thiserror::Error;

/// Structural failures that abort processing of the whole document. Cosmetic
/// irregularities (extra columns, stray whitespace, honorific-less rows) are
/// recovered in place and never reach this enum.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// A data row came back from the extraction with fewer than two columns;
    /// there is no name/status pair to work with.
    #[error("row {row} has {cols} column(s); at least 2 required")]
    ExtractionShape { row: usize, cols: usize },

    /// No PRESENT: marker anywhere, so the document holds no attendance
    /// block and the sitting date cannot be anchored.
    #[error("no PRESENT: marker found in document")]
    MissingPresentMarker,

    /// The row at the fixed offset above the first PRESENT: marker does not
    /// carry a parseable sitting date. Covers anchor underflow too.
    #[error("anchor row {row}: {text:?} is not a parseable sitting date")]
    DateAnchor { row: usize, text: String },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
