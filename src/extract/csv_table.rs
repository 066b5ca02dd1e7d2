use super::{ExtractRequest, RawTable, TableExtractor};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// Reads a CSV dump of the extraction output (what the tabula CLI writes)
/// into a `RawTable`. Field counts differ row to row, so the reader runs in
/// flexible mode; empty fields become absent cells.
#[derive(Debug, Default)]
pub struct CsvTableExtractor;

impl TableExtractor for CsvTableExtractor {
    fn extract(&self, req: &ExtractRequest) -> Result<RawTable> {
        let file = File::open(&req.path)
            .with_context(|| format!("failed to open table dump {:?}", req.path))?;
        read_raw_table(file).with_context(|| format!("CSV parse error in {:?}", req.path))
    }
}

/// Parse any CSV byte stream into a `RawTable`, tolerating ragged rows.
pub fn read_raw_table<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        let row: Vec<Option<String>> = record
            .iter()
            .map(|field| {
                let trimmed = field.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "read raw table");
    Ok(RawTable { rows })
}
