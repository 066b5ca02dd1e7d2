use super::csv_table::read_raw_table;
use super::{ExtractRequest, RawTable, TableExtractor};
use anyhow::{bail, Context, Result};
use std::io::Cursor;
use std::process::Command;
use tracing::{debug, info};

/// Invokes the tabula CLI in stream mode and parses the CSV it prints.
///
/// Tabula's layout inference stays entirely on its side of the fence; if it
/// exits non-zero the document is not processed.
#[derive(Debug)]
pub struct TabulaExtractor {
    /// Program name or path, usually just "tabula".
    pub program: String,
}

impl Default for TabulaExtractor {
    fn default() -> Self {
        TabulaExtractor {
            program: "tabula".to_string(),
        }
    }
}

impl TableExtractor for TabulaExtractor {
    fn extract(&self, req: &ExtractRequest) -> Result<RawTable> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--stream")
            .arg("--format")
            .arg("CSV")
            .arg("--pages")
            .arg(&req.pages);
        if let Some([top, left, height, width]) = req.area {
            cmd.arg("--area").arg(format!(
                "{},{},{},{}",
                top,
                left,
                top + height,
                left + width
            ));
        }
        cmd.arg(&req.path);

        debug!(?cmd, "invoking tabula");
        let output = cmd
            .output()
            .with_context(|| format!("failed to run {}", self.program))?;
        if !output.status.success() {
            bail!(
                "{} exited with {} for {:?}: {}",
                self.program,
                output.status,
                req.path,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        let table = read_raw_table(Cursor::new(output.stdout))
            .with_context(|| format!("bad CSV from {} for {:?}", self.program, req.path))?;
        info!(rows = table.len(), path = ?req.path, "extracted table");
        Ok(table)
    }
}
