use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vnpscraper::{
    config::PipelineConfig,
    extract::{CsvTableExtractor, ExtractRequest, TableExtractor, TabulaExtractor},
    process,
};

/// Crop rectangle `[top, left, height, width]` of the attendance block on a
/// Votes and Proceedings page, in points.
const ATTENDANCE_AREA: [f64; 4] = [78.57, 84.34, 639.35, 358.49];

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) args ─────────────────────────────────────────────────────
    let mut args = env::args().skip(1);
    let input: PathBuf = match args.next() {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: vnpscraper <sitting.pdf | table-dump.csv> [config.yaml]"),
    };
    let config = match args.next() {
        Some(p) => PipelineConfig::from_file(p)?,
        None => PipelineConfig::default(),
    };

    // ─── 3) pull the raw table from the extraction collaborator ──────
    let mut req = ExtractRequest::new(&input);
    req.area = Some(ATTENDANCE_AREA);
    let is_pdf = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
    let table = if is_pdf {
        TabulaExtractor::default().extract(&req)?
    } else {
        CsvTableExtractor.extract(&req)?
    };
    info!(rows = table.len(), path = %input.display(), "raw table loaded");

    // ─── 4) reconstruct the attendance records ───────────────────────
    let (date, records) = process::run(&table, &config)?;
    info!(%date, records = records.len(), "reconstruction complete");

    // ─── 5) emit CSV on stdout ───────────────────────────────────────
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for rec in &records {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;

    Ok(())
}
