use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, Writer};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, instrument, warn};

use crate::constants::{
    INVALID_OUTPUT_FILE, LABEL_COLUMNS, MAX_COPIES, SUMMARY_OUTPUT_FILE, VALID_OUTPUT_FILE,
};
use crate::error::Result;
use crate::pipeline::PipelineOutput;
use crate::sender::SenderAddress;
use crate::types::LabelRow;

pub const COPIES_COLUMN: &str = "Copies";
const DIMENSION_COLUMNS: [&str; 4] = ["Length", "Height", "Width", "Weight"];

/// Result of writing one pipeline run to disk
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input_file: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub copies: u32,
    pub valid_output: String,
    pub invalid_output: Option<String>,
    pub generated_at: DateTime<Utc>,
}

/// Write `rows` as CSV, each repeated `copies` times. Returns rows written.
pub fn write_labels<W: Write>(writer: W, rows: &[LabelRow], copies: u32) -> Result<usize> {
    let mut wtr = Writer::from_writer(writer);
    if rows.is_empty() || copies == 0 {
        // serialize() emits the header lazily; keep the schema for empty files
        wtr.write_record(LABEL_COLUMNS)?;
    }
    let mut written = 0;
    for row in rows {
        for _ in 0..copies {
            wtr.serialize(row)?;
            written += 1;
        }
    }
    wtr.flush()?;
    Ok(written)
}

/// Write the valid and rejected label files plus a JSON summary into `output_dir`.
///
/// The rejected file is only written when there are rejected rows; a stale one
/// from an earlier run is removed. Files are staged and published together so
/// a failed run leaves none of its outputs behind.
#[instrument(skip(output), fields(valid = output.labels.len(), invalid = output.invalid.len()))]
pub fn write_outputs(
    output: &PipelineOutput,
    input_file: &Path,
    output_dir: &Path,
    copies: u32,
) -> Result<RunSummary> {
    fs::create_dir_all(output_dir)?;

    let valid_path = output_dir.join(VALID_OUTPUT_FILE);
    let mut valid_csv = Vec::new();
    let valid_written = write_labels(&mut valid_csv, &output.labels, copies)?;
    let mut staged = vec![(stage(output_dir, &valid_csv)?, valid_path.clone())];

    let invalid_path = if output.invalid_labels.is_empty() {
        None
    } else {
        let path = output_dir.join(INVALID_OUTPUT_FILE);
        let mut invalid_csv = Vec::new();
        write_labels(&mut invalid_csv, &output.invalid_labels, copies)?;
        staged.push((stage(output_dir, &invalid_csv)?, path.clone()));
        Some(path)
    };

    let summary = RunSummary {
        input_file: input_file.to_string_lossy().to_string(),
        total_rows: output.total_rows,
        valid_rows: output.labels.len(),
        invalid_rows: output.invalid.len(),
        copies,
        valid_output: valid_path.to_string_lossy().to_string(),
        invalid_output: invalid_path.as_ref().map(|p| p.to_string_lossy().to_string()),
        generated_at: Utc::now(),
    };
    let summary_json = serde_json::to_string_pretty(&summary)?;
    staged.push((stage(output_dir, summary_json.as_bytes())?, output_dir.join(SUMMARY_OUTPUT_FILE)));

    publish(staged)?;

    info!("Wrote {} label rows to {}", valid_written, valid_path.display());
    match &invalid_path {
        Some(path) => {
            warn!("{} rows were skipped due to missing required fields", output.invalid.len());
            info!("Wrote rejected rows to {}", path.display());
        }
        None => {
            let stale = output_dir.join(INVALID_OUTPUT_FILE);
            if stale.is_file() {
                fs::remove_file(&stale)?;
            }
        }
    }

    Ok(summary)
}

/// Write `contents` to a temp file in `dir`. It is deleted on drop unless published.
fn stage(dir: &Path, contents: &[u8]) -> Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.flush()?;
    Ok(tmp)
}

/// Move staged files onto their targets. On failure, targets already published
/// by this call are removed and the remaining temp files are dropped.
fn publish(staged: Vec<(NamedTempFile, PathBuf)>) -> Result<()> {
    let mut published: Vec<PathBuf> = Vec::new();
    for (tmp, target) in staged {
        if let Err(e) = tmp.persist(&target) {
            for path in &published {
                let _ = fs::remove_file(path);
            }
            return Err(e.error.into());
        }
        published.push(target);
    }
    Ok(())
}

/// Parse a copy count the way a hand-edited sheet tends to hold it: blanks,
/// junk, negatives and counts above [`MAX_COPIES`] count as one, decimals
/// round down.
pub fn parse_copies(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let parsed = match trimmed.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 && f <= MAX_COPIES as f64 => Some(f.trunc() as u32),
            _ => None,
        },
    };
    parsed.filter(|&n| n <= MAX_COPIES).unwrap_or(1)
}

/// Conform a hand-edited label sheet for printing.
///
/// Columns are put back in label order (absent dimensions become `0`, other
/// absent columns blank), blank sender columns are filled from `defaults`, and
/// each row is repeated by its `Copies` value, which is then dropped.
pub fn finalize_labels<R: Read, W: Write>(
    reader: R,
    writer: W,
    defaults: &SenderAddress,
) -> Result<usize> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: HashMap<String, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_string(), i))
        .collect();

    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(LABEL_COLUMNS)?;

    let mut written = 0;
    for record in rdr.records() {
        let record = record?;
        let value = |column: &str| {
            headers
                .get(column)
                .and_then(|&i| record.get(i))
                .map(str::to_string)
        };

        let row: Vec<String> = LABEL_COLUMNS
            .iter()
            .map(|&column| {
                let current = value(column).unwrap_or_default();
                if current.trim().is_empty() {
                    if let Some(default) = defaults.field(column) {
                        return default.to_string();
                    }
                    if DIMENSION_COLUMNS.contains(&column) {
                        return "0".to_string();
                    }
                }
                current
            })
            .collect();

        let copies = value(COPIES_COLUMN).map(|c| parse_copies(&c)).unwrap_or(1);
        for _ in 0..copies {
            wtr.write_record(&row)?;
            written += 1;
        }
    }
    wtr.flush()?;
    Ok(written)
}

/// File-path wrapper around [`finalize_labels`]. The input is read in full
/// before the output is opened, so finalizing a sheet in place is safe.
pub fn finalize_file(input: &Path, output: &Path, defaults: &SenderAddress) -> Result<usize> {
    let edited = fs::read(input)?;
    let mut finalized = Vec::new();
    let written = finalize_labels(edited.as_slice(), &mut finalized, defaults)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, finalized)?;
    info!("Finalized {} label rows into {}", written, output.display());
    Ok(written)
}

/// Default output path for a finalized sheet: `<stem>_final.csv` beside the input.
pub fn finalized_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "labels".to_string());
    input.with_file_name(format!("{stem}_final.csv"))
}
