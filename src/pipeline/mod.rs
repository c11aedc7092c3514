//! Address pipeline: load → extract → clean → validate → merge.
//!
//! Each stage is a plain function over owned data; [`run_parser`] chains them.
//! Stages never log. Errors abort the whole run and nothing partial is returned.

pub mod extract;
pub mod loader;
pub mod merge;
pub mod normalize;
pub mod validate;

use std::path::Path;

use crate::error::Result;
use crate::sender::SenderAddress;
use crate::types::{AddressRow, LabelRow};

pub use extract::extract_to_fields;
pub use loader::{load_input_file, normalize_header, InputFormat, RawTable};
pub use merge::{label_for, merge_from_data};
pub use normalize::{clean_row, clean_rows, lookup_state_abbr};
pub use validate::{missing_field_report, missing_fields, validate_rows, MissingFieldReport, ValidationResult};

/// Everything one pipeline pass produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub total_rows: usize,
    /// Labels for rows with every required field present
    pub labels: Vec<LabelRow>,
    /// Rejected recipient rows, in upload order
    pub invalid: Vec<AddressRow>,
    /// Rejected rows in label shape, sender columns filled from the stored sender
    pub invalid_labels: Vec<LabelRow>,
    pub report: Vec<MissingFieldReport>,
}

/// Run every stage after loading.
pub fn process_table(table: &RawTable, sender: &SenderAddress) -> Result<PipelineOutput> {
    let parsed = extract_to_fields(table)?;
    let cleaned = clean_rows(parsed);
    let ValidationResult { valid, invalid } = validate_rows(cleaned);

    Ok(PipelineOutput {
        total_rows: table.len(),
        labels: merge_from_data(&valid, sender),
        invalid_labels: merge_from_data(&invalid, sender),
        report: missing_field_report(&invalid),
        invalid,
    })
}

/// Load `input_path` and run the full pipeline against `sender`.
pub fn run_parser(input_path: &Path, sender: &SenderAddress) -> Result<PipelineOutput> {
    let table = load_input_file(input_path)?;
    process_table(&table, sender)
}
