use serde::Serialize;

use crate::constants::REQUIRED_RECIPIENT_FIELDS;
use crate::types::AddressRow;

/// Rows split by whether they can become labels. Nothing is dropped and each
/// side keeps upload order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub valid: Vec<AddressRow>,
    pub invalid: Vec<AddressRow>,
}

impl ValidationResult {
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// Required recipient fields that are blank on `row`, in reporting order.
pub fn missing_fields(row: &AddressRow) -> Vec<&'static str> {
    REQUIRED_RECIPIENT_FIELDS
        .iter()
        .copied()
        .filter(|field| row.field(field).map_or(true, |v| v.trim().is_empty()))
        .collect()
}

pub fn is_valid(row: &AddressRow) -> bool {
    missing_fields(row).is_empty()
}

pub fn validate_rows(rows: Vec<AddressRow>) -> ValidationResult {
    let (valid, invalid): (Vec<_>, Vec<_>) = rows.into_iter().partition(is_valid);
    ValidationResult { valid, invalid }
}

/// Which required fields a rejected row is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingFieldReport {
    /// One-based row number as a spreadsheet user would count it
    pub row_number: usize,
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for MissingFieldReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: Missing → {}", self.row_number, self.missing.join(", "))
    }
}

pub fn missing_field_report(invalid: &[AddressRow]) -> Vec<MissingFieldReport> {
    invalid
        .iter()
        .filter_map(|row| {
            let missing = missing_fields(row);
            (!missing.is_empty()).then(|| MissingFieldReport {
                row_number: row.index + 1,
                missing,
            })
        })
        .collect()
}
