use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LabelError, Result};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Input formats recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    CommaSeparated,
    TabSeparated,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(InputFormat::Spreadsheet),
            "csv" => Ok(InputFormat::CommaSeparated),
            "txt" | "tsv" => Ok(InputFormat::TabSeparated),
            "" => Err(LabelError::UnsupportedFormat("(none)".to_string())),
            other => Err(LabelError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

/// Uploaded rows keyed by normalized header names. Every cell is a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl RawTable {
    /// Build a table, normalizing headers. The first occurrence of a repeated
    /// header wins lookups.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            index.entry(header.clone()).or_insert(i);
        }
        Self { headers, rows, index }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Cell value for `row` under the normalized column `name`. Short rows read
    /// as empty.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let col = *self.index.get(name)?;
        let row = self.rows.get(row)?;
        Some(row.get(col).map(String::as_str).unwrap_or(""))
    }
}

/// Collapse internal whitespace, trim, lowercase.
pub fn normalize_header(header: &str) -> String {
    WHITESPACE_RUN.replace_all(header, " ").trim().to_lowercase()
}

/// Load an input file into a [`RawTable`], choosing the reader by extension.
pub fn load_input_file(path: &Path) -> Result<RawTable> {
    let format = InputFormat::from_path(path)?;
    let table = match format {
        InputFormat::Spreadsheet => read_spreadsheet(path)?,
        InputFormat::CommaSeparated => read_delimited(File::open(path)?, b',')?,
        InputFormat::TabSeparated => read_delimited(File::open(path)?, b'\t')?,
    };

    if table.is_empty() {
        return Err(LabelError::EmptyInput(path.to_path_buf()));
    }
    Ok(table)
}

/// Read delimited text with a header row. Empty lines are skipped by the csv
/// reader; rows of empty cells (`,,,`) are kept so row numbers stay aligned.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}

fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(LabelError::EmptyInput(path.to_path_buf())),
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(RawTable::default()),
    };

    let mut body: Vec<Vec<String>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    // Blank rows inside the sheet stay; trailing ones are formatting leftovers
    while body.last().is_some_and(|row| is_blank_row(row)) {
        body.pop();
    }

    Ok(RawTable::new(headers, body))
}

/// Render a workbook cell as text. Whole-number floats lose their fraction so
/// zip codes read `78701`, not `78701.0`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
