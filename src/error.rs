use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Uploaded file is empty or unreadable: {0}")]
    EmptyInput(PathBuf),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Sender address is not configured (expected {0})")]
    SenderNotConfigured(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_message_names_every_column() {
        let err = LabelError::MissingColumns(vec!["city".to_string(), "zip".to_string()]);
        assert_eq!(err.to_string(), "Missing required columns: city, zip");
    }

    #[test]
    fn unsupported_format_message_names_extension() {
        let err = LabelError::UnsupportedFormat(".pdf".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: .pdf");
    }
}
