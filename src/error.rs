use std::path::PathBuf;

use thiserror::Error;

/// Problems with the input file or the extractor configuration, raised before any row is processed.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unsupported file format: {} (expected .xlsx, .xls, .xlsm, .ods or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("File size {size} exceeds the limit of {limit}")]
    FileTooLarge { size: String, limit: String },

    #[error("No worksheet found in file: {}", .0.display())]
    NoWorksheet(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
