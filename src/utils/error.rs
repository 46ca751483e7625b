use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("CSV file is missing a header row")]
    MissingHeader,

    #[error("CSV file is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Invalid latitude/longitude on line {line}: {reason}")]
    InvalidCoordinate { line: u64, reason: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
