use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("CSV file must contain headers and at least one row of data")]
    MalformedInput,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RowArity {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Not a CSV file: {0}")]
    NotCsvFile(String),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
