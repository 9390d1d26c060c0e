use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("No record at index {0}")]
    RecordNotFound(usize),

    #[error("Nothing to export: the record store is empty")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, FieldOpsError>;
