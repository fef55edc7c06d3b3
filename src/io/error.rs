use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// IO-level errors for table loading and result output
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Cannot open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error in {table} line {line}, column {column} ({reason}): {content}")]
    Parse {
        table: &'static str,
        line: u64,
        column: usize,
        content: String,
        reason: String,
    },

    #[error("Parse error in {table} ({}): not valid UTF-8", .path.display())]
    InvalidEncoding { table: &'static str, path: PathBuf },

    #[error("Missing column {column} in {table} line {line}")]
    MissingField {
        table: &'static str,
        line: u64,
        column: usize,
    },

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Loader worker failed: {0}")]
    WorkerFailed(String),
}
