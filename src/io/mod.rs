pub mod error;
pub mod loader;
pub mod parse;
pub mod sink;

// Re-export commonly used types
pub use error::IoError;
pub use loader::{LineChunk, TableLoader, split_lines};
pub use parse::{Fields, TableRecord, parse_lines};
pub use sink::{ConsoleSink, FileSink, RESULT_FILE_NAME, ResultSink, render_report};
