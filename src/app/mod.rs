pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-export commonly used types
pub use cli::{CliApp, Writers};
pub use config::{LOG_ENV, QueryConfig, USAGE};
pub use error::AppError;
pub use pipeline::{execute, load_dataset, publish};
