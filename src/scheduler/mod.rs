pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::SchedulerError;
pub use runner::{PartitionResult, PartitionScheduler, SchedulerResults};
