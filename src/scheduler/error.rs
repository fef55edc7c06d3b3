use thiserror::Error;

use crate::engine::EngineError;

/// Errors raised while dispatching aggregation partitions
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Partition {partition} failed: {reason}")]
    WorkerFailed { partition: usize, reason: String },

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
