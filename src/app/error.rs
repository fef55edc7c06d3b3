use thiserror::Error;

use crate::io::IoError;
use crate::scheduler::SchedulerError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Load error: {0}")]
    Load(#[from] IoError),

    #[error("Output error: {0}")]
    Output(IoError),

    #[error("Scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
