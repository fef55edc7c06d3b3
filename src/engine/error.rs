use thiserror::Error;

use crate::domain::DomainError;

/// Engine-level errors for join and aggregation
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Order range {start}..{end} is outside the order table (len {len})")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
