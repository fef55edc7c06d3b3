pub mod aggregator;
pub mod error;

// Re-export commonly used types
pub use aggregator::{JoinIndex, RevenueAggregator};
pub use error::EngineError;
