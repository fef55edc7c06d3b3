//! Prelude module for convenient imports
//!
//! Import everything you need with: `use revenue::prelude::*;`

// Domain types
pub use crate::domain::{
    Customer, Dataset, DateRange, DomainError, LineItem, Nation, NationRevenue, Order, Region,
    RegionNationIndex, RevenueMap, Supplier, partition_ranges,
};

// IO types
pub use crate::io::{
    ConsoleSink, FileSink, IoError, RESULT_FILE_NAME, ResultSink, TableLoader, TableRecord,
    render_report,
};

// Engine types
pub use crate::engine::{EngineError, JoinIndex, RevenueAggregator};

// Scheduler types
pub use crate::scheduler::{PartitionResult, PartitionScheduler, SchedulerError, SchedulerResults};

// App types
pub use crate::app::{AppError, CliApp, LOG_ENV, QueryConfig, Writers, execute, publish};
