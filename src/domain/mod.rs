pub mod error;
pub mod index;
pub mod interval;
pub mod partition;
pub mod record;
pub mod revenue;

// Re-export commonly used types
pub use error::DomainError;
pub use index::RegionNationIndex;
pub use interval::DateRange;
pub use partition::partition_ranges;
pub use record::{Customer, Dataset, LineItem, Nation, Order, Region, Supplier};
pub use revenue::{NationRevenue, RevenueMap};
