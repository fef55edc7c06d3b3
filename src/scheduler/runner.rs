use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, info};

use super::error::SchedulerError;
use crate::domain::{RevenueMap, partition_ranges};
use crate::engine::RevenueAggregator;

/// Runs one aggregation task per contiguous slice of the order table
///
/// Partition sizes are fixed at dispatch time; there is no work stealing or
/// rebalancing. Every task owns its accumulator, so no locks are taken while
/// aggregating.
#[derive(Debug, Clone)]
pub struct PartitionScheduler {
    num_partitions: usize,
}

impl PartitionScheduler {
    /// Create a scheduler with `num_partitions` workers (at least one)
    pub fn new(num_partitions: usize) -> Self {
        Self {
            num_partitions: num_partitions.max(1),
        }
    }

    pub fn num_partitions(&self) -> usize {
        self.num_partitions
    }

    /// Aggregate every partition and wait for all of them.
    ///
    /// Results are returned in partition order, independent of which task
    /// finished first. Any failed partition fails the whole run.
    pub async fn run(
        &self,
        aggregator: Arc<RevenueAggregator>,
    ) -> Result<SchedulerResults, SchedulerError> {
        let started = Instant::now();
        let ranges = partition_ranges(aggregator.order_count(), self.num_partitions);

        let handles: Vec<_> = ranges
            .into_iter()
            .enumerate()
            .map(|(partition_id, orders)| {
                let aggregator = Arc::clone(&aggregator);
                tokio::task::spawn_blocking(move || {
                    let revenue = aggregator.aggregate_range(orders.clone())?;
                    Ok::<_, SchedulerError>(PartitionResult {
                        partition_id,
                        orders,
                        revenue,
                    })
                })
            })
            .collect();

        // Barrier: all partitions finish before anything is merged
        let mut partition_results = Vec::with_capacity(handles.len());
        for (partition, joined) in join_all(handles).await.into_iter().enumerate() {
            let result = joined.map_err(|e| SchedulerError::WorkerFailed {
                partition,
                reason: e.to_string(),
            })??;
            debug!(
                partition,
                orders = result.orders.len(),
                nations = result.revenue.len(),
                "Partition complete"
            );
            partition_results.push(result);
        }

        info!(
            partitions = partition_results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Aggregation complete"
        );

        Ok(SchedulerResults { partition_results })
    }
}

/// Result from aggregating a single partition
#[derive(Debug, Clone)]
pub struct PartitionResult {
    pub partition_id: usize,
    pub orders: Range<usize>,
    pub revenue: RevenueMap,
}

/// Per-partition results, in partition order
#[derive(Debug, Clone)]
pub struct SchedulerResults {
    pub partition_results: Vec<PartitionResult>,
}

impl SchedulerResults {
    pub fn total_partitions(&self) -> usize {
        self.partition_results.len()
    }

    /// Number of orders scanned across all partitions
    pub fn orders_scanned(&self) -> usize {
        self.partition_results.iter().map(|r| r.orders.len()).sum()
    }

    /// Sum all partial results key-wise, in ascending partition order
    pub fn merge(&self) -> RevenueMap {
        RevenueMap::merge_all(self.partition_results.iter().map(|r| &r.revenue))
    }
}
