use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use super::error::EngineError;
use crate::domain::{
    DateRange, Dataset, LineItem, Order, RegionNationIndex, RevenueMap, Supplier,
};

/// Hash indexes used to probe line items and suppliers without rescanning
#[derive(Debug, Clone, Default)]
pub struct JoinIndex {
    lineitems_by_order: HashMap<u64, Vec<usize>>,
    supplier_nations: HashMap<u64, Vec<u64>>,
}

impl JoinIndex {
    /// Index line item positions by order key and supplier nations by supplier key.
    ///
    /// Supplier keys are not assumed unique: every supplier row is kept, so a
    /// line item joins once per matching supplier row.
    pub fn build(lineitems: &[LineItem], suppliers: &[Supplier]) -> Self {
        let mut lineitems_by_order: HashMap<u64, Vec<usize>> = HashMap::new();
        for (pos, item) in lineitems.iter().enumerate() {
            lineitems_by_order.entry(item.orderkey).or_default().push(pos);
        }

        let mut supplier_nations: HashMap<u64, Vec<u64>> =
            HashMap::with_capacity(suppliers.len());
        for supplier in suppliers {
            supplier_nations
                .entry(supplier.suppkey)
                .or_default()
                .push(supplier.nationkey);
        }

        Self {
            lineitems_by_order,
            supplier_nations,
        }
    }

    /// Positions of the line items belonging to `orderkey`
    pub fn lineitems_for(&self, orderkey: u64) -> &[usize] {
        self.lineitems_by_order
            .get(&orderkey)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nation keys of every supplier row with `suppkey`, in table order
    pub fn supplier_nations(&self, suppkey: u64) -> &[u64] {
        self.supplier_nations
            .get(&suppkey)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Computes nation revenue for slices of the order table
///
/// Holds the loaded tables and the read-only indexes built from them. One
/// aggregator is shared (behind `Arc`) by every partition worker; each call to
/// [`RevenueAggregator::aggregate`] owns its own [`RevenueMap`].
#[derive(Debug)]
pub struct RevenueAggregator {
    dataset: Arc<Dataset>,
    nations: RegionNationIndex,
    join_index: JoinIndex,
    date_range: DateRange,
}

impl RevenueAggregator {
    /// Build the region nation index and join indexes for one query
    pub fn new(dataset: Arc<Dataset>, region_name: &str, date_range: DateRange) -> Self {
        let nations = RegionNationIndex::build(&dataset.nations, &dataset.regions, region_name);

        // Nothing can match outside the region, so skip the join indexes
        let join_index = if nations.is_empty() {
            JoinIndex::default()
        } else {
            JoinIndex::build(&dataset.lineitems, &dataset.suppliers)
        };

        Self {
            dataset,
            nations,
            join_index,
            date_range,
        }
    }

    /// Convenience constructor validating the raw date bounds
    pub fn for_dates(
        dataset: Arc<Dataset>,
        region_name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self, EngineError> {
        Ok(Self::new(dataset, region_name, DateRange::new(start_date, end_date)?))
    }

    pub fn order_count(&self) -> usize {
        self.dataset.orders.len()
    }

    pub fn region_nations(&self) -> &RegionNationIndex {
        &self.nations
    }

    /// Aggregate the orders at positions `range` of the order table
    pub fn aggregate_range(&self, range: Range<usize>) -> Result<RevenueMap, EngineError> {
        let orders = self
            .dataset
            .orders
            .get(range.clone())
            .ok_or(EngineError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.dataset.orders.len(),
            })?;

        Ok(self.aggregate(orders))
    }

    /// Revenue per nation for `orders`, restricted to the date range and region
    pub fn aggregate(&self, orders: &[Order]) -> RevenueMap {
        let mut revenue = RevenueMap::new();
        if self.nations.is_empty() {
            return revenue;
        }

        let mut matched_orders = 0usize;
        let mut unknown_suppliers = 0usize;

        for order in orders {
            if !self.date_range.contains(&order.orderdate) {
                continue;
            }
            matched_orders += 1;

            for &pos in self.join_index.lineitems_for(order.orderkey) {
                let item = &self.dataset.lineitems[pos];

                let nationkeys = self.join_index.supplier_nations(item.suppkey);
                if nationkeys.is_empty() {
                    unknown_suppliers += 1;
                    continue;
                }

                for &nationkey in nationkeys {
                    if let Some(nation) = self.nations.get(nationkey) {
                        revenue.add(nation, item.revenue());
                    }
                }
            }
        }

        debug!(
            orders = orders.len(),
            matched_orders,
            unknown_suppliers,
            nations = revenue.len(),
            "Aggregated order slice"
        );

        revenue
    }
}
