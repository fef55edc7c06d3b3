use std::collections::BTreeMap;

/// One output row: a nation and its accumulated revenue
#[derive(Debug, Clone, PartialEq)]
pub struct NationRevenue {
    pub nation: String,
    pub revenue: f64,
}

/// Nation-name to revenue accumulator
///
/// Used both as the per-worker partial result and as the merged result.
/// Keys are kept ordered, so iteration is always ascending by nation name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueMap {
    totals: BTreeMap<String, f64>,
}

impl RevenueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `nation`
    pub fn add(&mut self, nation: &str, amount: f64) {
        match self.totals.get_mut(nation) {
            Some(total) => *total += amount,
            None => {
                self.totals.insert(nation.to_string(), amount);
            }
        }
    }

    /// Fold every entry of `other` into this map
    pub fn merge_from(&mut self, other: &RevenueMap) {
        for (nation, amount) in &other.totals {
            self.add(nation, *amount);
        }
    }

    /// Merge partial results in the order given.
    ///
    /// Callers pass partials in partition-index order so that floating-point
    /// summation order is reproducible for a fixed partitioning.
    pub fn merge_all<'a, I>(partials: I) -> Self
    where
        I: IntoIterator<Item = &'a RevenueMap>,
    {
        let mut merged = Self::new();
        for partial in partials {
            merged.merge_from(partial);
        }
        merged
    }

    pub fn get(&self, nation: &str) -> Option<f64> {
        self.totals.get(nation).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Consume the map into rows sorted ascending by nation name
    pub fn into_sorted(self) -> Vec<NationRevenue> {
        self.totals
            .into_iter()
            .map(|(nation, revenue)| NationRevenue { nation, revenue })
            .collect()
    }
}
