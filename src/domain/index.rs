use std::collections::HashMap;

use tracing::debug;

use super::record::{Nation, Region};

/// Nation-key to nation-name lookup, restricted to the nations of one region
///
/// Built once before aggregation and shared read-only by every worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionNationIndex {
    nations: HashMap<u64, String>,
}

impl RegionNationIndex {
    /// Collect the nations whose region name equals `region_name` exactly.
    ///
    /// A region name that matches nothing yields an empty index. If several
    /// regions share the name, nations from all of them are included.
    pub fn build(nations: &[Nation], regions: &[Region], region_name: &str) -> Self {
        let mut index = HashMap::new();

        for region in regions.iter().filter(|r| r.name == region_name) {
            for nation in nations.iter().filter(|n| n.regionkey == region.regionkey) {
                index.insert(nation.nationkey, nation.name.clone());
            }
        }

        debug!(region = region_name, nations = index.len(), "Built region nation index");

        Self { nations: index }
    }

    /// Name of the nation if it belongs to the indexed region
    pub fn get(&self, nationkey: u64) -> Option<&str> {
        self.nations.get(&nationkey).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nations.is_empty()
    }
}
