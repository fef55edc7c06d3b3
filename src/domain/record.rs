/// Customer row; parsed for schema fidelity but not consumed by the join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub custkey: u64,
    pub nationkey: u64,
}

/// Order row. `orderdate` is kept as the raw ISO-8601 string so that
/// lexical comparison matches chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub orderkey: u64,
    pub custkey: u64,
    pub orderdate: String,
}

/// Line item row, many-to-one with [`Order`]
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub orderkey: u64,
    pub suppkey: u64,
    pub extendedprice: f64,
    pub discount: f64,
}

impl LineItem {
    /// Discounted revenue contributed by this line item
    pub fn revenue(&self) -> f64 {
        self.extendedprice * (1.0 - self.discount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub suppkey: u64,
    pub nationkey: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nation {
    pub nationkey: u64,
    pub regionkey: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub regionkey: u64,
    pub name: String,
}

/// All six tables, fully loaded and immutable from here on
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub lineitems: Vec<LineItem>,
    pub suppliers: Vec<Supplier>,
    pub nations: Vec<Nation>,
    pub regions: Vec<Region>,
}

impl Dataset {
    /// Total number of rows across every table
    pub fn total_rows(&self) -> usize {
        self.customers.len()
            + self.orders.len()
            + self.lineitems.len()
            + self.suppliers.len()
            + self.nations.len()
            + self.regions.len()
    }
}
