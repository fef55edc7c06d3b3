#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use revenue::prelude::*;

/// The literal two-nation scenario: one order, two line items, two suppliers
pub fn scenario_dataset() -> Dataset {
    Dataset {
        customers: vec![Customer {
            custkey: 1,
            nationkey: 1,
        }],
        orders: vec![Order {
            orderkey: 10,
            custkey: 1,
            orderdate: "1996-01-05".to_string(),
        }],
        lineitems: vec![
            LineItem {
                orderkey: 10,
                suppkey: 1,
                extendedprice: 100.0,
                discount: 0.1,
            },
            LineItem {
                orderkey: 10,
                suppkey: 2,
                extendedprice: 200.0,
                discount: 0.0,
            },
        ],
        suppliers: vec![
            Supplier {
                suppkey: 1,
                nationkey: 1,
            },
            Supplier {
                suppkey: 2,
                nationkey: 2,
            },
        ],
        nations: vec![
            Nation {
                nationkey: 1,
                regionkey: 0,
                name: "N1".to_string(),
            },
            Nation {
                nationkey: 2,
                regionkey: 0,
                name: "N2".to_string(),
            },
        ],
        regions: vec![Region {
            regionkey: 0,
            name: "ASIA".to_string(),
        }],
    }
}

/// Deterministic synthetic dataset: 5 regions x 5 nations, `num_orders` orders
/// spread over 1994-1998, 1 to 7 line items per order
pub fn generated_dataset(num_orders: u64) -> Dataset {
    const REGIONS: [&str; 5] = ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"];

    let regions = REGIONS
        .iter()
        .enumerate()
        .map(|(k, name)| Region {
            regionkey: k as u64,
            name: name.to_string(),
        })
        .collect();
    let nations = (0..25)
        .map(|k| Nation {
            nationkey: k,
            regionkey: k % 5,
            name: format!("NATION{:02}", k),
        })
        .collect();
    let suppliers: Vec<Supplier> = (1..=100)
        .map(|k| Supplier {
            suppkey: k,
            nationkey: (k * 7) % 25,
        })
        .collect();
    let customers = (1..=50)
        .map(|k| Customer {
            custkey: k,
            nationkey: (k * 3) % 25,
        })
        .collect();

    let mut orders = Vec::new();
    let mut lineitems = Vec::new();
    for k in 1..=num_orders {
        let year = 1994 + (k % 5);
        let month = 1 + (k * 7) % 12;
        let day = 1 + (k * 13) % 28;
        orders.push(Order {
            orderkey: k,
            custkey: 1 + k % 50,
            orderdate: format!("{year}-{month:02}-{day:02}"),
        });

        for line in 0..(1 + k % 7) {
            lineitems.push(LineItem {
                orderkey: k,
                suppkey: 1 + (k * 31 + line * 17) % 100,
                extendedprice: 900.0 + ((k * 97 + line * 53) % 100_000) as f64 / 100.0,
                discount: ((k + line) % 11) as f64 / 100.0,
            });
        }
    }

    Dataset {
        customers,
        orders,
        lineitems,
        suppliers,
        nations,
        regions,
    }
}

/// Write every table as `<dir>/<table>.tbl` in the standard column layout
pub fn write_tables(dir: &Path, dataset: &Dataset) {
    let customers: String = dataset
        .customers
        .iter()
        .map(|c| format!("{}|Customer#{:09}|addr|{}|phone|0.00|BUILDING|c|\n", c.custkey, c.custkey, c.nationkey))
        .collect();
    let orders: String = dataset
        .orders
        .iter()
        .map(|o| format!("{}|{}|O|0.00|{}|5-LOW|Clerk#000000001|0|c|\n", o.orderkey, o.custkey, o.orderdate))
        .collect();
    let lineitems: String = dataset
        .lineitems
        .iter()
        .map(|l| {
            format!(
                "{}|1|{}|1|1|{}|{}|0.00|N|O|1996-01-01|1996-01-01|1996-01-01|NONE|AIR|c|\n",
                l.orderkey, l.suppkey, l.extendedprice, l.discount
            )
        })
        .collect();
    let suppliers: String = dataset
        .suppliers
        .iter()
        .map(|s| format!("{}|Supplier#{:09}|addr|{}|phone|0.00|c|\n", s.suppkey, s.suppkey, s.nationkey))
        .collect();
    let nations: String = dataset
        .nations
        .iter()
        .map(|n| format!("{}|{}|{}|c|\n", n.nationkey, n.name, n.regionkey))
        .collect();
    let regions: String = dataset
        .regions
        .iter()
        .map(|r| format!("{}|{}|c|\n", r.regionkey, r.name))
        .collect();

    for (table, text) in [
        ("customer", customers),
        ("orders", orders),
        ("lineitem", lineitems),
        ("supplier", suppliers),
        ("nation", nations),
        ("region", regions),
    ] {
        fs::write(dir.join(format!("{table}.tbl")), text).expect("Failed to write table");
    }
}

/// Build a config the way the binary does, from an argument vector
pub fn config(data: &Path, region: &str, start: &str, end: &str, threads: usize) -> QueryConfig {
    let args: Vec<String> = vec![
        "revenue".to_string(),
        data.display().to_string(),
        region.to_string(),
        start.to_string(),
        end.to_string(),
        threads.to_string(),
    ];
    QueryConfig::from_args(&args).expect("Invalid test config")
}

/// Single-threaded nested-loop join, scanning every table per order
pub fn nested_loop_revenue(
    dataset: &Dataset,
    region_name: &str,
    start: &str,
    end: &str,
) -> HashMap<String, f64> {
    let mut results = HashMap::new();

    for region in dataset.regions.iter().filter(|r| r.name == region_name) {
        for nation in dataset.nations.iter().filter(|n| n.regionkey == region.regionkey) {
            for order in &dataset.orders {
                if order.orderdate.as_str() < start || order.orderdate.as_str() >= end {
                    continue;
                }
                for item in dataset.lineitems.iter().filter(|l| l.orderkey == order.orderkey) {
                    for supplier in &dataset.suppliers {
                        if supplier.suppkey == item.suppkey && supplier.nationkey == nation.nationkey {
                            *results.entry(nation.name.clone()).or_insert(0.0) +=
                                item.extendedprice * (1.0 - item.discount);
                        }
                    }
                }
            }
        }
    }

    results
}

/// Assert rows match the reference within relative tolerance
pub fn assert_matches_reference(rows: &[NationRevenue], reference: &HashMap<String, f64>) {
    assert_eq!(rows.len(), reference.len(), "nation count differs");
    for row in rows {
        let expected = reference
            .get(&row.nation)
            .unwrap_or_else(|| panic!("unexpected nation {}", row.nation));
        let relative = ((row.revenue - expected) / expected).abs();
        assert!(relative < 1e-9, "{}: {} vs {}", row.nation, row.revenue, expected);
    }
}
