use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use revenue::prelude::*;
use tokio::runtime::Runtime;

/// Generate `lineitem.tbl` style text with `num_orders` orders of 4 lines each
fn generate_lineitems(num_orders: u64) -> String {
    let mut text = String::new();
    for k in 1..=num_orders {
        for line in 0..4 {
            text.push_str(&format!(
                "{}|1|{}|{}|1|{}.{:02}|0.0{}|0.00|N|O|1996-01-01|1996-01-01|1996-01-01|NONE|AIR|c|\n",
                k,
                1 + (k + line) % 100,
                line + 1,
                900 + k % 1000,
                k % 100,
                k % 10
            ));
        }
    }
    text
}

fn generate_dataset(num_orders: u64) -> Dataset {
    Dataset {
        customers: vec![],
        orders: (1..=num_orders)
            .map(|k| Order {
                orderkey: k,
                custkey: 1,
                orderdate: format!("{}-{:02}-01", 1994 + k % 5, 1 + k % 12),
            })
            .collect(),
        lineitems: (1..=num_orders)
            .flat_map(|k| {
                (0..4).map(move |line| LineItem {
                    orderkey: k,
                    suppkey: 1 + (k + line) % 100,
                    extendedprice: 900.0 + (k % 1000) as f64,
                    discount: (k % 10) as f64 / 100.0,
                })
            })
            .collect(),
        suppliers: (1..=100)
            .map(|k| Supplier {
                suppkey: k,
                nationkey: k % 25,
            })
            .collect(),
        nations: (0..25)
            .map(|k| Nation {
                nationkey: k,
                regionkey: k % 5,
                name: format!("NATION{k:02}"),
            })
            .collect(),
        regions: ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"]
            .iter()
            .enumerate()
            .map(|(k, name)| Region {
                regionkey: k as u64,
                name: name.to_string(),
            })
            .collect(),
    }
}

/// Benchmark parallel parsing of the largest table across worker counts
fn bench_table_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_lineitem");
    let runtime = Runtime::new().unwrap();
    let text: Arc<str> = Arc::from(generate_lineitems(25_000));

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            let loader = TableLoader::new(workers);
            b.to_async(&runtime).iter(|| {
                let text = Arc::clone(&text);
                let loader = loader.clone();
                async move {
                    let rows = loader.load_str::<LineItem>(text).await.unwrap();
                    black_box(rows);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark join and aggregation across partition counts
fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    let runtime = Runtime::new().unwrap();
    let aggregator = Arc::new(
        RevenueAggregator::for_dates(
            Arc::new(generate_dataset(100_000)),
            "ASIA",
            "1994-01-01",
            "1997-01-01",
        )
        .unwrap(),
    );

    for partitions in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(partitions),
            &partitions,
            |b, &partitions| {
                let scheduler = PartitionScheduler::new(partitions);
                b.to_async(&runtime).iter(|| {
                    let aggregator = Arc::clone(&aggregator);
                    let scheduler = scheduler.clone();
                    async move {
                        let results = scheduler.run(aggregator).await.unwrap();
                        black_box(results.merge().into_sorted());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_table_loading, bench_aggregation);
criterion_main!(benches);
