use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};

use super::config::QueryConfig;
use super::error::AppError;
use crate::domain::{Customer, Dataset, LineItem, Nation, NationRevenue, Order, Region, Supplier};
use crate::engine::RevenueAggregator;
use crate::io::{FileSink, ResultSink, TableLoader, TableRecord};
use crate::scheduler::PartitionScheduler;

/// Load all six tables concurrently, each split across `num_threads` parse tasks
pub async fn load_dataset(config: &QueryConfig) -> Result<Dataset, AppError> {
    let loader = TableLoader::new(config.num_threads);

    let (customers, orders, lineitems, suppliers, nations, regions) = tokio::try_join!(
        loader.load::<Customer>(config.table_path(Customer::TABLE)),
        loader.load::<Order>(config.table_path(Order::TABLE)),
        loader.load::<LineItem>(config.table_path(LineItem::TABLE)),
        loader.load::<Supplier>(config.table_path(Supplier::TABLE)),
        loader.load::<Nation>(config.table_path(Nation::TABLE)),
        loader.load::<Region>(config.table_path(Region::TABLE)),
    )?;

    Ok(Dataset {
        customers,
        orders,
        lineitems,
        suppliers,
        nations,
        regions,
    })
}

/// Run the query end to end and return rows sorted by nation name
pub async fn execute(config: &QueryConfig) -> Result<Vec<NationRevenue>, AppError> {
    let started = Instant::now();

    let dataset = Arc::new(load_dataset(config).await?);
    info!(
        rows = dataset.total_rows(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dataset loaded"
    );

    let aggregator = Arc::new(RevenueAggregator::new(
        dataset,
        &config.region_name,
        config.date_range.clone(),
    ));
    if aggregator.region_nations().is_empty() {
        warn!(region = %config.region_name, "Region matches no nations");
    }

    let results = PartitionScheduler::new(config.num_threads)
        .run(aggregator)
        .await?;
    let rows = results.merge().into_sorted();

    info!(
        nations = rows.len(),
        orders = results.orders_scanned(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Query complete"
    );

    Ok(rows)
}

/// Write rows to the console sink and, if requested, to `<output_dir>/result.tbl`.
///
/// A failed result file is logged and does not fail the run; the console
/// output already written stands.
pub async fn publish<S: ResultSink>(
    console: &mut S,
    rows: &[NationRevenue],
    output_dir: Option<&Path>,
) -> Result<(), AppError> {
    console.write_results(rows).await.map_err(AppError::Output)?;

    if let Some(dir) = output_dir {
        let mut file = FileSink::in_dir(dir);
        match file.write_results(rows).await {
            Ok(()) => info!(path = %file.path().display(), "Wrote result file"),
            Err(e) => error!(error = %e, "Failed to write result file"),
        }
    }

    Ok(())
}
