use revenue::prelude::*;

fn main() {
    CliApp::new("revenue")
        .with_args(parse_args)
        .run(run_query);
}

/// Parse and validate command-line arguments plus the log level override
fn parse_args(args: Vec<String>) -> Result<QueryConfig, AppError> {
    let log_level = std::env::var(LOG_ENV).ok();
    QueryConfig::from_args(&args)?.with_log_level(log_level.as_deref())
}

/// Main application logic - runs the query and writes the sorted result
async fn run_query(writers: Writers, config: QueryConfig) -> Result<(), AppError> {
    let rows = execute(&config).await?;

    // Console output first; a failing result file is logged, not fatal
    let mut console = ConsoleSink::new(writers.stdout);
    publish(&mut console, &rows, config.output_dir()).await?;

    Ok(())
}
