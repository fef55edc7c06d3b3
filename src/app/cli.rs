use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tracing::{Level, warn};

use super::config::QueryConfig;
use super::error::AppError;

/// Turns the raw argument vector into a query config
pub type ArgParser = fn(Vec<String>) -> Result<QueryConfig, AppError>;

/// Output handles passed to the application's main function
pub struct Writers {
    pub stdout: BufWriter<Stdout>,
}

/// Reusable CLI application runner that handles:
/// - Argument parsing and logging setup
/// - A tokio runtime sized by the configured thread count
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
    parse_args: ArgParser,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parse_args: |args| QueryConfig::from_args(&args),
        }
    }

    /// Replace the argument parser
    pub fn with_args(mut self, parse_args: ArgParser) -> Self {
        self.parse_args = parse_args;
        self
    }

    /// Run the CLI application.
    ///
    /// Parses arguments, installs the stderr log subscriber, builds a runtime
    /// with `num_threads` worker and blocking threads, then races `main_fn`
    /// against termination signals.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(Writers, QueryConfig) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let args: Vec<String> = std::env::args().collect();
        let config = match (self.parse_args)(args) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        init_tracing(config.log_level);

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(config.num_threads)
            .max_blocking_threads(config.num_threads)
            .thread_name(self.name.clone())
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Error: failed to start runtime: {}", e);
                std::process::exit(1);
            }
        };

        let code = runtime.block_on(async {
            let writers = Writers {
                stdout: BufWriter::new(tokio::io::stdout()),
            };

            // Race main application logic against signal reception
            tokio::select! {
                result = main_fn(writers, config) => exit_code(result),
                signal_code = wait_for_signal() => signal_code,
            }
        });

        std::process::exit(code);
    }
}

fn init_tracing(level: Level) {
    // Results go to stdout, so logs must stay on stderr
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

fn exit_code(result: Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("Signal handlers unavailable, running without them");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Ctrl+C handler unavailable, running without it");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}
