use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::Level;

use super::error::AppError;
use crate::domain::DateRange;

/// Environment variable selecting the log level written to stderr
pub const LOG_ENV: &str = "REVENUE_LOG";

pub const USAGE: &str =
    "Usage: revenue <data_path> <region_name> <start_date> <end_date> <num_threads> [<output_dir>]";

/// Parameters for one query run
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub data_path: PathBuf,
    pub region_name: String,
    pub date_range: DateRange,
    pub num_threads: usize,
    pub output_dir: Option<PathBuf>,
    pub log_level: Level,
}

impl QueryConfig {
    /// Build a config from the full argument vector (program name first)
    pub fn from_args(args: &[String]) -> Result<Self, AppError> {
        if args.len() < 6 {
            return Err(AppError::InvalidArguments(USAGE.to_string()));
        }

        let num_threads = args[5]
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                AppError::InvalidArguments(format!(
                    "num_threads must be a positive integer, got {:?}",
                    args[5]
                ))
            })?;

        let date_range = DateRange::new(args[3].as_str(), args[4].as_str())
            .map_err(|e| AppError::InvalidArguments(e.to_string()))?;

        Ok(Self {
            data_path: PathBuf::from(&args[1]),
            region_name: args[2].clone(),
            date_range,
            num_threads,
            output_dir: args.get(6).map(PathBuf::from),
            log_level: Level::WARN,
        })
    }

    /// Override the log level from the raw value of [`LOG_ENV`], if set
    pub fn with_log_level(mut self, value: Option<&str>) -> Result<Self, AppError> {
        if let Some(value) = value {
            self.log_level = Level::from_str(value.trim()).map_err(|_| {
                AppError::InvalidArguments(format!(
                    "{} must be a log level, got {:?}",
                    LOG_ENV, value
                ))
            })?;
        }
        Ok(self)
    }

    /// Path of a table file, `<data_path>/<table>.tbl`
    pub fn table_path(&self, table: &str) -> PathBuf {
        self.data_path.join(format!("{table}.tbl"))
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}
