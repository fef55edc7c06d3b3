use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::error::IoError;
use crate::domain::NationRevenue;

/// File name written inside the output directory
pub const RESULT_FILE_NAME: &str = "result.tbl";

/// Destination for the final, sorted query result
#[async_trait]
pub trait ResultSink: Send {
    async fn write_results(&mut self, rows: &[NationRevenue]) -> Result<(), IoError>;
}

/// Render rows as `<nation>: <revenue>` lines
pub fn render_report(rows: &[NationRevenue]) -> String {
    rows.iter()
        .map(|row| format!("{}: {:.2}\n", row.nation, row.revenue))
        .collect()
}

/// Writes the human-readable report to any async writer (normally stdout)
pub struct ConsoleSink<W> {
    writer: W,
}

impl<W> ConsoleSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W> ResultSink for ConsoleSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn write_results(&mut self, rows: &[NationRevenue]) -> Result<(), IoError> {
        self.writer.write_all(render_report(rows).as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ResultRow<'a> {
    nation: &'a str,
    revenue: String,
}

/// Writes `<nation>|<revenue>` rows to `<dir>/result.tbl`
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink targeting `result.tbl` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(RESULT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(rows: &[NationRevenue]) -> Result<Vec<u8>, IoError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for row in rows {
            writer.serialize(ResultRow {
                nation: &row.nation,
                revenue: format!("{:.2}", row.revenue),
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| IoError::Io(e.into_error()))
    }
}

#[async_trait]
impl ResultSink for FileSink {
    async fn write_results(&mut self, rows: &[NationRevenue]) -> Result<(), IoError> {
        let bytes = Self::encode(rows)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|source| IoError::OutputWrite {
                path: self.path.clone(),
                source,
            })
    }
}
