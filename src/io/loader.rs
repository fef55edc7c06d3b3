use std::io;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, info};

use super::error::IoError;
use super::parse::{TableRecord, parse_lines};
use crate::domain::partition_ranges;

/// A contiguous block of lines within a table file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChunk {
    /// Byte range of the block within the file text
    pub bytes: Range<usize>,
    /// 1-based line number of the block's first line
    pub first_line: u64,
}

/// Split `text` into `parts` contiguous blocks of whole lines.
///
/// Lines are divided by index with [`partition_ranges`], so the last block
/// absorbs the remainder and blocks may be empty.
pub fn split_lines(text: &str, parts: usize) -> Vec<LineChunk> {
    let mut starts = Vec::new();
    if !text.is_empty() {
        starts.push(0);
    }
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' && i + 1 < text.len() {
            starts.push(i + 1);
        }
    }

    let line_count = starts.len();
    let offset = |line: usize| starts.get(line).copied().unwrap_or(text.len());

    partition_ranges(line_count, parts)
        .into_iter()
        .map(|lines| LineChunk {
            bytes: offset(lines.start)..offset(lines.end),
            first_line: lines.start as u64 + 1,
        })
        .collect()
}

/// Loads `|`-delimited table files, parsing each file on several workers
#[derive(Debug, Clone)]
pub struct TableLoader {
    workers: usize,
}

impl TableLoader {
    /// Create a loader that splits every table across `workers` parse tasks
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Read and parse a whole table file.
    ///
    /// Fails with [`IoError::FileAccess`] if the file cannot be read, with
    /// [`IoError::InvalidEncoding`] if it is not UTF-8, and with a parse error
    /// for the first malformed line. No partial table is returned.
    pub async fn load<R: TableRecord>(&self, path: impl AsRef<Path>) -> Result<Vec<R>, IoError> {
        let path = path.as_ref();
        let started = Instant::now();

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::InvalidData => IoError::InvalidEncoding {
                    table: R::TABLE,
                    path: path.to_path_buf(),
                },
                _ => IoError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        let rows = self.load_str::<R>(text).await?;

        info!(
            table = R::TABLE,
            rows = rows.len(),
            workers = self.workers,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Loaded table"
        );

        Ok(rows)
    }

    /// Parse table text already in memory.
    ///
    /// Chunks are parsed concurrently and concatenated in chunk order, so the
    /// resulting row order matches the input regardless of completion timing.
    pub async fn load_str<R: TableRecord>(
        &self,
        text: impl Into<Arc<str>>,
    ) -> Result<Vec<R>, IoError> {
        let text: Arc<str> = text.into();
        let chunks = split_lines(&text, self.workers);

        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                let text = Arc::clone(&text);
                tokio::task::spawn_blocking(move || {
                    parse_lines::<R>(&text[chunk.bytes], chunk.first_line)
                })
            })
            .collect();

        // Barrier: every chunk must finish before the table is handed on
        let mut rows = Vec::new();
        for (chunk_id, joined) in join_all(handles).await.into_iter().enumerate() {
            let chunk_rows = joined.map_err(|e| {
                IoError::WorkerFailed(format!("{} chunk {}: {}", R::TABLE, chunk_id, e))
            })??;
            debug!(table = R::TABLE, chunk_id, rows = chunk_rows.len(), "Parsed chunk");
            rows.extend(chunk_rows);
        }

        Ok(rows)
    }
}
