//! Parallel per-nation revenue query over pipe-delimited TPC-H style tables.
//!
//! Tables are parsed concurrently into typed rows, the order table is split
//! into fixed partitions that are aggregated on separate workers, and the
//! partial results are merged in partition order before output.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod scheduler;
