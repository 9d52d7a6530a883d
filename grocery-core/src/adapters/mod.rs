//! Adapter implementations
//!
//! Adapters implement the repository ports with concrete storage:
//! - DuckDB for persistent data
//! - An in-memory store for demo mode and tests

pub mod duckdb;
pub mod memory;
