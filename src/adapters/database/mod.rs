//! Database abstraction layer
//!
//! This module provides a trait-based abstraction over table sources,
//! allowing Anonymo to read from different database backends (PostgreSQL,
//! or tables held in memory).

pub mod factory;
pub mod memory;
pub mod params;
pub mod traits;

pub use factory::connect;
pub use memory::MemorySource;
pub use params::{ConnectionParams, DatabaseKind};
pub use traits::TableSource;
