//! Dataset loading.
//!
//! ```text
//! file bytes ──► csv_parser (polars) ──► DataFrame ──► Vec<SalesRecord>
//!                                                            │
//!                    DatasetCache (OnceLock, load once) ◄────┘
//! ```

pub mod cache;
pub mod checksum;
pub mod csv_parser;
pub mod error;
pub mod loaders;

pub use cache::DatasetCache;
pub use checksum::calculate_checksum;
pub use error::{LoadError, LoadResult};
pub use loaders::DatasetLoader;
