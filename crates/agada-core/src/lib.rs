//! agada-core
//!
//! Shared domain vocabulary: patient identity, the exposure taxonomy, case
//! records, and on-disk path conventions. No I/O here; this is the common
//! language of the Agada Sanjeevini crates.

pub mod error;
pub mod models;
pub mod store_paths;
