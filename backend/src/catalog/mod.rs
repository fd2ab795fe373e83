//! # Source Catalog Store
//!
//! Read access to the catalog of media sources. The API layer only ever
//! reads; records are created by catalog management (the startup seed or an
//! external import) and are never mutated or deleted here.
//!
//! - `sqlite`: the persistent store backed by a single `sources` table.
//! - `memory`: a fixed snapshot, used for tests.
//! - `seed`: loading of the JSON seed file applied at startup.

#[cfg(test)]
mod memory;
mod seed;
mod sqlite;

#[cfg(test)]
pub use memory::MemoryCatalog;
pub use seed::load_seed_file;
pub use sqlite::SqliteCatalog;

use crate::errors::Result;
use common::model::source::Source;

/// Read-only view over the stored sources.
///
/// Calls may block on I/O; callers on the async executor run them through
/// `spawn_blocking`. A failure to reach the storage is reported as
/// `MixError::StoreUnavailable` and is not retried.
pub trait SourceCatalog: Send + Sync {
    /// Every source in the catalog.
    fn list_all(&self) -> Result<Vec<Source>>;

    /// Only the sources whose `is_video` flag equals `flag`.
    fn list_by_video_flag(&self, flag: bool) -> Result<Vec<Source>>;
}
