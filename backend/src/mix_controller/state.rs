//! Shared state handed to every mix handler.
//!
//! `MixState` is cloned into each actix worker as `web::Data`. It carries:
//! - the catalog handle, shared behind an `Arc`;
//! - the random generator used for mixes, behind a `Mutex` that is held only
//!   for the duration of a single selection.

use crate::catalog::SourceCatalog;
use crate::errors::{MixError, Result};
use crate::selector::select_random_mix;
use common::model::mix::MixResult;
use common::model::source::Source;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MixState {
    pub catalog: Arc<dyn SourceCatalog>,
    pub rng: Arc<Mutex<StdRng>>,
}

impl MixState {
    /// Builds the state; a fixed `seed` makes mixes reproducible.
    pub fn new(catalog: Arc<dyn SourceCatalog>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Runs a catalog call on the blocking thread pool.
    pub async fn fetch<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&dyn SourceCatalog) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        tokio::task::spawn_blocking(move || f(catalog.as_ref()))
            .await
            .map_err(|e| MixError::StoreUnavailable(format!("catalog task failed: {e}")))?
    }

    /// Selects a mix with the shared generator.
    pub fn pick_mix(&self, all_sources: &[Source], video_sources: &[Source]) -> Result<MixResult> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        select_random_mix(&mut *rng, all_sources, video_sources)
    }
}
