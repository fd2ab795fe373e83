use crate::errors::{MixError, Result};
use common::model::source::NewSource;
use std::path::Path;

/// Reads a JSON array of sources to insert at startup.
pub fn load_seed_file(path: &Path) -> Result<Vec<NewSource>> {
    let bytes = std::fs::read(path)
        .map_err(|e| MixError::Config(format!("read seed file {}: {e}", path.display())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| MixError::Config(format!("parse seed file {}: {e}", path.display())))
}
