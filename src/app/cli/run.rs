//! Run command implementation.

use std::path::Path;

use crate::adapters::MemoryVariableStore;
use crate::app::api;
use crate::domain::AppError;

pub fn run_manifest(manifest: &Path) -> Result<(), AppError> {
    let store = MemoryVariableStore::new();
    let written = api::run_manifest(manifest, store.clone())?;
    log::debug!("Applied {} binding(s) from {}", written.len(), manifest.display());
    super::print_store(&store)
}
