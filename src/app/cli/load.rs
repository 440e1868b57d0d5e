//! Load command implementation.

use std::path::PathBuf;

use crate::adapters::MemoryVariableStore;
use crate::app::api;
use crate::domain::AppError;

pub fn run_load(file_name: &str, var_name: &str, root: Option<PathBuf>) -> Result<(), AppError> {
    let root = match root {
        Some(root) => root,
        None => api::deployment_root()?,
    };
    let store = MemoryVariableStore::new();
    api::load(&root, file_name, var_name, store.clone())?;
    super::print_store(&store)
}
