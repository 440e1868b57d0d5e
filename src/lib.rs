//! artvar: load artifact text files into a shared variable store.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{FilesystemArtifactReader, LogDiagnostics, MemoryVariableStore};
pub use app::LoaderContext;
pub use app::api::{deployment_root, load, read_manifest, run_manifest};
pub use app::commands::load::execute as load_file_into_variable;
pub use domain::{AppError, Binding, HostConfig};
pub use ports::{ArtifactReader, Diagnostics, VariableStore};
