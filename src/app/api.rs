//! API Facade for the application.
//!
//! Wires the filesystem reader and `log` diagnostics into a `LoaderContext`
//! and runs the commands against a caller-owned store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemArtifactReader, LogDiagnostics};
use crate::app::LoaderContext;
use crate::app::commands::{load as load_cmd, run as run_cmd};
use crate::domain::{AppError, HostConfig};
use crate::ports::VariableStore;

fn create_context<S: VariableStore>(
    root: &Path,
    store: S,
) -> LoaderContext<FilesystemArtifactReader, S, LogDiagnostics> {
    LoaderContext::new(root, FilesystemArtifactReader::new(), store, LogDiagnostics::new())
}

/// Load `<root>/artifacts/<file_name>.txt` into `store` under `var_name`.
pub fn load<S: VariableStore>(
    root: &Path,
    file_name: &str,
    var_name: &str,
    store: S,
) -> Result<(), AppError> {
    let ctx = create_context(root, store);
    load_cmd::execute(&ctx, file_name, var_name)
}

/// Read a host manifest and apply its bindings to `store`.
///
/// Returns the variable names written, in order.
pub fn run_manifest<S: VariableStore>(manifest: &Path, store: S) -> Result<Vec<String>, AppError> {
    let config = read_manifest(manifest)?;
    let manifest_dir = manifest
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let root = config.resolve_root(manifest_dir);
    let ctx = create_context(&root, store);
    run_cmd::execute(&ctx, &config.bindings)
}

/// Read and validate the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<HostConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::ManifestMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;
    HostConfig::parse_toml(&content)
}

/// Directory containing the running executable.
pub fn deployment_root() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Executable has no parent directory: {}", exe.display()),
        ))
    })
}
