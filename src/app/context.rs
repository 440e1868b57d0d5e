use std::path::{Path, PathBuf};

use crate::ports::{ArtifactReader, Diagnostics, VariableStore};

/// Capabilities a single load invocation runs against.
pub struct LoaderContext<R: ArtifactReader, S: VariableStore, D: Diagnostics> {
    root: PathBuf,
    reader: R,
    store: S,
    diagnostics: D,
}

impl<R: ArtifactReader, S: VariableStore, D: Diagnostics> LoaderContext<R, S, D> {
    /// Create a context rooted at the deployment location `root`.
    pub fn new(root: impl Into<PathBuf>, reader: R, store: S, diagnostics: D) -> Self {
        Self { root: root.into(), reader, store, diagnostics }
    }

    /// Deployment root containing the `artifacts/` directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }
}
