//! Shared testing harness for `artvar` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated deployment root with an `artifacts/` directory.
pub(crate) struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::create_dir_all(root.path().join("artifacts"))
            .expect("Failed to create artifacts directory");
        Self { root }
    }

    /// Deployment root passed to the loader.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the artifacts directory.
    pub(crate) fn artifacts_path(&self) -> PathBuf {
        self.root.path().join("artifacts")
    }

    /// Write `<root>/artifacts/<name>.txt` with `content`.
    pub(crate) fn write_artifact(&self, name: &str, content: impl AsRef<[u8]>) {
        let path = self.artifacts_path().join(format!("{}.txt", name));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create artifact parent directory");
        }
        fs::write(&path, content).expect("Failed to write artifact");
    }

    /// Write a file relative to the root (outside `artifacts/`).
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Build a command for invoking the compiled `artvar` binary within the root.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("artvar").expect("Failed to locate artvar binary");
        cmd.current_dir(self.root()).env("RUST_LOG", "info");
        cmd
    }

    /// `artvar load <file> <var> --root <root>`.
    pub(crate) fn load(&self, file_name: &str, var_name: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args(["load", file_name, var_name, "--root"]).arg(self.root());
        cmd
    }
}
