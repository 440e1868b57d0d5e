//! Artifact file layout.
//!
//! Artifacts live at `<root>/artifacts/<name>.txt`. The directory and the
//! extension are fixed; only the root (the deployment location) varies.

use std::path::{Path, PathBuf};

/// Directory under the deployment root holding artifact files.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// Extension appended to every logical artifact name.
pub const ARTIFACT_EXTENSION: &str = "txt";

/// Resolve the physical path of the artifact named `file_name`.
///
/// The name is interpolated verbatim. Separators and `..` segments are not
/// rejected; keeping `file_name` inside the artifacts directory is the
/// caller's responsibility.
pub fn artifact_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(format!("{ARTIFACTS_DIR}/{file_name}.{ARTIFACT_EXTENSION}"))
}

/// Decode raw artifact bytes as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
