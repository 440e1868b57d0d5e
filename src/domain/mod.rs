pub mod artifact;
pub mod error;
pub mod host_config;
pub mod preview;

pub use artifact::{ARTIFACT_EXTENSION, ARTIFACTS_DIR, artifact_path, decode};
pub use error::AppError;
pub use host_config::{Binding, HostConfig, MANIFEST_FILE};
pub use preview::{PREVIEW_CHARS, preview};
