
pub use memory_artifact_reader::MemoryArtifactReader;
pub use recording_diagnostics::{DiagnosticLine, RecordingDiagnostics};
