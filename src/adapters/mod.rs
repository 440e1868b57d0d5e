pub mod filesystem_artifact_reader;
pub mod log_diagnostics;
pub mod memory_variable_store;

pub use filesystem_artifact_reader::FilesystemArtifactReader;
pub use log_diagnostics::LogDiagnostics;
pub use memory_variable_store::MemoryVariableStore;
