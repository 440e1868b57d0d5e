mod artifact_reader;
mod diagnostics;
mod variable_store;

pub use artifact_reader::ArtifactReader;
pub use diagnostics::Diagnostics;
pub use variable_store::VariableStore;
