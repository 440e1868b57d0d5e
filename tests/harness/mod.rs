#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use recording_diagnostics::RecordingDiagnostics;
pub(crate) use test_context::TestContext;
