/// Port for diagnostic output.
pub trait Diagnostics {
    /// Record an informational line.
    fn info(&self, message: &str);

    /// Record a failure line.
    fn error(&self, message: &str);
}
