//! Apply a list of manifest bindings in order.

use crate::app::LoaderContext;
use crate::app::commands::load;
use crate::domain::{AppError, Binding};
use crate::ports::{ArtifactReader, Diagnostics, VariableStore};

/// Load every binding in declaration order, stopping at the first failure.
///
/// Returns the variable names written. Bindings applied before a failure stay
/// in the store.
pub fn execute<R, S, D>(
    ctx: &LoaderContext<R, S, D>,
    bindings: &[Binding],
) -> Result<Vec<String>, AppError>
where
    R: ArtifactReader,
    S: VariableStore,
    D: Diagnostics,
{
    let mut written = Vec::with_capacity(bindings.len());
    for binding in bindings {
        load::execute(ctx, &binding.file, &binding.var)?;
        written.push(binding.var.clone());
    }
    Ok(written)
}
