//! Load an artifact file into a variable.

use crate::app::LoaderContext;
use crate::domain::{AppError, artifact_path, decode, preview};
use crate::ports::{ArtifactReader, Diagnostics, VariableStore};

/// Read `<root>/artifacts/<file_name>.txt` and publish its text under `var_name`.
///
/// On success the store holds the decoded text verbatim and a preview of at
/// most 64 characters is logged. On failure the error is logged once and
/// returned; the store is not touched.
pub fn execute<R, S, D>(
    ctx: &LoaderContext<R, S, D>,
    file_name: &str,
    var_name: &str,
) -> Result<(), AppError>
where
    R: ArtifactReader,
    S: VariableStore,
    D: Diagnostics,
{
    let content = match read_artifact(ctx, file_name) {
        Ok(content) => content,
        Err(err) => {
            ctx.diagnostics().error(&format!("An error occurred: {}", err));
            return Err(err);
        }
    };

    let shown = preview(&content).to_string();
    ctx.store().set_var(var_name, content);
    ctx.diagnostics().info(&shown);
    Ok(())
}

fn read_artifact<R, S, D>(ctx: &LoaderContext<R, S, D>, file_name: &str) -> Result<String, AppError>
where
    R: ArtifactReader,
    S: VariableStore,
    D: Diagnostics,
{
    let path = artifact_path(ctx.root(), file_name);
    let bytes = ctx.reader().read_bytes(&path).map_err(|err| AppError::file_access(&path, err))?;
    Ok(decode(&bytes))
}
