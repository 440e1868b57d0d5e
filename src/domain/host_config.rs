//! Host manifest (`artvar.toml`) domain model.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Default manifest file name looked up by `artvar run`.
pub const MANIFEST_FILE: &str = "artvar.toml";

/// A list of artifacts to publish into the variable store, in order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Deployment root holding `artifacts/`. Relative paths resolve against
    /// the manifest's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Bindings applied in declaration order.
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// One `file -> var` binding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Binding {
    /// Logical artifact name, without directory or extension.
    pub file: String,
    /// Variable name to publish the content under.
    pub var: String,
}

impl HostConfig {
    /// Parse and validate manifest content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: HostConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.bindings.is_empty() {
            return Err(AppError::Validation("at least one [[bindings]] entry is required".into()));
        }
        for (index, binding) in self.bindings.iter().enumerate() {
            if binding.file.trim().is_empty() {
                return Err(AppError::Validation(format!("bindings[{index}].file is empty")));
            }
            if binding.var.trim().is_empty() {
                return Err(AppError::Validation(format!("bindings[{index}].var is empty")));
            }
        }
        Ok(())
    }

    /// Resolve the deployment root against the manifest's directory.
    pub fn resolve_root(&self, manifest_dir: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => manifest_dir.join(root),
            None => manifest_dir.to_path_buf(),
        }
    }
}
