//! Workspace descriptor

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The directory the deployment runs from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorkspaceDescriptor {
    /// Working directory for the deployment command
    #[serde(default)]
    pub path: PathBuf,
}

impl WorkspaceDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
