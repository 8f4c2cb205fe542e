//! Background worker registration.
//!
//! Registration is fire-and-forget: the outcome is logged and never retried
//! or surfaced to the caller.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use tracing::{info, warn};

/// Platform hook registering the background worker script.
pub trait WorkerRegistrar {
    /// Register `script`, returning the scope it controls.
    fn register(&self, script: &str) -> anyhow::Result<String>;
}

/// Register the worker and log the result.
pub fn register_worker(registrar: &dyn WorkerRegistrar, script: &str) {
    match registrar.register(script) {
        Ok(scope) => info!("Background worker registered: {}", scope),
        Err(e) => warn!("Background worker registration failed: {:#}", e),
    }
}

/// Registrar that resolves worker scripts against a project directory.
///
/// The scope is the directory containing the script.
#[derive(Debug, Clone)]
pub struct ScriptRegistrar {
    root: PathBuf,
}

impl ScriptRegistrar {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl WorkerRegistrar for ScriptRegistrar {
    fn register(&self, script: &str) -> anyhow::Result<String> {
        let path = self.root.join(script);
        if !path.is_file() {
            bail!("worker script not found: {}", path.display());
        }

        let scope = path
            .parent()
            .unwrap_or(&self.root)
            .canonicalize()
            .with_context(|| format!("resolving scope of {}", path.display()))?;
        Ok(scope.display().to_string())
    }
}
