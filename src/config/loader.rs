//! Configuration file discovery and loading.
//!
//! The option set lives in `.pickapp/config.yml` under the project root.
//! A `--config` override loads that file instead. Projects without a
//! config fall back to the built-in option set.

use crate::config::schema::PickConfig;
use crate::error::{PickError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root holding config and state.
pub const PROJECT_DIR: &str = ".pickapp";

/// Path of the project config for the given project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_DIR).join("config.yml")
}

/// Find the project root by walking up from `start`.
///
/// Looks for a directory holding `.pickapp/config.yml`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if project_config_path(&current).is_file() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into PickConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PickConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PickError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PickError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into PickConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PickConfig> {
    serde_yaml::from_str(content).map_err(|e| PickError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file and fails if it
/// is missing. Otherwise loads the project config, falling back to
/// [`PickConfig::builtin`] when the project has none.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PickConfig> {
    if let Some(override_path) = config_override {
        return load_config_file(override_path);
    }

    match load_config_file(&project_config_path(project_root)) {
        Ok(config) => Ok(config),
        Err(PickError::ConfigNotFound { path }) => {
            tracing::debug!("No config at {}; using built-in options", path.display());
            Ok(PickConfig::builtin())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(temp: &TempDir, content: &str) {
        let dir = temp.path().join(PROJECT_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), content).unwrap();
    }

    #[test]
    fn loads_project_config() {
        let temp = TempDir::new().unwrap();
        write_project_config(
            &temp,
            "app_name: Poll\noptions:\n  - id: a\n    title: A\n    percentage: 100\n",
        );

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.app_name.as_deref(), Some("Poll"));
        assert_eq!(config.options.len(), 1);
    }

    #[test]
    fn falls_back_to_builtin_options() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.options.len(), 2);
        assert_eq!(config.options[0].id, "opt1");
    }

    #[test]
    fn override_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yml");
        let result = load_config(temp.path(), Some(&missing));
        assert!(matches!(result, Err(PickError::ConfigNotFound { .. })));
    }

    #[test]
    fn override_path_is_loaded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "options:\n  - id: x\n    title: X\n").unwrap();

        let config = load_config(temp.path(), Some(&path)).unwrap();
        assert_eq!(config.options[0].id, "x");
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "options: [unclosed");

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(err, PickError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.yml"));
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "options: []\n");
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_ignores_bare_state_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(PROJECT_DIR).join("profiles")).unwrap();

        assert_ne!(find_project_root(temp.path()), Some(temp.path().to_path_buf()));
    }
}
