//! Configuration loading, parsing, and validation for pickapp.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pickapp::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".pickapp");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "options:\n  - id: a\n    title: Alpha\n    percentage: 3\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.options[0].title, "Alpha");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use schema::{NegativeWeightPolicy, OptionConfig, OutputMode, PickConfig, Settings};

pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, project_config_path,
    PROJECT_DIR,
};

pub use validator::{validate, validate_config, ValidationError};
