//! Persisted install-hint dismissal.
//!
//! Dismissal is a per-device/profile boolean that survives restarts. It is
//! reached through the [`DismissalStore`] trait so tests can use
//! [`MemoryDismissalStore`]; the shell uses [`FileDismissalStore`], which keeps
//! one YAML record file per [`ProfileId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{PickError, Result};

/// Key under which the hint dismissal is recorded.
pub const DISMISSAL_KEY: &str = "ios-install-dismissed";

/// Persistent per-device key-value flags.
pub trait DismissalStore {
    /// Whether `key` has been recorded.
    fn get(&self, key: &str) -> Result<bool>;

    /// Record `key` durably.
    fn set(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
///
/// Clones share their entries, so a clone handed to a second orchestrator
/// behaves like the same device store seen after a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryDismissalStore {
    entries: Rc<RefCell<HashSet<String>>>,
}

impl MemoryDismissalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DismissalStore for MemoryDismissalStore {
    fn get(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow().contains(key))
    }

    fn set(&mut self, key: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string());
        Ok(())
    }
}

/// Identifier for a device/browser profile.
///
/// Derived from the user agent so that each profile keeps its own
/// dismissal record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileId {
    /// SHA256 hash of the user agent.
    hash: String,
}

impl ProfileId {
    /// Create a ProfileId from a user agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(user_agent.trim().as_bytes());
        let result = hasher.finalize();

        Self {
            hash: hex::encode(&result[..8]),
        }
    }

    /// Get the hash as a string.
    ///
    /// This is a 16-character hex string (8 bytes of SHA256).
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// On-disk record file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DismissalFile {
    /// Schema version for migration.
    #[serde(default = "current_version")]
    version: u32,

    /// Recorded keys and when they were written.
    #[serde(default)]
    entries: BTreeMap<String, DateTime<Utc>>,
}

fn current_version() -> u32 {
    FileDismissalStore::CURRENT_VERSION
}

/// Store keeping one YAML file per profile under a state directory.
#[derive(Debug, Clone)]
pub struct FileDismissalStore {
    path: PathBuf,
}

impl FileDismissalStore {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a store for `profile` under `state_dir`.
    pub fn new(state_dir: &Path, profile: &ProfileId) -> Self {
        Self {
            path: state_dir
                .join("profiles")
                .join(profile.hash())
                .join("dismissals.yml"),
        }
    }

    /// Get the record file path.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<DismissalFile> {
        match self.read()? {
            Some(content) => self.parse(&content),
            None => Ok(Self::empty()),
        }
    }

    /// Read the raw record file, `None` when it does not exist yet.
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| self.unavailable(e))
    }

    fn parse(&self, content: &str) -> Result<DismissalFile> {
        serde_yaml::from_str(content).map_err(|e| self.unavailable(e))
    }

    fn empty() -> DismissalFile {
        DismissalFile {
            version: Self::CURRENT_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Save using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    fn save(&self, file: &DismissalFile) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.unavailable(e))?;
        }

        let content = serde_yaml::to_string(file).map_err(|e| self.unavailable(e))?;

        let temp_path = self.path.with_extension("yml.tmp");
        fs::write(&temp_path, &content).map_err(|e| self.unavailable(e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.unavailable(e))?;

        Ok(())
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> PickError {
        PickError::StoreUnavailable {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl DismissalStore for FileDismissalStore {
    fn get(&self, key: &str) -> Result<bool> {
        Ok(self.load()?.entries.contains_key(key))
    }

    fn set(&mut self, key: &str) -> Result<()> {
        let mut file = match self.read()? {
            // A corrupt file is replaced rather than blocking the write.
            Some(content) => self.parse(&content).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        };
        file.version = Self::CURRENT_VERSION;
        file.entries.insert(key.to_string(), Utc::now());
        self.save(&file)
    }
}
