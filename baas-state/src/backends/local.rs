//! Local file backend for state storage
//!
//! State lives in a JSON file (default: baas.state.json) next to a `.lock`
//! file created exclusively while a command runs.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::backend::{BackendConfig, BackendError, BackendResult, StateBackend};
use crate::lock::{DEFAULT_LOCK_TIMEOUT_SECS, LockInfo};
use crate::state::StateFile;

pub struct LocalBackend {
    state_path: PathBuf,
    lock_path: PathBuf,
    lock_timeout_secs: i64,
}

impl LocalBackend {
    pub const DEFAULT_STATE_FILE: &'static str = "baas.state.json";

    pub fn new() -> Self {
        Self::with_path(PathBuf::from(Self::DEFAULT_STATE_FILE))
    }

    pub fn with_path(state_path: PathBuf) -> Self {
        let lock_path = state_path.with_extension("lock");
        Self {
            state_path,
            lock_path,
            lock_timeout_secs: DEFAULT_LOCK_TIMEOUT_SECS,
        }
    }

    /// Settings: `path` (String) and `lock_timeout_secs` (Int)
    pub fn from_config(config: &BackendConfig) -> BackendResult<Self> {
        let path = config
            .get_string("path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_STATE_FILE));

        let mut backend = Self::with_path(path);
        if let Some(timeout) = config.get_int("lock_timeout_secs")? {
            if timeout <= 0 {
                return Err(BackendError::configuration(
                    "lock_timeout_secs must be positive",
                ));
            }
            backend.lock_timeout_secs = timeout;
        }
        Ok(backend)
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    fn read_lock(&self) -> BackendResult<Option<LockInfo>> {
        let content = match std::fs::read_to_string(&self.lock_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BackendError::Io(format!("Failed to read lock file: {}", e))),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| BackendError::InvalidState(format!("Failed to parse lock file: {}", e)))
    }

    fn remove_lock(&self) -> BackendResult<()> {
        std::fs::remove_file(&self.lock_path)
            .map_err(|e| BackendError::Io(format!("Failed to remove lock file: {}", e)))
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateBackend for LocalBackend {
    async fn read_state(&self) -> BackendResult<Option<StateFile>> {
        let content = match std::fs::read_to_string(&self.state_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BackendError::Io(format!("Failed to read state file: {}", e))),
        };

        let state: StateFile = serde_json::from_str(&content).map_err(|e| {
            BackendError::InvalidState(format!("Failed to parse state file: {}", e))
        })?;
        Ok(Some(state))
    }

    async fn write_state(&self, state: &StateFile) -> BackendResult<()> {
        if let Some(stored) = self.read_state().await?
            && stored.lineage != state.lineage
        {
            return Err(BackendError::LineageMismatch {
                expected: stored.lineage,
                actual: state.lineage.clone(),
            });
        }

        let content = serde_json::to_string_pretty(state).map_err(|e| {
            BackendError::Serialization(format!("Failed to serialize state: {}", e))
        })?;

        // Never leave a truncated state file behind
        let tmp_path = self.state_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)
            .map_err(|e| BackendError::Io(format!("Failed to write state file: {}", e)))?;
        std::fs::rename(&tmp_path, &self.state_path)
            .map_err(|e| BackendError::Io(format!("Failed to replace state file: {}", e)))?;

        log::debug!("Wrote state serial {} to {}", state.serial, self.state_path.display());
        Ok(())
    }

    async fn acquire_lock(&self, operation: &str) -> BackendResult<LockInfo> {
        match self.read_lock() {
            Ok(Some(existing)) if !existing.is_expired() => {
                return Err(BackendError::locked(&existing));
            }
            Ok(Some(existing)) => {
                log::warn!(
                    "Replacing expired lock {} held by {}",
                    existing.id,
                    existing.who
                );
                self.remove_lock()?;
            }
            Ok(None) => {}
            Err(BackendError::InvalidState(reason)) => {
                log::warn!("Replacing unreadable lock file: {}", reason);
                self.remove_lock()?;
            }
            Err(e) => return Err(e),
        }

        let lock = LockInfo::with_timeout(operation, self.lock_timeout_secs);
        let content = serde_json::to_string_pretty(&lock)
            .map_err(|e| BackendError::Serialization(format!("Failed to serialize lock: {}", e)))?;

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.lock_path)
        {
            Ok(file) => file,
            // Lost a race with another process
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return match self.read_lock()? {
                    Some(holder) => Err(BackendError::locked(&holder)),
                    None => Err(BackendError::Io("Lock file vanished while acquiring".to_string())),
                };
            }
            Err(e) => return Err(BackendError::Io(format!("Failed to create lock file: {}", e))),
        };
        file.write_all(content.as_bytes())
            .map_err(|e| BackendError::Io(format!("Failed to write lock file: {}", e)))?;

        Ok(lock)
    }

    async fn release_lock(&self, lock: &LockInfo) -> BackendResult<()> {
        let existing = self
            .read_lock()?
            .ok_or_else(|| BackendError::LockNotFound(lock.id.clone()))?;

        if existing.id != lock.id {
            return Err(BackendError::LockMismatch {
                expected: lock.id.clone(),
                actual: existing.id,
            });
        }
        self.remove_lock()
    }

    async fn force_unlock(&self, lock_id: &str) -> BackendResult<()> {
        match self.read_lock() {
            Ok(None) => return Err(BackendError::LockNotFound(lock_id.to_string())),
            Ok(Some(existing)) if existing.id != lock_id => {
                return Err(BackendError::LockMismatch {
                    expected: lock_id.to_string(),
                    actual: existing.id,
                });
            }
            // An unreadable lock can always be removed
            Ok(Some(_)) | Err(BackendError::InvalidState(_)) => {}
            Err(e) => return Err(e),
        }
        self.remove_lock()
    }

    async fn init(&self) -> BackendResult<()> {
        match self.state_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
                .map_err(|e| BackendError::Io(format!("Failed to create {}: {}", dir.display(), e))),
            _ => Ok(()),
        }
    }
}
