//! State backend trait and error types

use std::collections::HashMap;

use async_trait::async_trait;
use baas_core::resource::Value;
use thiserror::Error;

use crate::lock::LockInfo;
use crate::state::StateFile;

/// Errors that can occur when interacting with a state backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// The state is locked by another process
    #[error("State is locked by {who} (lock ID: {lock_id}, operation: {operation})")]
    Locked {
        lock_id: String,
        who: String,
        operation: String,
    },

    /// The lock was not found (for release/force-unlock operations)
    #[error("Lock not found: {0}")]
    LockNotFound(String),

    /// Lock ID mismatch when trying to release
    #[error("Lock ID mismatch: expected {expected}, got {actual}")]
    LockMismatch { expected: String, actual: String },

    /// The backend type is not supported
    #[error("Unsupported backend type: {0}")]
    UnsupportedBackend(String),

    /// Configuration error
    #[error("Backend configuration error: {0}")]
    Configuration(String),

    /// State file is corrupted or invalid
    #[error("Invalid state file: {0}")]
    InvalidState(String),

    /// State lineage mismatch (prevents accidental state overwrites)
    #[error("State lineage mismatch: expected {expected}, got {actual}")]
    LineageMismatch { expected: String, actual: String },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BackendError {
    /// Create a Locked error from a LockInfo
    pub fn locked(lock: &LockInfo) -> Self {
        Self::Locked {
            lock_id: lock.id.clone(),
            who: lock.who.clone(),
            operation: lock.operation.clone(),
        }
    }

    /// Create an unsupported backend error
    pub fn unsupported_backend(backend_type: impl Into<String>) -> Self {
        Self::UnsupportedBackend(backend_type.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Storage for the state file and its lock
#[async_trait]
pub trait StateBackend: Send + Sync {
    /// Read the current state from the backend
    ///
    /// Returns `None` if no state exists (first-time use)
    async fn read_state(&self) -> BackendResult<Option<StateFile>>;

    /// Write the state to the backend
    ///
    /// Callers increment the serial first. A stored state with a different
    /// lineage is never overwritten.
    async fn write_state(&self, state: &StateFile) -> BackendResult<()>;

    /// Acquire a lock for the given operation
    ///
    /// This should fail if a lock is already held by another process
    /// (unless the existing lock has expired)
    async fn acquire_lock(&self, operation: &str) -> BackendResult<LockInfo>;

    /// Release a lock acquired by this process; fails on an ID mismatch
    async fn release_lock(&self, lock: &LockInfo) -> BackendResult<()>;

    /// Remove a lock left behind by a crashed run
    async fn force_unlock(&self, lock_id: &str) -> BackendResult<()>;

    /// Prepare the backend for first use (e.g. create parent directories)
    async fn init(&self) -> BackendResult<()>;
}

/// `backend` block of a configuration file
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend type (currently only "local")
    pub backend_type: String,
    pub attributes: HashMap<String, Value>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: "local".to_string(),
            attributes: HashMap::new(),
        }
    }
}

impl BackendConfig {
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Integer setting; any other type is a configuration error
    pub fn get_int(&self, key: &str) -> BackendResult<Option<i64>> {
        match self.attributes.get(key) {
            None => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(BackendError::configuration(format!(
                "'{}' must be an Int, got {}",
                key,
                other.type_name()
            ))),
        }
    }
}
