//! State persistence for the baas operator CLI
//!
//! - **StateFile**: every managed resource and data source read, with the
//!   backend-assigned ID and flattened attributes
//! - **StateBackend**: storage for the state file plus a lock
//! - **LockInfo**: who holds the lock and until when
//!
//! ```ignore
//! use baas_state::{create_backend, BackendConfig};
//!
//! let backend = create_backend(&BackendConfig::default()).await?;
//! let lock = backend.acquire_lock("apply").await?;
//! let mut state = backend.read_state().await?.unwrap_or_default();
//! // ... call the provider, upsert resources ...
//! state.increment_serial();
//! backend.write_state(&state).await?;
//! backend.release_lock(&lock).await?;
//! ```

pub mod backend;
pub mod backends;
pub mod lock;
pub mod state;

pub use backend::{BackendConfig, BackendError, BackendResult, StateBackend};
pub use backends::{LocalBackend, create_backend};
pub use lock::LockInfo;
pub use state::{ResourceState, StateFile};
