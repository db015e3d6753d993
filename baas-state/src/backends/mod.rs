//! Backend implementations for state storage

mod local;

pub use local::LocalBackend;

use crate::backend::{BackendConfig, BackendError, BackendResult, StateBackend};

/// Create a backend from a `backend` configuration block
pub async fn create_backend(config: &BackendConfig) -> BackendResult<Box<dyn StateBackend>> {
    match config.backend_type.as_str() {
        "local" => {
            let backend = LocalBackend::from_config(config)?;
            backend.init().await?;
            Ok(Box::new(backend))
        }
        other => Err(BackendError::unsupported_backend(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::resource::Value;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_unsupported_backend() {
        let config = BackendConfig {
            backend_type: "s3".to_string(),
            attributes: HashMap::new(),
        };

        match create_backend(&config).await {
            Err(BackendError::UnsupportedBackend(name)) => assert_eq!(name, "s3"),
            Err(other) => panic!("Expected UnsupportedBackend error, got {}", other),
            Ok(_) => panic!("Expected UnsupportedBackend error"),
        }
    }

    #[tokio::test]
    async fn test_local_backend_is_created_and_initialised() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/baas.state.json");
        let config = BackendConfig {
            backend_type: "local".to_string(),
            attributes: HashMap::from([(
                "path".to_string(),
                Value::String(path.display().to_string()),
            )]),
        };

        let backend = create_backend(&config).await.unwrap();
        assert!(backend.read_state().await.unwrap().is_none());
        assert!(dir.path().join("state").is_dir());
    }
}
