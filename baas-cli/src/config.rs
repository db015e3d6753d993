//! Configuration file loading
//!
//! A configuration file is JSON:
//!
//! ```json
//! {
//!   "provider": { "endpoint": "https://backup.example.com/v2", "tenant_id": "tenant-a/" },
//!   "backend": { "type": "local", "path": "baas.state.json" },
//!   "resources": [
//!     { "type": "protection_group", "name": "daily", "attributes": { "name": "daily", ... } }
//!   ],
//!   "data": [
//!     { "type": "protection_group_runs", "name": "recent", "attributes": { ... } }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use baas_core::resource::{Resource, Value};
use baas_provider::ProviderConfig;
use baas_state::BackendConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    provider: serde_json::Map<String, serde_json::Value>,
    backend: Option<BackendBlock>,
    #[serde(default)]
    resources: Vec<ResourceBlock>,
    #[serde(default)]
    data: Vec<ResourceBlock>,
}

#[derive(Debug, Deserialize)]
struct BackendBlock {
    #[serde(rename = "type")]
    backend_type: String,
    #[serde(flatten)]
    settings: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceBlock {
    #[serde(rename = "type")]
    resource_type: String,
    name: String,
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
}

/// A loaded configuration file
#[derive(Debug)]
pub struct Configuration {
    /// Provider block; flags and environment take precedence over it
    pub provider: ProviderConfig,
    pub backend: BackendConfig,
    pub resources: Vec<Resource>,
    pub data_sources: Vec<Resource>,
}

impl Configuration {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_json::from_str(content)?;

        let provider = ProviderConfig::from_attributes(&to_values(&file.provider, "provider")?)?;

        let backend = match file.backend {
            Some(block) => BackendConfig {
                backend_type: block.backend_type,
                attributes: to_values(&block.settings, "backend")?,
            },
            None => BackendConfig::default(),
        };

        let resources = to_resources(file.resources, false)?;
        let data_sources = to_resources(file.data, true)?;

        let mut seen = HashSet::new();
        for resource in resources.iter().chain(&data_sources) {
            if !seen.insert(&resource.id) {
                bail!("{} is declared more than once", resource.id);
            }
        }

        Ok(Self {
            provider,
            backend,
            resources,
            data_sources,
        })
    }
}

fn to_resources(blocks: Vec<ResourceBlock>, read_only: bool) -> Result<Vec<Resource>> {
    blocks
        .into_iter()
        .map(|block| {
            let context = format!("{}.{}", block.resource_type, block.name);
            let attributes = to_values(&block.attributes, &context)?;
            Ok(Resource::new(block.resource_type, block.name)
                .with_attributes(attributes)
                .with_read_only(read_only))
        })
        .collect()
}

fn to_values(
    object: &serde_json::Map<String, serde_json::Value>,
    context: &str,
) -> Result<HashMap<String, Value>> {
    object
        .iter()
        .map(|(key, json)| {
            Value::from_json(json)
                .map(|value| (key.clone(), value))
                .ok_or_else(|| anyhow!("{}: '{}' must be a string, integer, bool, list or map", context, key))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::resource::ResourceId;

    const EXAMPLE: &str = r#"{
        "provider": { "endpoint": "https://backup.example.com/v2", "tenant_id": "tenant-a/" },
        "backend": { "type": "local", "path": "state/baas.state.json" },
        "resources": [
            {
                "type": "protection_group",
                "name": "daily",
                "attributes": {
                    "name": "daily",
                    "policy_id": "pol-1",
                    "environment": "kPhysical",
                    "start_time": { "hour": 2, "minute": 30 }
                }
            }
        ],
        "data": [
            { "type": "protection_group_runs", "name": "recent", "attributes": { "num_runs": 5 } }
        ]
    }"#;

    #[test]
    fn parses_all_blocks() {
        let config = Configuration::parse(EXAMPLE).unwrap();

        assert_eq!(config.provider.endpoint, "https://backup.example.com/v2");
        assert_eq!(config.provider.tenant_id.as_deref(), Some("tenant-a/"));
        assert_eq!(config.backend.get_string("path"), Some("state/baas.state.json"));

        let group = &config.resources[0];
        assert_eq!(group.id, ResourceId::new("protection_group", "daily"));
        assert!(!group.read_only);
        assert!(matches!(group.attributes["start_time"], Value::Map(_)));

        let runs = &config.data_sources[0];
        assert!(runs.read_only);
        assert_eq!(runs.attributes["num_runs"], Value::Int(5));
    }

    #[test]
    fn load_reports_the_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baas.json");
        std::fs::write(&path, "{ \"resources\": [ { \"type\": 1 } ] }").unwrap();

        let err = Configuration::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("baas.json"));

        std::fs::write(&path, EXAMPLE).unwrap();
        assert_eq!(Configuration::load(&path).unwrap().resources.len(), 1);
    }

    #[test]
    fn backend_defaults_to_local() {
        let config = Configuration::parse("{}").unwrap();
        assert_eq!(config.backend.backend_type, "local");
        assert!(config.resources.is_empty());
    }

    #[test]
    fn rejects_duplicate_names() {
        let content = r#"{
            "resources": [
                { "type": "protection_group", "name": "daily" },
                { "type": "protection_group", "name": "daily" }
            ]
        }"#;
        let err = Configuration::parse(content).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_null_attributes() {
        let content = r#"{
            "resources": [
                { "type": "protection_group", "name": "daily", "attributes": { "description": null } }
            ]
        }"#;
        let err = Configuration::parse(content).unwrap_err();
        assert!(err.to_string().contains("'description'"));
    }

    #[test]
    fn rejects_unknown_provider_setting() {
        let err = Configuration::parse(r#"{ "provider": { "region": "us-south" } }"#).unwrap_err();
        assert!(err.to_string().contains("region"));
    }
}
