//! Provider connection settings

use std::collections::HashMap;

use baas_core::resource::Value;

/// Environment variables the operator CLI reads settings from
pub const ENDPOINT_ENV: &str = "BAAS_ENDPOINT";
pub const API_TOKEN_ENV: &str = "BAAS_API_TOKEN";
pub const TENANT_ID_ENV: &str = "BAAS_TENANT_ID";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint is not configured (set BAAS_ENDPOINT or 'endpoint' in the provider block)")]
    MissingEndpoint,

    #[error("provider setting '{name}' must be a string")]
    NotAString { name: String },

    #[error("unknown provider setting '{name}'")]
    UnknownSetting { name: String },
}

#[derive(Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub api_token: Option<String>,
    /// Tenant used for resources that do not name one
    pub tenant_id: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

impl ProviderConfig {
    /// Read settings from a `provider` block
    ///
    /// Settings left out stay unset so they can be filled from elsewhere
    /// with [`ProviderConfig::or`].
    pub fn from_attributes(attributes: &HashMap<String, Value>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (name, value) in attributes {
            let Value::String(s) = value else {
                return Err(ConfigError::NotAString { name: name.clone() });
            };
            match name.as_str() {
                "endpoint" => config.endpoint = s.clone(),
                "api_token" => config.api_token = Some(s.clone()),
                "tenant_id" => config.tenant_id = Some(s.clone()),
                _ => return Err(ConfigError::UnknownSetting { name: name.clone() }),
            }
        }
        Ok(config)
    }

    /// Fail unless an endpoint is set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(())
    }

    /// Fill unset fields from `other`
    pub fn or(self, other: ProviderConfig) -> Self {
        Self {
            endpoint: if self.endpoint.is_empty() {
                other.endpoint
            } else {
                self.endpoint
            },
            api_token: self.api_token.or(other.api_token),
            tenant_id: self.tenant_id.or(other.tenant_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_attributes_reads_provider_block() {
        let attrs: HashMap<String, Value> = [
            ("endpoint", "https://backup.example.com/v2"),
            ("api_token", "secret"),
            ("tenant_id", "tenant-a/"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

        let config = ProviderConfig::from_attributes(&attrs).unwrap();
        assert_eq!(config.endpoint, "https://backup.example.com/v2");
        assert_eq!(config.tenant_id.as_deref(), Some("tenant-a/"));
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn endpoint_is_required_after_merge() {
        let attrs = HashMap::from([("api_token".to_string(), Value::String("t".to_string()))]);
        let config = ProviderConfig::from_attributes(&attrs).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::MissingEndpoint)));
    }

    #[test]
    fn from_attributes_rejects_unknown_setting() {
        let attrs = HashMap::from([
            ("endpoint".to_string(), Value::String("https://x".to_string())),
            ("region".to_string(), Value::String("us-south".to_string())),
        ]);
        assert!(matches!(
            ProviderConfig::from_attributes(&attrs),
            Err(ConfigError::UnknownSetting { name }) if name == "region"
        ));
    }

    #[test]
    fn or_prefers_explicit_values() {
        let file = ProviderConfig {
            endpoint: String::new(),
            api_token: None,
            tenant_id: Some("file".to_string()),
        };
        let env = ProviderConfig {
            endpoint: "https://env".to_string(),
            api_token: Some("env-token".to_string()),
            tenant_id: Some("env".to_string()),
        };
        let merged = file.or(env);
        assert_eq!(merged.endpoint, "https://env");
        assert_eq!(merged.api_token.as_deref(), Some("env-token"));
        assert_eq!(merged.tenant_id.as_deref(), Some("file"));
    }
}
