//! State file structures for persisting managed resources

use std::collections::HashMap;

use baas_core::resource::{ResourceId, State, Value};
use serde::{Deserialize, Serialize};

/// The main state file structure that persists to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFile {
    /// State file format version
    pub version: u32,
    /// Monotonically increasing number for each state modification
    pub serial: u64,
    /// Unique identifier for this state lineage (prevents accidental overwrites)
    pub lineage: String,
    /// Version of baas that last modified this state
    pub baas_version: String,
    /// All managed resources and their current state
    pub resources: Vec<ResourceState>,
}

impl StateFile {
    /// Current state file format version
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self::with_lineage(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_lineage(lineage: String) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            serial: 0,
            lineage,
            baas_version: env!("CARGO_PKG_VERSION").to_string(),
            resources: Vec::new(),
        }
    }

    /// Increment serial and stamp the running version before a write
    pub fn increment_serial(&mut self) {
        self.serial += 1;
        self.baas_version = env!("CARGO_PKG_VERSION").to_string();
    }

    pub fn find_resource(&self, id: &ResourceId) -> Option<&ResourceState> {
        self.resources.iter().find(|r| r.matches(id))
    }

    /// Add or replace a resource in the state
    pub fn upsert_resource(&mut self, resource: ResourceState) {
        match self
            .resources
            .iter_mut()
            .find(|r| r.resource_type == resource.resource_type && r.name == resource.name)
        {
            Some(existing) => *existing = resource,
            None => self.resources.push(resource),
        }
    }

    pub fn remove_resource(&mut self, id: &ResourceId) -> Option<ResourceState> {
        let pos = self.resources.iter().position(|r| r.matches(id))?;
        Some(self.resources.remove(pos))
    }
}

impl Default for StateFile {
    fn default() -> Self {
        Self::new()
    }
}

/// State of a single managed resource or data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    /// Resource type (e.g., "protection_group")
    pub resource_type: String,
    /// Resource name from the configuration file
    pub name: String,
    /// Provider name (e.g., "backup_recovery")
    pub provider: String,
    /// Backend-assigned ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// All attributes of the resource as JSON values
    pub attributes: HashMap<String, serde_json::Value>,
    /// Read from a data source rather than managed
    #[serde(default)]
    pub data_source: bool,
}

impl ResourceState {
    pub fn new(
        resource_type: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            provider: provider.into(),
            identifier: None,
            attributes: HashMap::new(),
            data_source: false,
        }
    }

    /// Capture a provider-returned state
    pub fn from_state(state: &State, provider: impl Into<String>) -> Self {
        Self {
            resource_type: state.id.resource_type.clone(),
            name: state.id.name.clone(),
            provider: provider.into(),
            identifier: state.identifier.clone(),
            attributes: state
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
            data_source: false,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn with_data_source(mut self, data_source: bool) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn id(&self) -> ResourceId {
        ResourceId::new(&self.resource_type, &self.name)
    }

    fn matches(&self, id: &ResourceId) -> bool {
        self.resource_type == id.resource_type && self.name == id.name
    }

    /// Rebuild the provider-facing state
    ///
    /// JSON nulls have no value-tree form and are dropped.
    pub fn to_state(&self) -> State {
        let attributes: HashMap<String, Value> = self
            .attributes
            .iter()
            .filter_map(|(k, v)| Value::from_json(v).map(|v| (k.clone(), v)))
            .collect();
        let state = State::existing(self.id(), attributes);
        match &self.identifier {
            Some(identifier) => state.with_identifier(identifier.clone()),
            None => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_id(name: &str) -> ResourceId {
        ResourceId::new("protection_group", name)
    }

    #[test]
    fn test_state_file_new() {
        let state = StateFile::new();
        assert_eq!(state.version, StateFile::CURRENT_VERSION);
        assert_eq!(state.serial, 0);
        assert!(!state.lineage.is_empty());
        assert!(state.resources.is_empty());
    }

    #[test]
    fn test_state_file_increment_serial() {
        let mut state = StateFile::new();
        state.increment_serial();
        state.increment_serial();
        assert_eq!(state.serial, 2);
    }

    #[test]
    fn test_state_file_upsert_resource() {
        let mut state = StateFile::new();

        state.upsert_resource(
            ResourceState::new("protection_group", "daily", "backup_recovery")
                .with_attribute("priority", serde_json::json!("kLow")),
        );
        state.upsert_resource(
            ResourceState::new("protection_group", "daily", "backup_recovery")
                .with_attribute("priority", serde_json::json!("kHigh")),
        );

        assert_eq!(state.resources.len(), 1);
        assert_eq!(
            state.find_resource(&group_id("daily")).unwrap().attributes["priority"],
            serde_json::json!("kHigh")
        );
    }

    #[test]
    fn test_state_file_remove_resource() {
        let mut state = StateFile::new();
        state.upsert_resource(ResourceState::new("protection_group", "daily", "backup_recovery"));

        assert!(state.remove_resource(&group_id("daily")).is_some());
        assert!(state.resources.is_empty());
        assert!(state.remove_resource(&group_id("weekly")).is_none());
    }

    #[test]
    fn test_state_round_trips_through_resource_state() {
        let state = State::existing(
            group_id("daily"),
            HashMap::from([
                ("name".to_string(), Value::String("daily".to_string())),
                ("storage_domain_id".to_string(), Value::Int(5)),
                (
                    "start_time".to_string(),
                    Value::List(vec![Value::Map(HashMap::from([(
                        "hour".to_string(),
                        Value::Int(0),
                    )]))]),
                ),
            ]),
        )
        .with_identifier("4205:1:38");

        let saved = ResourceState::from_state(&state, "backup_recovery");
        assert_eq!(saved.identifier.as_deref(), Some("4205:1:38"));
        assert_eq!(saved.attributes["start_time"], serde_json::json!([{"hour": 0}]));
        assert_eq!(saved.to_state(), state);
    }

    #[test]
    fn test_state_file_serialization() {
        let mut state = StateFile::new();
        state.upsert_resource(
            ResourceState::new("protection_groups", "all", "backup_recovery")
                .with_data_source(true)
                .with_attribute("protection_groups", serde_json::json!([])),
        );

        let json = serde_json::to_string_pretty(&state).unwrap();
        assert!(json.contains("\"baas_version\""));
        assert!(!json.contains("\"identifier\""));

        let deserialized: StateFile = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.lineage, state.lineage);
        assert_eq!(deserialized.resources, state.resources);
    }
}
