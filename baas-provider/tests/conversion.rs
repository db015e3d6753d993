//! Conversion of the provider's own request and response types through their schemas

use std::collections::HashMap;

use baas_core::convert;
use baas_core::resource::Value;
use baas_core::schema::{AttributeSchema, AttributeType};
use baas_provider::models::{
    BackupRunSummary, CreateRunRequest, ProtectionGroup, ProtectionGroupRequest,
    ProtectionGroupRun, ProtectionGroupRuns, ProtectionGroups, RunStatus, UpdateRunsRequest,
};
use baas_provider::schemas::{group, run, run_request, run_update_request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, json};

/// Wire JSON with a value for every mapped attribute
///
/// With `inputs_only`, computed attributes are left out so the result is a
/// valid request body.
fn sample(attributes: &HashMap<String, AttributeSchema>, inputs_only: bool) -> serde_json::Value {
    let mut object = Map::new();
    for attr in attributes.values() {
        let Some(wire_name) = &attr.provider_name else {
            continue;
        };
        if inputs_only && !attr.mutability.accepts_input() {
            continue;
        }
        object.insert(wire_name.clone(), sample_value(&attr.attr_type, inputs_only));
    }
    serde_json::Value::Object(object)
}

fn sample_value(attr_type: &AttributeType, inputs_only: bool) -> serde_json::Value {
    match attr_type {
        AttributeType::String => json!("x"),
        AttributeType::Int => json!(1),
        AttributeType::Bool => json!(true),
        AttributeType::Enum(variants) => json!(variants[0]),
        AttributeType::List(inner) => json!([sample_value(inner, inputs_only)]),
        AttributeType::Block(block) => sample(&block.attributes, inputs_only),
        AttributeType::BlockList(block) => json!([sample(&block.attributes, inputs_only)]),
    }
}

/// Every schema attribute survives a trip through the model type
fn assert_model_keeps_schema<T: Serialize + DeserializeOwned>(
    attributes: &HashMap<String, AttributeSchema>,
    inputs_only: bool,
) {
    let wire = sample(attributes, inputs_only);
    let model: T = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&model).unwrap(), wire);
}

/// A request read back from state expands to the request it came from
fn assert_inverse<T>(attributes: &HashMap<String, AttributeSchema>)
where
    T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let wire = sample(attributes, true);
    let request: T = serde_json::from_value(wire.clone()).unwrap();
    let tree = convert::flatten_json(attributes, &wire, true).unwrap();
    let back: T = convert::expand(attributes, &tree).unwrap();
    assert_eq!(back, request);
}

fn single(value: &Value) -> &HashMap<String, Value> {
    match value {
        Value::List(items) if items.len() == 1 => match &items[0] {
            Value::Map(map) => map,
            other => panic!("expected a map, got {:?}", other),
        },
        other => panic!("expected a single block, got {:?}", other),
    }
}

mod inverse {
    use super::*;

    #[test]
    fn group_request_with_every_environment() {
        let schema = group::protection_group_schema();
        let request: ProtectionGroupRequest = serde_json::from_value(json!({
            "name": "sql-and-files",
            "policyId": "pol-1",
            "environment": "kSQL",
            "priority": "kHigh",
            "startTime": {"hour": 2, "minute": 30, "timeZone": "UTC"},
            "alertPolicy": {
                "backupRunStatus": ["kFailure"],
                "alertTargets": [{"emailAddress": "ops@example.com"}]
            },
            "physicalParams": {
                "protectionType": "kFile",
                "fileProtectionTypeParams": {
                    "objects": [{
                        "id": 3,
                        "filePaths": [{"includedPath": "/data", "excludedPaths": ["/data/tmp"]}]
                    }],
                    "globalExcludeFS": ["/proc"]
                }
            },
            "mssqlParams": {
                "protectionType": "kNative",
                "nativeProtectionTypeParams": {
                    "objects": [{"id": 11, "name": "sales"}],
                    "excludeFilters": [{"filterString": "tempdb", "isRegularExpression": false}],
                    "numStreams": 4,
                    "withClause": "WITH COMPRESSION"
                }
            },
            "oracleParams": {
                "objects": [{
                    "sourceId": 21,
                    "dbParams": [{
                        "databaseId": 22,
                        "dbChannels": [{
                            "databaseUuid": "uuid-1",
                            "credentials": {"username": "rman", "password": "secret"},
                            "databaseNodeList": [{"hostId": "node-1", "channelCount": 2}]
                        }]
                    }]
                }],
                "persistMountpoints": true
            }
        }))
        .unwrap();

        let tree = convert::flatten_state(&schema, &request).unwrap();
        let physical = single(&tree["physical_params"]);
        assert_eq!(physical["protection_type"], Value::String("kFile".to_string()));
        assert!(!tree.contains_key("is_active"));
        assert_eq!(tree["last_run"], Value::List(vec![]));

        let back: ProtectionGroupRequest = convert::expand(&schema.attributes, &tree).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn group_request_with_every_input() {
        assert_inverse::<ProtectionGroupRequest>(&group::protection_group_schema().attributes);
    }

    #[test]
    fn run_request_with_every_input() {
        assert_inverse::<CreateRunRequest>(
            &run_request::protection_group_run_request_schema().attributes,
        );
    }

    #[test]
    fn run_update_request_with_every_input() {
        assert_inverse::<UpdateRunsRequest>(
            &run_update_request::protection_group_run_update_request_schema().attributes,
        );
    }
}

mod run_state {
    use super::*;

    #[test]
    fn absent_run_phases_are_empty_lists() {
        let found = ProtectionGroupRun {
            id: Some("4205:1:26".to_string()),
            local_backup_info: Some(BackupRunSummary {
                run_type: Some("kRegular".to_string()),
                status: Some(RunStatus::Succeeded),
                ..Default::default()
            }),
            ..Default::default()
        };

        let state = convert::flatten_state(&run::protection_group_run_schema(), &found).unwrap();

        let local = single(&state["local_backup_info"]);
        assert_eq!(local["status"], Value::String("Succeeded".to_string()));
        assert_eq!(local["run_type"], Value::String("kRegular".to_string()));
        assert!(!local.contains_key("start_time_usecs"));
        for phase in [
            "original_backup_info",
            "replication_info",
            "archival_info",
            "cloud_spin_info",
        ] {
            assert_eq!(state[phase], Value::List(vec![]), "{}", phase);
        }
        assert!(!state.contains_key("externally_triggered_backup_tag"));
        assert!(!state.contains_key("run_id"));
    }
}

mod schema_model_parity {
    use super::*;

    #[test]
    fn group_request() {
        assert_model_keeps_schema::<ProtectionGroupRequest>(
            &group::protection_group_schema().attributes,
            true,
        );
    }

    #[test]
    fn group_response() {
        assert_model_keeps_schema::<ProtectionGroup>(
            &group::protection_group_schema().attributes,
            false,
        );
    }

    #[test]
    fn group_list() {
        assert_model_keeps_schema::<ProtectionGroups>(
            &group::protection_groups_schema().attributes,
            false,
        );
    }

    #[test]
    fn run_request() {
        assert_model_keeps_schema::<CreateRunRequest>(
            &run_request::protection_group_run_request_schema().attributes,
            true,
        );
    }

    #[test]
    fn run_update_request() {
        assert_model_keeps_schema::<UpdateRunsRequest>(
            &run_update_request::protection_group_run_update_request_schema().attributes,
            true,
        );
    }

    #[test]
    fn single_run() {
        assert_model_keeps_schema::<ProtectionGroupRun>(
            &run::protection_group_run_schema().attributes,
            false,
        );
    }

    #[test]
    fn run_list() {
        assert_model_keeps_schema::<ProtectionGroupRuns>(
            &run::protection_group_runs_schema().attributes,
            false,
        );
    }
}
