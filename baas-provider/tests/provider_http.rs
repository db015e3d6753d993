//! Provider operations against a mocked backup-and-recovery API

use std::collections::HashMap;

use baas_core::provider::Provider;
use baas_core::resource::{Resource, ResourceId, State, Value};
use baas_provider::{BackupRecoveryProvider, ProviderConfig};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TENANT: &str = "tenant-a/";
const GROUP_ID: &str = "4205:1:38";
const GROUPS: &str = "/v2/data-protect/protection-groups";

fn provider(server: &MockServer) -> BackupRecoveryProvider {
    let config = ProviderConfig {
        endpoint: format!("{}/v2", server.uri()),
        api_token: Some("test-token".to_string()),
        tenant_id: None,
    };
    BackupRecoveryProvider::new(&config).unwrap()
}

fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

fn strings(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| string(s)).collect())
}

fn resource(resource_type: &str, attributes: &[(&str, Value)]) -> Resource {
    let mut attrs: HashMap<String, Value> = attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    attrs.insert("x_ibm_tenant_id".to_string(), string(TENANT));
    Resource::new(resource_type, "test").with_attributes(attrs)
}

fn group_resource() -> Resource {
    resource(
        "protection_group",
        &[
            ("name", string("daily")),
            ("policy_id", string("pol-1")),
            ("environment", string("kPhysical")),
            ("priority", string("kHigh")),
        ],
    )
}

fn prior_state() -> State {
    State::existing(
        ResourceId::new("protection_group", "test"),
        HashMap::from([("x_ibm_tenant_id".to_string(), string(TENANT))]),
    )
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

mod protection_group {
    use super::*;

    #[tokio::test]
    async fn create_posts_request_and_flattens_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GROUPS))
            .and(header("X-IBM-Tenant-Id", TENANT))
            .and(bearer_token("test-token"))
            .and(body_partial_json(json!({
                "name": "daily",
                "policyId": "pol-1",
                "environment": "kPhysical",
                "priority": "kHigh"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": GROUP_ID,
                "name": "daily",
                "policyId": "pol-1",
                "environment": "kPhysical",
                "priority": "kHigh",
                "isActive": true,
                "lastRun": {
                    "id": "run-1",
                    "localBackupInfo": {"status": "Succeeded", "startTimeUsecs": 1700000000000000i64}
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let state = provider(&server).create(&group_resource()).await.unwrap();

        assert!(state.exists);
        assert_eq!(state.identifier.as_deref(), Some(GROUP_ID));
        assert_eq!(state.attributes["name"], string("daily"));
        assert_eq!(state.attributes["is_active"], Value::Bool(true));
        assert_eq!(state.attributes["x_ibm_tenant_id"], string(TENANT));
        assert_eq!(state.attributes["alert_policy"], Value::List(vec![]));

        let last_run = single(&state.attributes["last_run"]);
        assert_eq!(last_run["id"], string("run-1"));
        let backup = single(&last_run["local_backup_info"]);
        assert_eq!(backup["status"], string("Succeeded"));
        assert_eq!(backup["start_time_usecs"], Value::Int(1_700_000_000_000_000));
    }

    #[tokio::test]
    async fn create_rejects_invalid_configuration_without_calling_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let invalid = resource(
            "protection_group",
            &[
                ("name", string("daily")),
                ("policy_id", string("pol-1")),
                ("environment", string("kHyperV")),
            ],
        );
        let err = provider(&server).create(&invalid).await.unwrap_err();
        assert!(err.message.contains("kHyperV"), "{}", err.message);
    }

    #[tokio::test]
    async fn backend_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GROUPS))
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"errorCode":"KInternal"}"#),
            )
            .mount(&server)
            .await;

        let err = provider(&server).create(&group_resource()).await.unwrap_err();
        assert_eq!(
            err.message,
            "CreateProtectionGroup failed backend returned 500 Internal Server Error\n\
             500 Internal Server Error {\"errorCode\":\"KInternal\"}"
        );
        assert_eq!(err.resource_id, Some(ResourceId::new("protection_group", "test")));
    }

    #[tokio::test]
    async fn read_missing_group_clears_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let id = ResourceId::new("protection_group", "test");
        let state = provider(&server)
            .read(&id, GROUP_ID, &prior_state())
            .await
            .unwrap();
        assert!(!state.exists);
    }

    #[tokio::test]
    async fn read_uses_tenant_from_prior_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .and(header("X-IBM-Tenant-Id", TENANT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": GROUP_ID,
                "name": "daily",
                "isPaused": true
            })))
            .mount(&server)
            .await;

        let id = ResourceId::new("protection_group", "test");
        let state = provider(&server)
            .read(&id, GROUP_ID, &prior_state())
            .await
            .unwrap();
        assert_eq!(state.identifier.as_deref(), Some(GROUP_ID));
        assert_eq!(state.attributes["is_paused"], Value::Bool(true));
        assert_eq!(state.attributes["x_ibm_tenant_id"], string(TENANT));
    }

    #[tokio::test]
    async fn update_puts_to_group_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .and(body_partial_json(json!({"name": "daily"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": GROUP_ID,
                "name": "daily",
                "priority": "kHigh"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let id = ResourceId::new("protection_group", "test");
        let state = provider(&server)
            .update(&id, GROUP_ID, &prior_state(), &group_resource())
            .await
            .unwrap();
        assert_eq!(state.attributes["priority"], string("kHigh"));
    }

    #[tokio::test]
    async fn delete_then_check_destroyed() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = provider(&server);
        let id = ResourceId::new("protection_group", "test");
        provider.delete(&id, GROUP_ID, &prior_state()).await.unwrap();
        provider.check_destroyed(&id, GROUP_ID, TENANT).await.unwrap();
    }

    #[tokio::test]
    async fn check_destroyed_fails_while_group_exists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", GROUPS, GROUP_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": GROUP_ID})))
            .mount(&server)
            .await;

        let id = ResourceId::new("protection_group", "test");
        let err = provider(&server)
            .check_destroyed(&id, GROUP_ID, TENANT)
            .await
            .unwrap_err();
        assert!(err.message.contains("still exists"));
    }
}

mod run_request {
    use super::*;

    fn run_request() -> Resource {
        resource(
            "protection_group_run_request",
            &[
                ("group_id", string(GROUP_ID)),
                ("run_type", string("kRegular")),
            ],
        )
    }

    #[tokio::test]
    async fn create_posts_run_and_keeps_configuration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{}/{}/runs", GROUPS, GROUP_ID)))
            .and(body_partial_json(json!({"runType": "kRegular"})))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(json!({"protectionGroupId": GROUP_ID})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let request = run_request();
        let state = provider(&server).create(&request).await.unwrap();
        assert_eq!(state.identifier.as_deref(), Some(GROUP_ID));
        assert_eq!(state.attributes, request.attributes);
    }

    #[tokio::test]
    async fn read_update_and_delete_never_call_backend() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let provider = provider(&server);
        let request = run_request();
        let prior = State::existing(request.id.clone(), request.attributes.clone());

        let state = provider.read(&request.id, GROUP_ID, &prior).await.unwrap();
        assert_eq!(state.attributes, request.attributes);

        let err = provider
            .update(&request.id, GROUP_ID, &prior, &request)
            .await
            .unwrap_err();
        assert!(err.message.contains("cannot be updated"));

        provider.delete(&request.id, GROUP_ID, &prior).await.unwrap();
    }
}

mod run_update_request {
    use super::*;

    fn block(entries: &[(&str, Value)]) -> Value {
        Value::List(vec![Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )])
    }

    fn update_request() -> Resource {
        let params = block(&[
            ("run_id", string("4205:1:26")),
            (
                "local_snapshot_config",
                block(&[("days_to_keep", Value::Int(7)), ("enable_legal_hold", Value::Bool(true))]),
            ),
        ]);
        resource(
            "protection_group_run_update_request",
            &[
                ("group_id", string(GROUP_ID)),
                ("update_protection_group_run_params", params),
            ],
        )
    }

    #[tokio::test]
    async fn create_puts_run_params_and_records_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{}/{}/runs", GROUPS, GROUP_ID)))
            .and(header("X-IBM-Tenant-Id", TENANT))
            .and(body_partial_json(json!({
                "updateProtectionGroupRunParams": [{
                    "runId": "4205:1:26",
                    "localSnapshotConfig": {"daysToKeep": 7, "enableLegalHold": true}
                }]
            })))
            .respond_with(ResponseTemplate::new(207).set_body_json(json!({
                "successfulRunIds": ["4205:1:26"],
                "failedRuns": [{"runId": "4205:1:27", "errorMessage": "run not found"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = update_request();
        let state = provider(&server).create(&request).await.unwrap();
        assert_eq!(state.identifier.as_deref(), Some(GROUP_ID));
        assert_eq!(state.attributes["successful_run_ids"], strings(&["4205:1:26"]));
        let failed = single(&state.attributes["failed_runs"]);
        assert_eq!(failed["error_message"], string("run not found"));
        assert_eq!(
            state.attributes["update_protection_group_run_params"],
            request.attributes["update_protection_group_run_params"]
        );
    }

    #[tokio::test]
    async fn update_keeps_prior_state_without_calling_backend() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let provider = provider(&server);
        let request = update_request();
        let prior = State::existing(request.id.clone(), request.attributes.clone())
            .with_identifier(GROUP_ID);

        let state = provider
            .update(&request.id, GROUP_ID, &prior, &request)
            .await
            .unwrap();
        assert_eq!(state.attributes, prior.attributes);

        provider.delete(&request.id, GROUP_ID, &prior).await.unwrap();
    }

    #[tokio::test]
    async fn rejected_update_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad run id"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .create(&update_request())
            .await
            .unwrap_err();
        assert!(err.message.starts_with("UpdateProtectionGroupRun failed"), "{}", err.message);
    }
}

mod data_sources {
    use super::*;

    #[tokio::test]
    async fn runs_pass_filters_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}/runs", GROUPS, GROUP_ID)))
            .and(query_param("numRuns", "2"))
            .and(query_param("runTypes", "kRegular,kFull"))
            .and(header("X-IBM-Tenant-Id", TENANT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "runs": [{
                    "id": "run-1",
                    "protectionGroupName": "daily",
                    "localBackupInfo": {"status": "Succeeded"}
                }],
                "totalRuns": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let lookup = resource(
            "protection_group_runs",
            &[
                ("protection_group_id", string(GROUP_ID)),
                ("num_runs", Value::Int(2)),
                ("run_types", strings(&["kRegular", "kFull"])),
            ],
        )
        .with_read_only(true);

        let state = provider(&server).read_data_source(&lookup).await.unwrap();
        assert_eq!(state.attributes["total_runs"], Value::Int(1));
        assert_eq!(state.attributes["num_runs"], Value::Int(2));
        let run = single(&state.attributes["runs"]);
        assert_eq!(run["id"], string("run-1"));
        assert_eq!(run["protection_group_name"], string("daily"));
        assert!(state.identifier.is_some());
    }

    #[tokio::test]
    async fn single_run_is_identified_by_its_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}/runs/run-1", GROUPS, GROUP_ID)))
            .and(query_param("includeObjectDetails", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "run-1",
                "isReplicationRun": false
            })))
            .mount(&server)
            .await;

        let lookup = resource(
            "protection_group_run",
            &[
                ("protection_group_run_id", string(GROUP_ID)),
                ("run_id", string("run-1")),
                ("include_object_details", Value::Bool(true)),
            ],
        )
        .with_read_only(true);

        let state = provider(&server).read_data_source(&lookup).await.unwrap();
        assert_eq!(state.identifier.as_deref(), Some("run-1"));
        assert_eq!(state.attributes["is_replication_run"], Value::Bool(false));
        assert_eq!(state.attributes["local_backup_info"], Value::List(vec![]));
    }

    #[tokio::test]
    async fn unknown_run_status_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{}/{}/runs/run-1", GROUPS, GROUP_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "run-1",
                "localBackupInfo": {"status": "Exploded"}
            })))
            .mount(&server)
            .await;

        let lookup = resource(
            "protection_group_run",
            &[
                ("protection_group_run_id", string(GROUP_ID)),
                ("run_id", string("run-1")),
            ],
        )
        .with_read_only(true);

        let err = provider(&server).read_data_source(&lookup).await.unwrap_err();
        assert!(
            err.message
                .starts_with("GetProtectionGroupRun failed failed to decode response"),
            "{}",
            err.message
        );
        assert!(err.message.contains("Exploded"));
    }

    #[tokio::test]
    async fn empty_group_listing_flattens_to_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(GROUPS))
            .and(query_param("environments", "kPhysical,kSQL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let lookup = resource(
            "protection_groups",
            &[("environments", strings(&["kPhysical", "kSQL"]))],
        )
        .with_read_only(true);

        let state = provider(&server).read_data_source(&lookup).await.unwrap();
        assert_eq!(state.attributes["protection_groups"], Value::List(vec![]));
        assert_eq!(
            state.attributes["environments"],
            strings(&["kPhysical", "kSQL"])
        );
    }

    #[tokio::test]
    async fn resource_types_are_not_data_sources() {
        let server = MockServer::start().await;
        let err = provider(&server)
            .read_data_source(&group_resource())
            .await
            .unwrap_err();
        assert!(err.message.starts_with("Unknown resource type"));
    }
}
