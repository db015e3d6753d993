//! Backup & Recovery Provider implementation
//!
//! Each operation makes exactly one backend call: validate the configuration
//! against the schema, expand it into a typed request, call the API, and
//! flatten the typed response back into state.

use std::collections::HashMap;

use baas_core::convert::{self, ConvertError};
use baas_core::provider::{ProviderError, ProviderResult};
use baas_core::resource::{Resource, ResourceId, State, Value};
use baas_core::schema::ResourceSchema;

use crate::client::{ApiError, BackupRecoveryClient};
use crate::config::ProviderConfig;
use crate::models::{
    CreateRunRequest, CreateRunResponse, ProtectionGroup, ProtectionGroupRequest,
    ProtectionGroupRun, ProtectionGroupRuns, ProtectionGroups, UpdateRunsRequest,
    UpdateRunsResponse,
};
use crate::schemas::{group, run, run_request, run_update_request};

const TENANT_ID: &str = "x_ibm_tenant_id";
const GROUPS_PATH: [&str; 2] = ["data-protect", "protection-groups"];

/// Backup & Recovery Provider
pub struct BackupRecoveryProvider {
    client: BackupRecoveryClient,
}

impl BackupRecoveryProvider {
    pub fn new(config: &ProviderConfig) -> ProviderResult<Self> {
        config
            .validate()
            .map_err(|e| ProviderError::new(e.to_string()))?;
        let client = BackupRecoveryClient::new(&config.endpoint, config.api_token.clone())
            .map_err(|e| ProviderError::new(format!("Failed to create client: {}", e)).with_cause(e))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: BackupRecoveryClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // Protection Group
    // =========================================================================

    pub async fn create_protection_group(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = group::protection_group_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;

        let request: ProtectionGroupRequest =
            convert::expand(&schema.attributes, &resource.attributes)
                .map_err(|e| convert_error(e, id))?;

        let created: ProtectionGroup = self
            .client
            .post(&GROUPS_PATH[..], &tenant, &request)
            .await
            .map_err(|e| api_error("CreateProtectionGroup", e, id))?;

        group_state(&schema, id, &created, &tenant)
    }

    pub async fn read_protection_group(
        &self,
        id: &ResourceId,
        identifier: &str,
        prior: &State,
    ) -> ProviderResult<State> {
        let schema = group::protection_group_schema();
        let tenant = tenant_of(&prior.attributes, id)?;

        let result: Result<ProtectionGroup, ApiError> = self
            .client
            .get(&group_path(identifier), &tenant, &[])
            .await;

        match result {
            Ok(found) => group_state(&schema, id, &found, &tenant)
                .map(|state| state.with_identifier(identifier)),
            Err(e) if e.is_not_found() => {
                log::debug!("{} no longer exists, clearing state", id);
                Ok(State::not_found(id.clone()))
            }
            Err(e) => Err(api_error("GetProtectionGroupById", e, id)),
        }
    }

    pub async fn update_protection_group(
        &self,
        id: &ResourceId,
        identifier: &str,
        to: &Resource,
    ) -> ProviderResult<State> {
        let schema = group::protection_group_schema();
        validate(&schema, &to.attributes, id)?;
        let tenant = tenant_of(&to.attributes, id)?;

        let request: ProtectionGroupRequest = convert::expand(&schema.attributes, &to.attributes)
            .map_err(|e| convert_error(e, id))?;

        let updated: ProtectionGroup = self
            .client
            .put(&group_path(identifier), &tenant, &request)
            .await
            .map_err(|e| api_error("UpdateProtectionGroup", e, id))?;

        group_state(&schema, id, &updated, &tenant).map(|state| state.with_identifier(identifier))
    }

    pub async fn delete_protection_group(
        &self,
        id: &ResourceId,
        identifier: &str,
        prior: &State,
    ) -> ProviderResult<()> {
        let tenant = tenant_of(&prior.attributes, id)?;
        self.client
            .delete(&group_path(identifier), &tenant)
            .await
            .map_err(|e| api_error("DeleteProtectionGroup", e, id))
    }

    /// Confirm a deleted protection group is gone
    ///
    /// A 404 is success; finding the group is an error.
    pub async fn check_destroyed(
        &self,
        id: &ResourceId,
        identifier: &str,
        tenant_id: &str,
    ) -> ProviderResult<()> {
        let result: Result<ProtectionGroup, ApiError> = self
            .client
            .get(&group_path(identifier), tenant_id, &[])
            .await;

        match result {
            Ok(_) => Err(
                ProviderError::new(format!("Protection group {} still exists", identifier))
                    .for_resource(id.clone()),
            ),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(api_error("GetProtectionGroupById", e, id)),
        }
    }

    // =========================================================================
    // Protection Group Run Request
    // =========================================================================

    pub async fn create_run_request(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = run_request::protection_group_run_request_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;
        let group_id = required_string(&resource.attributes, "group_id", id)?;

        let request: CreateRunRequest = convert::expand(&schema.attributes, &resource.attributes)
            .map_err(|e| convert_error(e, id))?;

        let mut segments = group_path(&group_id);
        segments.push("runs".to_string());
        let response: CreateRunResponse = self
            .client
            .post(&segments, &tenant, &request)
            .await
            .map_err(|e| api_error("CreateProtectionGroupRun", e, id))?;

        let identifier = response.protection_group_id.unwrap_or(group_id);
        log::info!("Triggered {} run for {}", id, identifier);
        Ok(State::existing(id.clone(), resource.attributes.clone()).with_identifier(identifier))
    }

    /// Apply snapshot changes to existing runs of a group
    ///
    /// Runs the backend rejects are reported in `failed_runs` instead of
    /// failing the whole request.
    pub async fn update_protection_group_runs(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = run_update_request::protection_group_run_update_request_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;
        let group_id = required_string(&resource.attributes, "group_id", id)?;

        let request: UpdateRunsRequest = convert::expand(&schema.attributes, &resource.attributes)
            .map_err(|e| convert_error(e, id))?;

        let mut segments = group_path(&group_id);
        segments.push("runs".to_string());
        let response: UpdateRunsResponse = self
            .client
            .put(&segments, &tenant, &request)
            .await
            .map_err(|e| api_error("UpdateProtectionGroupRun", e, id))?;

        for failed in response.failed_runs.iter().flatten() {
            log::warn!(
                "{}: run {} was not updated: {}",
                id,
                failed.run_id.as_deref().unwrap_or("<unknown>"),
                failed.error_message.as_deref().unwrap_or("no reason given")
            );
        }

        response_state(&schema, resource, &response).map(|state| state.with_identifier(group_id))
    }

    // =========================================================================
    // Data Sources
    // =========================================================================

    pub async fn read_protection_group_run(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = run::protection_group_run_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;
        let group_id = required_string(&resource.attributes, "protection_group_run_id", id)?;
        let run_id = required_string(&resource.attributes, "run_id", id)?;

        let mut segments = group_path(&group_id);
        segments.extend(["runs".to_string(), run_id.clone()]);
        let query = query_params(
            &schema,
            &resource.attributes,
            &[TENANT_ID, "protection_group_run_id", "run_id"],
        );

        let found: ProtectionGroupRun = self
            .client
            .get(&segments, &tenant, &query)
            .await
            .map_err(|e| api_error("GetProtectionGroupRun", e, id))?;

        let identifier = found.id.clone().unwrap_or(run_id);
        response_state(&schema, resource, &found).map(|state| state.with_identifier(identifier))
    }

    pub async fn read_protection_group_runs(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = run::protection_group_runs_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;
        let group_id = required_string(&resource.attributes, "protection_group_id", id)?;

        let mut segments = group_path(&group_id);
        segments.push("runs".to_string());
        let query = query_params(
            &schema,
            &resource.attributes,
            &[TENANT_ID, "protection_group_id"],
        );

        let found: ProtectionGroupRuns = self
            .client
            .get(&segments, &tenant, &query)
            .await
            .map_err(|e| api_error("GetProtectionGroupRuns", e, id))?;

        response_state(&schema, resource, &found).map(|state| state.with_identifier(timestamp_id()))
    }

    pub async fn read_protection_groups(&self, resource: &Resource) -> ProviderResult<State> {
        let id = &resource.id;
        let schema = group::protection_groups_schema();
        validate(&schema, &resource.attributes, id)?;
        let tenant = tenant_of(&resource.attributes, id)?;
        let query = query_params(&schema, &resource.attributes, &[TENANT_ID]);

        let found: ProtectionGroups = self
            .client
            .get(&GROUPS_PATH[..], &tenant, &query)
            .await
            .map_err(|e| api_error("GetProtectionGroups", e, id))?;

        response_state(&schema, resource, &found).map(|state| state.with_identifier(timestamp_id()))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn group_path(identifier: &str) -> Vec<String> {
    GROUPS_PATH
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(identifier.to_string()))
        .collect()
}

fn validate(
    schema: &ResourceSchema,
    attributes: &HashMap<String, Value>,
    id: &ResourceId,
) -> ProviderResult<()> {
    schema.validate(attributes).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        ProviderError::new(format!("Invalid configuration: {}", messages.join("; ")))
            .for_resource(id.clone())
    })
}

fn required_string(
    attributes: &HashMap<String, Value>,
    key: &str,
    id: &ResourceId,
) -> ProviderResult<String> {
    attributes
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::new(format!("Missing required attribute '{}'", key))
                .for_resource(id.clone())
        })
}

fn tenant_of(attributes: &HashMap<String, Value>, id: &ResourceId) -> ProviderResult<String> {
    required_string(attributes, TENANT_ID, id)
}

/// Query string for every supplied request input not consumed elsewhere
///
/// Keys are the lowerCamelCase of the attribute name; lists are joined
/// with commas.
fn query_params(
    schema: &ResourceSchema,
    attributes: &HashMap<String, Value>,
    skip: &[&str],
) -> Vec<(String, String)> {
    use heck::ToLowerCamelCase;

    let mut params: Vec<(String, String)> = attributes
        .iter()
        .filter(|(name, _)| !skip.contains(&name.as_str()))
        .filter(|(name, _)| {
            schema
                .attributes
                .get(name.as_str())
                .is_some_and(|attr| attr.provider_name.is_none())
        })
        .filter_map(|(name, value)| {
            query_value(value).map(|v| (name.to_lower_camel_case(), v))
        })
        .collect();
    params.sort();
    params
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::List(items) => {
            let parts: Vec<String> = items.iter().filter_map(query_value).collect();
            Some(parts.join(","))
        }
        Value::Map(_) => None,
    }
}

fn group_state(
    schema: &ResourceSchema,
    id: &ResourceId,
    found: &ProtectionGroup,
    tenant: &str,
) -> ProviderResult<State> {
    let mut attributes = convert::flatten_state(schema, found).map_err(|e| convert_error(e, id))?;
    attributes.insert(TENANT_ID.to_string(), Value::String(tenant.to_string()));

    let state = State::existing(id.clone(), attributes);
    Ok(match &found.id {
        Some(identifier) => state.with_identifier(identifier.clone()),
        None => state,
    })
}

/// Flatten a response and echo back the configuration it was requested with
fn response_state<T: serde::Serialize>(
    schema: &ResourceSchema,
    resource: &Resource,
    found: &T,
) -> ProviderResult<State> {
    let mut attributes =
        convert::flatten_state(schema, found).map_err(|e| convert_error(e, &resource.id))?;
    for (name, value) in &resource.attributes {
        attributes.insert(name.clone(), value.clone());
    }
    Ok(State::existing(resource.id.clone(), attributes))
}

fn timestamp_id() -> String {
    chrono::Utc::now().to_rfc3339()
}

fn api_error(operation: &str, err: ApiError, id: &ResourceId) -> ProviderError {
    let message = match err.response() {
        Some(response) => format!("{} failed {}\n{}", operation, err, response),
        None => format!("{} failed {}", operation, err),
    };
    log::debug!("{}", message);
    ProviderError::new(message)
        .for_resource(id.clone())
        .with_cause(err)
}

fn convert_error(err: ConvertError, id: &ResourceId) -> ProviderError {
    ProviderError::new(err.to_string())
        .for_resource(id.clone())
        .with_cause(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Value {
        Value::List(items.iter().map(|s| Value::String(s.to_string())).collect())
    }

    #[test]
    fn query_params_use_camel_case_and_skip_path_inputs() {
        let schema = run::protection_group_runs_schema();
        let attributes = HashMap::from([
            (TENANT_ID.to_string(), Value::String("tenant/".to_string())),
            (
                "protection_group_id".to_string(),
                Value::String("4205:1:38".to_string()),
            ),
            ("num_runs".to_string(), Value::Int(5)),
            ("include_tenants".to_string(), Value::Bool(false)),
            ("run_types".to_string(), strings(&["kRegular", "kFull"])),
        ]);

        let params = query_params(&schema, &attributes, &[TENANT_ID, "protection_group_id"]);
        assert_eq!(
            params,
            vec![
                ("includeTenants".to_string(), "false".to_string()),
                ("numRuns".to_string(), "5".to_string()),
                ("runTypes".to_string(), "kRegular,kFull".to_string()),
            ]
        );
    }

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        let id = ResourceId::new("protection_group_run", "latest");
        let provider_err = api_error("GetProtectionGroupRun", err, &id);
        assert_eq!(
            provider_err.message,
            "GetProtectionGroupRun failed backend returned 500 Internal Server Error\n500 Internal Server Error boom"
        );
        assert_eq!(provider_err.resource_id, Some(id));
    }

    #[test]
    fn group_path_appends_identifier() {
        assert_eq!(
            group_path("4205:1:38"),
            vec!["data-protect", "protection-groups", "4205:1:38"]
        );
    }
}
