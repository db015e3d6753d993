//! On-demand run of a protection group, and updates to existing runs

use serde::{Deserialize, Serialize};

use super::common::DataLockMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunType {
    #[serde(rename = "kRegular")]
    Regular,
    #[serde(rename = "kFull")]
    Full,
    #[serde(rename = "kLog")]
    Log,
    #[serde(rename = "kSystem")]
    System,
    #[serde(rename = "kHydrateCDP")]
    HydrateCdp,
    #[serde(rename = "kStorageArraySnapshot")]
    StorageArraySnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchivalTargetType {
    Tape,
    Cloud,
    Nas,
}

/// Body of the create-run call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunRequest {
    pub run_type: RunType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<RunObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets_config: Option<RunTargetsConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRunResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_group_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunObject {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_params: Option<RunObjectPhysicalParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunObjectPhysicalParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_file_path: Option<String>,
}

/// Where the snapshot of this run is copied to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTargetsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_policy_defaults: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replications: Option<Vec<RunReplicationConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archivals: Option<Vec<RunArchivalConfig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReplicationConfig {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunArchivalConfig {
    pub id: i64,
    pub archival_target_type: ArchivalTargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention: Option<Retention>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_only_fully_successful: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retention {
    pub unit: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_config: Option<DataLockConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLockConfig {
    pub mode: String,
    pub unit: String,
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_worm_on_external_target: Option<bool>,
}

/// Body of the update-runs call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunsRequest {
    pub update_protection_group_run_params: Vec<UpdateRunParams>,
}

/// Changes to the snapshots of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunParams {
    pub run_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_snapshot_config: Option<UpdateLocalSnapshotConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_snapshot_config: Option<UpdateReplicationSnapshotConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_snapshot_config: Option<UpdateArchivalSnapshotConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocalSnapshotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock: Option<DataLockMode>,
    /// Added to the current expiry; negative values shorten it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_keep: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReplicationSnapshotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_snapshot_config: Option<Vec<RunReplicationConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing_snapshot_config: Option<Vec<UpdateExistingReplicationSnapshotConfig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExistingReplicationSnapshotConfig {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock: Option<DataLockMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_keep: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArchivalSnapshotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_snapshot_config: Option<Vec<RunArchivalConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing_snapshot_config: Option<Vec<UpdateExistingArchivalSnapshotConfig>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExistingArchivalSnapshotConfig {
    pub id: i64,
    pub archival_target_type: ArchivalTargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock: Option<DataLockMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_keep: Option<i64>,
}

/// Outcome of the update-runs call, per run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRunsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_run_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_runs: Option<Vec<FailedRunDetails>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedRunDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
