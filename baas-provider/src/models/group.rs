//! Protection group: the configuration aggregate describing what to back up,
//! under which policy and with which environment-specific parameters.

use serde::{Deserialize, Serialize};

use super::common::{IndexingPolicy, KeyValuePair, PrePostScriptParams, Tenant, TimeOfDay};
use super::run::ProtectionGroupRun;

/// Workload environment a group protects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "kPhysical")]
    Physical,
    #[serde(rename = "kSQL")]
    Sql,
    #[serde(rename = "kOracle")]
    Oracle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "kLow")]
    Low,
    #[serde(rename = "kMedium")]
    Medium,
    #[serde(rename = "kHigh")]
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QosPolicy {
    #[serde(rename = "kBackupHDD")]
    BackupHdd,
    #[serde(rename = "kBackupSSD")]
    BackupSsd,
    #[serde(rename = "kTestAndDevHigh")]
    TestAndDevHigh,
    #[serde(rename = "kBackupAll")]
    BackupAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalProtectionType {
    #[serde(rename = "kFile")]
    File,
    #[serde(rename = "kVolume")]
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MssqlProtectionType {
    #[serde(rename = "kFile")]
    File,
    #[serde(rename = "kVolume")]
    Volume,
    #[serde(rename = "kNative")]
    Native,
}

/// Body of the create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupRequest {
    pub name: String,
    pub policy_id: String,
    pub environment: Environment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_domain_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_timestamp_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_policy: Option<AlertPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla: Option<Vec<SlaRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_policy: Option<QosPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_in_blackouts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_in_blackouts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_configs: Option<Vec<KeyValuePair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_params: Option<PhysicalParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mssql_params: Option<MssqlParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_params: Option<OracleParams>,
}

/// A protection group as reported by the backend
///
/// Enumerated settings are kept as plain strings here so a group configured
/// elsewhere with values this crate does not know still reads back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_domain_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_timestamp_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_policy: Option<AlertPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla: Option<Vec<SlaRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_in_blackouts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_in_blackouts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_configs: Option<Vec<KeyValuePair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_params: Option<PhysicalParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mssql_params: Option<MssqlParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_params: Option<OracleParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run: Option<ProtectionGroupRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Tenant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protect_once: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_entities: Option<Vec<EntityParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_entities: Option<Vec<EntityParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_protected_objects: Option<i64>,
}

/// Response of the group list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroups {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_groups: Option<Vec<ProtectionGroup>>,
}

/// An object the group refers to that is missing or no longer valid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_source_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_source_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPolicy {
    pub backup_run_status: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_targets: Option<Vec<AlertTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_object_level_failure_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_object_level_failure_alert_after_last_attempt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raise_object_level_failure_alert_after_each_attempt: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTarget {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_minutes: Option<i64>,
}

// =============================================================================
// Physical
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalParams {
    pub protection_type: PhysicalProtectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_protection_type_params: Option<PhysicalVolumeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_protection_type_params: Option<PhysicalFileParams>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalVolumeParams {
    pub objects: Vec<PhysicalVolumeObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<IndexingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_source_side_deduplication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiesce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_quiesce_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_backup_after_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_post_script: Option<PrePostScriptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_exclusion_source_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_vss_writers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobmr_backup: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalVolumeObject {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_guids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_system_backup: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalFileParams {
    pub objects: Vec<PhysicalFileObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<IndexingPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_source_side_deduplication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_brick_based_deduplication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_timeouts: Option<Vec<CancellationTimeout>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiesce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_quiesce_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cobmr_backup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_post_script: Option<PrePostScriptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedup_exclusion_source_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_exclude_paths: Option<Vec<String>>,
    #[serde(rename = "globalExcludeFS", skip_serializing_if = "Option::is_none")]
    pub global_exclude_fs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignorable_errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_parallel_runs: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalFileObject {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<Vec<FileBackupPath>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_path_level_skip_nested_volume_setting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_volume_types_to_skip: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_nas_symlink_target: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBackupPath {
    pub included_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_nested_volumes: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationTimeout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_mins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<String>,
}

// =============================================================================
// MSSQL
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlParams {
    pub protection_type: MssqlProtectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_protection_type_params: Option<MssqlFileParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_protection_type_params: Option<MssqlNativeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_protection_type_params: Option<MssqlVolumeParams>,
}

/// Settings every MSSQL protection type carries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlCommonParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aag_backup_preference_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_settings: Option<MssqlAdvancedSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_system_dbs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_filters: Option<Vec<Filter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_backups_copy_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_backup_num_streams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_backup_with_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_post_script: Option<PrePostScriptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_aag_preferences_from_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_db_backup_preference_type: Option<String>,
    #[serde(default)]
    pub objects: Vec<MssqlObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlAdvancedSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloned_db_backup_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_backup_if_not_online_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_db_backup_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_restoring_db_backup_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_db_backup_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_all_non_autoprotect_db_errors: Option<String>,
}

/// Name filter for databases to leave out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_regular_expression: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlObject {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlFileParams {
    #[serde(flatten)]
    pub common: MssqlCommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_host_params: Option<Vec<MssqlFileHostParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perform_source_side_deduplication: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlFileHostParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_source_side_deduplication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlNativeParams {
    #[serde(flatten)]
    pub common: MssqlCommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_streams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_clause: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlVolumeParams {
    #[serde(flatten)]
    pub common: MssqlCommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_host_params: Option<Vec<MssqlVolumeHostParams>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_db_volumes_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_backup_after_restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<IndexingPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MssqlVolumeHostParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_system_backup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_guids: Option<Vec<String>>,
}

// =============================================================================
// Oracle
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleParams {
    pub objects: Vec<OracleObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_mountpoints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_params: Option<VlanParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_post_script: Option<PrePostScriptParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_auto_kill_timeout_secs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incr_auto_kill_timeout_secs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_auto_kill_timeout_secs: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleObject {
    pub source_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_params: Option<Vec<OracleDbParams>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDbParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_channels: Option<Vec<OracleDbChannel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDbChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_log_retention_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_log_retention_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_unique_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_channel_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_node_list: Option<Vec<OracleDatabaseHost>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_host_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dg_primary_backup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rman_backup_type: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDatabaseHost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbt_host_params: Option<OracleSbtHostParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleSbtHostParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbt_library_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_fs_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_info_list: Option<Vec<OracleVlanInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleVlanInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_vlan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_wire_enum_names() {
        let request = ProtectionGroupRequest {
            name: "daily".to_string(),
            policy_id: "policy:1".to_string(),
            environment: Environment::Sql,
            priority: Some(Priority::High),
            storage_domain_id: None,
            description: None,
            start_time: None,
            end_time_usecs: None,
            last_modified_timestamp_usecs: None,
            alert_policy: None,
            sla: None,
            qos_policy: Some(QosPolicy::BackupSsd),
            abort_in_blackouts: None,
            pause_in_blackouts: None,
            is_paused: None,
            advanced_configs: None,
            physical_params: None,
            mssql_params: None,
            oracle_params: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "daily",
                "policyId": "policy:1",
                "environment": "kSQL",
                "priority": "kHigh",
                "qosPolicy": "kBackupSSD"
            })
        );
    }

    #[test]
    fn global_exclude_fs_keeps_irregular_wire_name() {
        let params: PhysicalFileParams = serde_json::from_value(json!({
            "objects": [{"id": 7}],
            "globalExcludeFS": ["nfs"]
        }))
        .unwrap();
        assert_eq!(params.global_exclude_fs, Some(vec!["nfs".to_string()]));
    }

    #[test]
    fn mssql_common_settings_are_inlined() {
        let params = MssqlNativeParams {
            common: MssqlCommonParams {
                backup_system_dbs: Some(false),
                objects: vec![MssqlObject {
                    id: 3,
                    name: None,
                    source_type: None,
                }],
                ..Default::default()
            },
            num_streams: Some(4),
            with_clause: None,
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"backupSystemDbs": false, "objects": [{"id": 3}], "numStreams": 4})
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "rman".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }

    #[test]
    fn response_tolerates_unknown_enum_strings() {
        let group: ProtectionGroup = serde_json::from_value(json!({
            "id": "4205:1:38",
            "environment": "kVMware",
            "qosPolicy": "kSomethingNew"
        }))
        .unwrap();
        assert_eq!(group.environment.as_deref(), Some("kVMware"));
    }
}
