//! Protection group run: one execution of a protection group
//!
//! Everything here is reported by the backend and read-only on our side.

use serde::{Deserialize, Serialize};

use super::common::{ClusterIdentifier, DataLockConstraints, Tenant};

/// Status of a run, an attempt or a copy target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Accepted,
    Running,
    Canceled,
    Canceling,
    Failed,
    Missed,
    Succeeded,
    SucceededWithWarning,
    OnHold,
    Finalizing,
    Skipped,
    Paused,
    Pausing,
    Resuming,
}

impl RunStatus {
    pub const ALL: &'static [&'static str] = &[
        "Accepted",
        "Running",
        "Canceled",
        "Canceling",
        "Failed",
        "Missed",
        "Succeeded",
        "SucceededWithWarning",
        "OnHold",
        "Finalizing",
        "Skipped",
        "Paused",
        "Pausing",
        "Resuming",
    ];
}

/// Status of a local snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotStatus {
    #[serde(rename = "kInProgress")]
    InProgress,
    #[serde(rename = "kSuccessful")]
    Successful,
    #[serde(rename = "kFailed")]
    Failed,
    #[serde(rename = "kWaitingForNextAttempt")]
    WaitingForNextAttempt,
    #[serde(rename = "kWarning")]
    Warning,
    #[serde(rename = "kCurrentAttemptPaused")]
    CurrentAttemptPaused,
    #[serde(rename = "kCurrentAttemptResuming")]
    CurrentAttemptResuming,
    #[serde(rename = "kCurrentAttemptPausing")]
    CurrentAttemptPausing,
    #[serde(rename = "kWaitingForOlderBackupRun")]
    WaitingForOlderBackupRun,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_group_instance_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_replication_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_cluster_identifier: Option<ClusterIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_protection_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_local_snapshots_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<ObjectRunResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_backup_info: Option<BackupRunSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_backup_info: Option<BackupRunSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_info: Option<ReplicationRunSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_info: Option<ArchivalRunSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_spin_info: Option<CloudSpinRunSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Tenant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cloud_archival_direct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_local_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub externally_triggered_backup_tag: Option<String>,
}

/// Response of the run list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionGroupRuns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<ProtectionGroupRun>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_runs: Option<i64>,
}

/// Per-object outcome of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRunResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_snapshot_info: Option<BackupRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_backup_info: Option<BackupRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_info: Option<ReplicationRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_info: Option<ArchivalRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_spin_info: Option<CloudSpinRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_legal_hold: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
}

// =============================================================================
// Local backup
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_info: Option<SnapshotInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_attempts: Option<Vec<BackupAttempt>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SnapshotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permit_grant_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_duration_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_creation_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BackupDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manually_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_constraints: Option<DataLockConstraints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupAttempt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admitted_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permit_grant_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_duration_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_creation_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<BackupDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDataStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_written: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_read: Option<i64>,
}

/// Run-level summary of the local backup phase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupRunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sla_violated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_snapshot_stats: Option<BackupDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_constraints: Option<DataLockConstraints>,
}

// =============================================================================
// Replication
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_target_results: Option<Vec<ReplicationTargetResult>>,
}

/// Run-level replication summary; same shape as the per-object one
pub type ReplicationRunSummary = ReplicationRun;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationTargetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_incarnation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_completed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ReplicationDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manually_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries_changed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_bound: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_constraints: Option<DataLockConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_object_replication: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationDataStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_bytes_transferred: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_bytes_transferred: Option<i64>,
}

// =============================================================================
// Archival
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_target_results: Option<Vec<ArchivalTargetResult>>,
}

pub type ArchivalRunSummary = ArchivalRun;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalTargetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archival_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_settings: Option<ArchivalTargetTierInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sla_violated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_incremental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_forever_incremental: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cad_archive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_app_objects_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ArchivalDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manually_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_constraints: Option<DataLockConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_legal_hold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worm_properties: Option<WormProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalTargetTierInfo {
    pub cloud_platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oracle_tiering: Option<OracleTiers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tier_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleTiers {
    pub tiers: Vec<OracleTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleTier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_after_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_after: Option<i64>,
    pub tier_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivalDataStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_read: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logical_bytes_transferred: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_bytes_transferred: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_logical_transfer_rate_bps: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_walk_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_file_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_file_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WormProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archive_worm_compliant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worm_non_compliance_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worm_expiry_time_usecs: Option<i64>,
}

// =============================================================================
// CloudSpin
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_spin_target_results: Option<Vec<CloudSpinTargetResult>>,
}

pub type CloudSpinRunSummary = CloudSpinRun;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinTargetResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CloudSpinDataStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_manually_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time_usecs: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudspin_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_lock_constraints: Option<DataLockConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_legal_hold: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSpinDataStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_bytes_transferred: Option<i64>,
}
