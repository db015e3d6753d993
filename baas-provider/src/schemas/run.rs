//! Protection group run schemas
//!
//! The run block is declared once and reused: as the top level of the
//! `protection_group_run` data source, as the element of
//! `protection_group_runs`, and as `last_run` of a protection group.
//! Every attribute in it is reported by the backend, so callers turn the
//! block computed at the point of use.

use baas_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema};

use super::common::{
    RUN_STATUSES, SNAPSHOT_STATUSES, cluster_identifier, data_lock_constraints, strings, tenant,
    tenant_id_attribute,
};

pub const PROTECTION_GROUP_RUN: &str = "protection_group_run";
pub const PROTECTION_GROUP_RUNS: &str = "protection_group_runs";

fn status() -> AttributeType {
    AttributeType::enumeration(RUN_STATUSES)
}

fn int(name: &str) -> AttributeSchema {
    AttributeSchema::field(name, AttributeType::Int)
}

fn string(name: &str) -> AttributeSchema {
    AttributeSchema::field(name, AttributeType::String)
}

fn boolean(name: &str) -> AttributeSchema {
    AttributeSchema::field(name, AttributeType::Bool)
}

fn block(name: &str, schema: BlockSchema) -> AttributeSchema {
    AttributeSchema::field(name, AttributeType::block(schema))
}

fn block_list(name: &str, schema: BlockSchema) -> AttributeSchema {
    AttributeSchema::field(name, AttributeType::block_list(schema))
}

/// Fields of a protection group run, without its id
pub fn run_fields() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            int("protection_group_instance_id")
                .with_description("Protection group instance id."),
        )
        .attribute(
            string("protection_group_id").with_description("Protection group this run belongs to."),
        )
        .attribute(
            boolean("is_replication_run")
                .with_description("Specifies if this protection run is a replication run."),
        )
        .attribute(
            block("origin_cluster_identifier", cluster_identifier())
                .with_description("Specifies the information about a cluster."),
        )
        .attribute(string("origin_protection_group_id").with_description(
            "Protection group on the primary cluster if this is a replication run.",
        ))
        .attribute(
            string("protection_group_name")
                .with_description("Name of the Protection Group to which this run belongs."),
        )
        .attribute(
            boolean("is_local_snapshots_deleted")
                .with_description("Specifies if snapshots for this run has been deleted."),
        )
        .attribute(
            block_list("objects", object_run_result())
                .with_description("Snapshot, replication and archival results per object."),
        )
        .attribute(
            block("local_backup_info", backup_run_summary())
                .with_description("Specifies summary information about local snapshot run across all objects."),
        )
        .attribute(
            block("original_backup_info", backup_run_summary())
                .with_description("Specifies summary information about local snapshot run across all objects."),
        )
        .attribute(
            block("replication_info", replication_run())
                .with_description("Specifies summary information about replication run."),
        )
        .attribute(
            block("archival_info", archival_run())
                .with_description("Specifies summary information about archival run."),
        )
        .attribute(
            block("cloud_spin_info", cloud_spin_run())
                .with_description("Specifies summary information about cloud spin run."),
        )
        .attribute(
            boolean("on_legal_hold")
                .with_description("Specifies if the Protection Run is on legal hold."),
        )
        .attribute(
            block_list("permissions", tenant())
                .with_description("Specifies the list of tenants that have permissions for this protection group run."),
        )
        .attribute(
            boolean("is_cloud_archival_direct")
                .with_description("Specifies whether the run is a CAD run if cloud archive direct feature is enabled. If this field is true, the primary backup copy will only be available at the given archived location."),
        )
        .attribute(
            boolean("has_local_snapshot")
                .with_description("Specifies whether the run has a local snapshot. For cloud retrieved runs there may not be local snapshots."),
        )
        .attribute(
            string("environment")
                .with_description("Specifies the environment of the Protection Group."),
        )
        .attribute(
            string("externally_triggered_backup_tag")
                .with_description("The tag of externally triggered backup job."),
        )
}

/// Fields of a protection group run including its id
pub fn run_with_id() -> BlockSchema {
    run_fields().attribute(string("id").with_description("Id of the run."))
}

fn object_run_result() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            block("object", object_summary())
                .with_description("Specifies the Object Summary."),
        )
        .attribute(
            block("local_snapshot_info", backup_run())
                .with_description("Specifies information about backup run for an object."),
        )
        .attribute(
            block("original_backup_info", backup_run())
                .with_description("Specifies information about backup run for an object."),
        )
        .attribute(
            block("replication_info", replication_run())
                .with_description("Specifies information about replication run for an object."),
        )
        .attribute(
            block("archival_info", archival_run())
                .with_description("Specifies information about archival run for an object."),
        )
        .attribute(
            block("cloud_spin_info", cloud_spin_run())
                .with_description("Specifies information about Cloud Spin run for an object."),
        )
        .attribute(
            boolean("on_legal_hold")
                .with_description("Specifies if object's snapshot is on legal hold."),
        )
}

fn object_summary() -> BlockSchema {
    BlockSchema::new()
        .attribute(int("id").with_description("Specifies object id."))
        .attribute(string("name").with_description("Specifies the name of the object."))
        .attribute(
            int("source_id")
                .with_description("Specifies registered source id to which object belongs."),
        )
        .attribute(
            string("source_name")
                .with_description("Specifies registered source name to which object belongs."),
        )
        .attribute(
            string("environment")
                .with_description("Specifies the environment of the object."),
        )
        .attribute(
            string("object_hash")
                .with_description("Specifies the hash identifier of the object."),
        )
        .attribute(string("object_type").with_description("Specifies the type of the object."))
        .attribute(
            int("logical_size_bytes")
                .with_description("Specifies the logical size of object in bytes."),
        )
        .attribute(
            string("uuid")
                .with_description("Specifies the uuid which is a unique identifier of the object."),
        )
        .attribute(
            string("global_id")
                .with_description("Specifies the global id which is a unique identifier of the object."),
        )
        .attribute(
            string("protection_type")
                .with_description("Specifies the protection type of the object if any."),
        )
        .attribute(
            string("os_type")
                .with_description("Specifies the operating system type of the object."),
        )
}

fn backup_run() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            block("snapshot_info", snapshot_info())
                .with_description("Snapshot info for an object."),
        )
        .attribute(
            block_list("failed_attempts", backup_attempt())
                .with_description("Failed backup attempts for an object."),
        )
}

fn attempt_times(block: BlockSchema) -> BlockSchema {
    block
        .attribute(
            int("start_time_usecs")
                .with_description("Specifies the start time of attempt in Unix epoch Timestamp(in microseconds) for an object."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time of attempt in Unix epoch Timestamp(in microseconds) for an object."),
        )
        .attribute(
            int("admitted_time_usecs")
                .with_description("Specifies the time at which the backup task was admitted to run in Unix epoch Timestamp(in microseconds) for an object."),
        )
        .attribute(
            int("permit_grant_time_usecs")
                .with_description("Specifies the time when gatekeeper permit is granted to the backup task. If the backup task is rescheduled due to errors, the field is updated to the time when permit is granted again."),
        )
        .attribute(
            int("queue_duration_usecs")
                .with_description("Specifies the duration between the startTime and when gatekeeper permit is granted to the backup task. If the backup task is rescheduled due to errors, the field is updated considering the time when permit is granted again. Queue duration = PermitGrantTimeUsecs - StartTimeUsecs."),
        )
        .attribute(
            int("snapshot_creation_time_usecs")
                .with_description("Specifies the time at which the source snapshot was taken in Unix epoch Timestamp(in microseconds) for an object."),
        )
}

fn snapshot_info() -> BlockSchema {
    attempt_times(BlockSchema::new())
        .attribute(
            string("snapshot_id")
                .with_description("Snapshot id for a successful snapshot. This field will not be set if the Protection Group Run has no successful attempt."),
        )
        .attribute(
            AttributeSchema::field("status", AttributeType::enumeration(SNAPSHOT_STATUSES))
                .with_description("Status of snapshot."),
        )
        .attribute(
            string("status_message")
                .with_description("A message describing the status. This will be populated currently only for kWaitingForOlderBackupRun status."),
        )
        .attribute(
            block("stats", backup_data_stats())
                .with_description("Specifies statistics about local snapshot."),
        )
        .attribute(
            string("progress_task_id")
                .with_description("Progress monitor task for backup of the object."),
        )
        .attribute(
            string("indexing_task_id")
                .with_description("Progress monitor task for the indexing of documents in an object."),
        )
        .attribute(string("stats_task_id").with_description("Stats task for an object."))
        .attribute(
            AttributeSchema::field("warnings", strings())
                .with_description("Specifies a list of warning messages."),
        )
        .attribute(
            boolean("is_manually_deleted")
                .with_description("Specifies whether the snapshot is deleted manually."),
        )
        .attribute(
            int("expiry_time_usecs")
                .with_description("Specifies the expiry time of attempt in Unix epoch Timestamp (in microseconds) for an object."),
        )
        .attribute(
            int("total_file_count")
                .with_description("The total number of file and directory entities visited in this backup. Only applicable to file based backups."),
        )
        .attribute(
            int("backup_file_count")
                .with_description("The total number of file and directory entities that are backed up in this run. Only applicable to file based backups."),
        )
        .attribute(
            block("data_lock_constraints", data_lock_constraints())
                .with_description("Specifies the dataLock constraints for local or target snapshot."),
        )
}

fn backup_attempt() -> BlockSchema {
    attempt_times(BlockSchema::new())
        .attribute(
            AttributeSchema::field("status", status())
                .with_description("Status of the attempt for an object. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Paused' indicates that the ongoing run has been paused. 'Pausing' indicates that the ongoing run is in the process of being paused. 'Resuming' indicates that the already paused run is in the process of being running again. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            block("stats", backup_data_stats())
                .with_description("Specifies statistics about local snapshot."),
        )
        .attribute(
            string("progress_task_id")
                .with_description("Progress monitor task for an object.."),
        )
        .attribute(
            string("message")
                .with_description("A message about the error if encountered while performing backup."),
        )
}

fn backup_data_stats() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            int("logical_size_bytes")
                .with_description("Specifies total logical size of object(s) in bytes."),
        )
        .attribute(
            int("bytes_written")
                .with_description("Specifies total size of data in bytes written after taking backup."),
        )
        .attribute(
            int("bytes_read")
                .with_description("Specifies total logical bytes read for creating the snapshot."),
        )
}

fn object_counts(block: BlockSchema) -> BlockSchema {
    block
        .attribute(
            int("successful_objects_count")
                .with_description("Specifies the count of objects for which backup was successful."),
        )
        .attribute(
            int("failed_objects_count")
                .with_description("Specifies the count of objects for which backup failed."),
        )
        .attribute(
            int("cancelled_objects_count")
                .with_description("Specifies the count of objects for which backup was cancelled."),
        )
        .attribute(
            int("successful_app_objects_count")
                .with_description("Specifies the count of app objects for which backup was successful."),
        )
        .attribute(
            int("failed_app_objects_count")
                .with_description("Specifies the count of app objects for which backup failed."),
        )
        .attribute(
            int("cancelled_app_objects_count")
                .with_description("Specifies the count of app objects for which backup was cancelled."),
        )
}

fn backup_run_summary() -> BlockSchema {
    object_counts(BlockSchema::new())
        .attribute(
            string("run_type")
                .with_description("Type of Protection Group run. 'kRegular' indicates an incremental (CBT) backup. Incremental backups utilizing CBT (if supported) are captured of the target protection objects. The first run of a kRegular schedule captures all the blocks. 'kFull' indicates a full (no CBT) backup. A complete backup (all blocks) of the target protection objects are always captured and Change Block Tracking (CBT) is not utilized. 'kLog' indicates a Database Log backup. Capture the database transaction logs to allow rolling back to a specific point in time. 'kSystem' indicates system volume backup. It produces an image for bare metal recovery. 'kStorageArraySnapshot' indicates storage array snapshot backup."),
        )
        .attribute(
            boolean("is_sla_violated")
                .with_description("Indicated if SLA has been violated for this run."),
        )
        .attribute(
            int("start_time_usecs")
                .with_description("Specifies the start time of backup run in Unix epoch Timestamp(in microseconds)."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time of backup run in Unix epoch Timestamp(in microseconds)."),
        )
        .attribute(
            AttributeSchema::field("status", status())
                .with_description("Status of the backup run. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Paused' indicates that the ongoing run has been paused. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::field("messages", strings())
                .with_description("Message about the backup run."),
        )
        .attribute(
            block("local_snapshot_stats", backup_data_stats())
                .with_description("Specifies statistics about local snapshot."),
        )
        .attribute(
            string("indexing_task_id")
                .with_description("Progress monitor task for indexing."),
        )
        .attribute(
            string("progress_task_id")
                .with_description("Progress monitor task id for local backup run."),
        )
        .attribute(string("stats_task_id").with_description("Stats task id for local backup run."))
        .attribute(
            string("data_lock")
                .with_description("This field is deprecated. Use DataLockConstraints field instead."),
        )
        .attribute(string("local_task_id").with_description("Task ID for a local protection run."))
        .attribute(
            block("data_lock_constraints", data_lock_constraints())
                .with_description("Specifies the dataLock constraints for local or target snapshot."),
        )
}

fn replication_run() -> BlockSchema {
    BlockSchema::new().attribute(
        block_list("replication_target_results", replication_target_result())
            .with_description("Replication result for a target."),
    )
}

fn replication_target_result() -> BlockSchema {
    BlockSchema::new()
        .attribute(int("cluster_id").with_description("Specifies the id of the cluster."))
        .attribute(
            int("cluster_incarnation_id")
                .with_description("Specifies the incarnation id of the cluster."),
        )
        .attribute(string("cluster_name").with_description("Specifies the name of the cluster."))
        .attribute(
            int("start_time_usecs")
                .with_description("Specifies the start time of replication in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time of replication in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            int("queued_time_usecs")
                .with_description("Specifies the time when the replication is queued for schedule in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            AttributeSchema::field("status", status())
                .with_description("Status of the replication for a target. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Paused' indicates that the ongoing run has been paused. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(string("message").with_description("Message about the replication run."))
        .attribute(
            int("percentage_completed")
                .with_description("Specifies the progress in percentage."),
        )
        .attribute(
            block(
                "stats",
                BlockSchema::new()
                    .attribute(
                        int("logical_size_bytes")
                            .with_description("Specifies the total logical size in bytes."),
                    )
                    .attribute(
                        int("logical_bytes_transferred")
                            .with_description("Specifies the total logical bytes transferred."),
                    )
                    .attribute(
                        int("physical_bytes_transferred")
                            .with_description("Specifies the total physical bytes transferred."),
                    ),
            )
            .with_description("Specifies statistics about replication data."),
        )
        .attribute(
            boolean("is_manually_deleted")
                .with_description("Specifies whether the snapshot is deleted manually."),
        )
        .attribute(
            int("expiry_time_usecs")
                .with_description("Specifies the expiry time of attempt in Unix epoch Timestamp (in microseconds) for an object."),
        )
        .attribute(
            string("replication_task_id")
                .with_description("Task UID for a replication protection run. This is for tasks that are replicated from another cluster."),
        )
        .attribute(
            int("entries_changed")
                .with_description("Specifies the number of metadata actions completed during the protection run."),
        )
        .attribute(
            boolean("is_in_bound")
                .with_description("Specifies the direction of the replication. If the snapshot is replicated to this cluster, then isInBound is true. If the snapshot is replicated from this cluster to another cluster, then isInBound is false."),
        )
        .attribute(
            block("data_lock_constraints", data_lock_constraints())
                .with_description("Specifies the dataLock constraints for local or target snapshot."),
        )
        .attribute(
            boolean("on_legal_hold")
                .with_description("Specifies the legal hold status for a replication target."),
        )
        .attribute(
            boolean("multi_object_replication")
                .with_description("Specifies whether view based replication was used. In this case, the view containing all objects is replicated as a whole instead of replicating on a per object basis."),
        )
}

fn archival_run() -> BlockSchema {
    BlockSchema::new().attribute(
        block_list("archival_target_results", archival_target_result())
            .with_description("Archival result for an archival target."),
    )
}

fn archival_target_result() -> BlockSchema {
    object_counts(BlockSchema::new())
        .attribute(int("target_id").with_description("Specifies the archival target ID."))
        .attribute(
            string("archival_task_id")
                .with_description("Specifies the archival task id. This is a protection group UID which only applies when archival type is 'Tape'."),
        )
        .attribute(string("target_name").with_description("Specifies the archival target name."))
        .attribute(string("target_type").with_description("Specifies the archival target type."))
        .attribute(
            string("usage_type")
                .with_description("Specifies the usage type for the target."),
        )
        .attribute(
            string("ownership_context")
                .with_description("Specifies the ownership context for the target."),
        )
        .attribute(
            block("tier_settings", archival_tier_info())
                .with_description("Specifies the tier info for archival."),
        )
        .attribute(
            string("run_type")
                .with_description("Type of Protection Group run. 'kRegular' indicates an incremental (CBT) backup. Incremental backups utilizing CBT (if supported) are captured of the target protection objects. The first run of a kRegular schedule captures all the blocks. 'kFull' indicates a full (no CBT) backup. A complete backup (all blocks) of the target protection objects are always captured and Change Block Tracking (CBT) is not utilized. 'kLog' indicates a Database Log backup. Capture the database transaction logs to allow rolling back to a specific point in time. 'kSystem' indicates system volume backup. It produces an image for bare metal recovery."),
        )
        .attribute(
            boolean("is_sla_violated")
                .with_description("Indicated if SLA has been violated for this run."),
        )
        .attribute(
            string("snapshot_id")
                .with_description("Snapshot id for a successful snapshot. This field will not be set if the archival Run fails to take the snapshot."),
        )
        .attribute(
            int("start_time_usecs")
                .with_description("Specifies the start time of replication run in Unix epoch Timestamp(in microseconds) for an archival target."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time of replication run in Unix epoch Timestamp(in microseconds) for an archival target."),
        )
        .attribute(
            int("queued_time_usecs")
                .with_description("Specifies the time when the archival is queued for schedule in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            boolean("is_incremental")
                .with_description("Whether this is an incremental archive. If set to true, this is an incremental archive, otherwise this is a full archive."),
        )
        .attribute(
            boolean("is_forever_incremental")
                .with_description("Whether this is forever incremental or not."),
        )
        .attribute(
            boolean("is_cad_archive")
                .with_description("Whether this is CAD archive or not."),
        )
        .attribute(
            AttributeSchema::field("status", status())
                .with_description("Status of the replication run for an archival target. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Paused' indicates that the ongoing run has been paused. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(string("message").with_description("Message about the archival run."))
        .attribute(
            string("progress_task_id")
                .with_description("Progress monitor task id for archival."),
        )
        .attribute(string("stats_task_id").with_description("Run Stats task id for archival."))
        .attribute(
            string("indexing_task_id")
                .with_description("Progress monitor task for indexing."),
        )
        .attribute(
            block("stats", archival_data_stats())
                .with_description("Specifies statistics about archival data."),
        )
        .attribute(
            boolean("is_manually_deleted")
                .with_description("Specifies whether the snapshot is deleted manually."),
        )
        .attribute(
            int("expiry_time_usecs")
                .with_description("Specifies the expiry time of attempt in Unix epoch Timestamp (in microseconds)."),
        )
        .attribute(
            block("data_lock_constraints", data_lock_constraints())
                .with_description("Specifies the dataLock constraints for local or target snapshot."),
        )
        .attribute(
            boolean("on_legal_hold")
                .with_description("Specifies the legal hold status for a archival target."),
        )
        .attribute(
            block(
                "worm_properties",
                BlockSchema::new()
                    .attribute(
                        boolean("is_archive_worm_compliant")
                            .with_description("Specifies whether this archive run is WORM compliant."),
                    )
                    .attribute(
                        string("worm_non_compliance_reason")
                            .with_description("Specifies reason of archive not being worm compliant."),
                    )
                    .attribute(
                        int("worm_expiry_time_usecs")
                            .with_description("Specifies the time at which the WORM protection expires."),
                    ),
            )
            .with_description("Specifies the WORM related properties for this archive."),
        )
}

fn archival_tier_info() -> BlockSchema {
    let tier = BlockSchema::new()
        .attribute(
            string("move_after_unit")
                .with_description("Specifies the unit for moving the data from current tier to next tier. This unit will be a base unit for the 'moveAfter' field specified below."),
        )
        .attribute(
            int("move_after")
                .with_description("Specifies the time period after which the backup will be moved from current tier to next tier."),
        )
        .attribute(
            string("tier_type")
                .required()
                .with_description("Specifies the Oracle tier types."),
        );
    BlockSchema::new()
        .attribute(
            string("cloud_platform")
                .required()
                .with_description("Specifies the cloud platform to enable tiering."),
        )
        .attribute(
            block(
                "oracle_tiering",
                BlockSchema::new().attribute(
                    block_list("tiers", tier)
                        .required()
                        .with_description("Specifies the tiers that are used to move the archived backup from current tier to next tier. The order of the tiers determines which tier will be used next for moving the archived backup. The first tier input should always be default tier where backup will be acrhived. Each tier specifies how much time after the backup will be moved to next tier from the current tier."),
                ),
            )
            .with_description("Specifies Oracle tiers."),
        )
        .attribute(
            string("current_tier_type")
                .with_description("Specifies the type of the current tier where the snapshot resides. This will be specified if the run is a CAD run."),
        )
}

fn archival_data_stats() -> BlockSchema {
    BlockSchema::new()
        .attribute(int("logical_size_bytes").with_description("Specifies the logicalSizeBytes."))
        .attribute(
            int("bytes_read")
                .with_description("Specifies total logical bytes read for creating the snapshot."),
        )
        .attribute(
            int("logical_bytes_transferred")
                .with_description("Specifies the logical bytes transferred."),
        )
        .attribute(
            int("physical_bytes_transferred")
                .with_description("Specifies the physical bytes transferred."),
        )
        .attribute(
            int("avg_logical_transfer_rate_bps")
                .with_description("Specifies the average rate of transfer in bytes per second."),
        )
        .attribute(
            boolean("file_walk_done")
                .with_description("Specifies whether the file system walk is done. Only applicable to file based backups."),
        )
        .attribute(
            int("total_file_count")
                .with_description("Specifies the total number of file and directory entities visited in this backup. Only applicable to file based backups."),
        )
        .attribute(
            int("backup_file_count")
                .with_description("Specifies the total number of file and directory entities that are backed up in this run. Only applicable to file based backups."),
        )
}

fn cloud_spin_run() -> BlockSchema {
    let result = BlockSchema::new()
        .attribute(int("id").with_description("Specifies the unique id of the cloud spin entity."))
        .attribute(
            string("name")
                .with_description("Specifies the name of the already added cloud spin target."),
        )
        .attribute(
            int("start_time_usecs")
                .with_description("Specifies the start time of Cloud Spin in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time of Cloud Spin in Unix epoch Timestamp(in microseconds) for a target."),
        )
        .attribute(
            AttributeSchema::field("status", status())
                .with_description("Status of the Cloud Spin for a target. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Paused' indicates that the ongoing run has been paused. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(string("message").with_description("Message about the Cloud Spin run."))
        .attribute(
            block(
                "stats",
                BlockSchema::new().attribute(
                    int("physical_bytes_transferred")
                        .with_description("Specifies the physical bytes transferred."),
                ),
            )
            .with_description("Specifies statistics about Cloud Spin data."),
        )
        .attribute(
            boolean("is_manually_deleted")
                .with_description("Specifies whether the snapshot is deleted manually."),
        )
        .attribute(
            int("expiry_time_usecs")
                .with_description("Specifies the expiry time of attempt in Unix epoch Timestamp (in microseconds) for an object."),
        )
        .attribute(
            string("cloudspin_task_id")
                .with_description("Task ID for a CloudSpin protection run."),
        )
        .attribute(
            string("progress_task_id")
                .with_description("Progress monitor task id for Cloud Spin run."),
        )
        .attribute(
            block("data_lock_constraints", data_lock_constraints())
                .with_description("Specifies the dataLock constraints for local or target snapshot."),
        )
        .attribute(
            boolean("on_legal_hold")
                .with_description("Specifies the legal hold status for a cloud spin target."),
        );
    BlockSchema::new().attribute(
        block_list("cloud_spin_target_results", result)
            .with_description("Cloud Spin result for a target."),
    )
}

/// Query filters shared by the single-run and run-list lookups
fn run_lookup_filters(schema: ResourceSchema) -> ResourceSchema {
    schema
        .attribute(
            AttributeSchema::new("request_initiator_type", AttributeType::String)
                .with_description("Type of request from UI, used to prioritize requests."),
        )
        .attribute(
            AttributeSchema::new("tenant_ids", strings())
                .with_description("TenantIds contains ids of the tenants for which the run is to be returned."),
        )
        .attribute(
            AttributeSchema::new("include_tenants", AttributeType::Bool)
                .with_description("If true, the response will include Protection Group Runs which were created by all tenants which the current user has permission to see. If false, then only Protection Groups created by the current user will be returned. If it's not specified, it is true by default."),
        )
        .attribute(
            AttributeSchema::new("include_object_details", AttributeType::Bool)
                .with_description("Specifies if the result includes the object details for a protection run. If set to true, details of the protected object will be returned. If set to false or not specified, details will not be returned."),
        )
        .attribute(
            AttributeSchema::new("use_cached_data", AttributeType::Bool)
                .with_description("Serve the request from the read replica cache."),
        )
}

pub fn protection_group_run_schema() -> ResourceSchema {
    let schema = ResourceSchema::new(PROTECTION_GROUP_RUN)
        .data_source()
        .with_description("Reads one run of a protection group.")
        .attribute(tenant_id_attribute())
        .attribute(
            AttributeSchema::new("protection_group_run_id", AttributeType::String)
                .required()
                .with_description("Id of the protection group the run belongs to."),
        )
        .attribute(
            AttributeSchema::new("run_id", AttributeType::String)
                .required()
                .with_description("Id of the run."),
        );
    run_lookup_filters(schema).attributes_from(run_fields().into_computed())
}

pub fn protection_group_runs_schema() -> ResourceSchema {
    let schema = ResourceSchema::new(PROTECTION_GROUP_RUNS)
        .data_source()
        .with_description("Lists the runs of a protection group.")
        .attribute(tenant_id_attribute())
        .attribute(
            AttributeSchema::new("protection_group_id", AttributeType::String)
                .required()
                .with_description("Specifies a unique id of the Protection Group."),
        )
        .attribute(
            AttributeSchema::new("run_id", AttributeType::String)
                .with_description("Specifies the protection run id."),
        )
        .attribute(
            AttributeSchema::new("start_time_usecs", AttributeType::Int)
                .with_description("Start time for time range filter. Specify the start time as a Unix epoch Timestamp (in microseconds), only runs executing after this time will be returned. By default it is endTimeUsecs minus an hour."),
        )
        .attribute(
            AttributeSchema::new("end_time_usecs", AttributeType::Int)
                .with_description("End time for time range filter. Specify the end time as a Unix epoch Timestamp (in microseconds), only runs executing before this time will be returned. By default it is current time."),
        )
        .attribute(
            AttributeSchema::new("run_types", strings())
                .with_description("Filter by run type. Only protection run matching the specified types will be returned."),
        )
        .attribute(
            AttributeSchema::new("local_backup_run_status", strings())
                .with_description("Specifies a list of local backup status, runs matching the status will be returned. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("replication_run_status", strings())
                .with_description("Specifies a list of replication status, runs matching the status will be returned. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("archival_run_status", strings())
                .with_description("Specifies a list of archival status, runs matching the status will be returned. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("cloud_spin_run_status", strings())
                .with_description("Specifies a list of cloud spin status, runs matching the status will be returned. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("num_runs", AttributeType::Int)
                .with_description("Specifies the max number of runs. If not specified, at most 100 runs will be returned."),
        )
        .attribute(
            AttributeSchema::new("exclude_non_restorable_runs", AttributeType::Bool)
                .with_description("Specifies whether to exclude non restorable runs. Run is treated restorable only if there is atleast one object snapshot (which may be either a local or an archival snapshot) which is not deleted or expired. Default value is false."),
        )
        .attribute(
            AttributeSchema::new("run_tags", strings())
                .with_description("Specifies a list of tags for protection runs. If this is specified, only the runs which match these tags will be returned."),
        )
        .attribute(
            AttributeSchema::new("filter_by_end_time", AttributeType::Bool)
                .with_description("If true, the runs with backup end time within the specified time range will be returned. Otherwise, the runs with start time in the time range are returned."),
        )
        .attribute(
            AttributeSchema::new("snapshot_target_types", strings())
                .with_description("Specifies the snapshot's target type which should be filtered."),
        )
        .attribute(
            AttributeSchema::new("only_return_successful_copy_run", AttributeType::Bool)
                .with_description("only successful copyruns are returned."),
        )
        .attribute(
            AttributeSchema::new("filter_by_copy_task_end_time", AttributeType::Bool)
                .with_description("If true, then the details of the runs for which any copyTask completed in the given timerange will be returned. Only one of filterByEndTime and filterByCopyTaskEndTime can be set."),
        );

    let run = run_with_id().into_computed();

    run_lookup_filters(schema)
        .attribute(
            AttributeSchema::field("runs", AttributeType::block_list(run))
                .computed()
                .with_description("Runs of the protection group."),
        )
        .attribute(
            AttributeSchema::field("total_runs", AttributeType::Int)
                .computed()
                .with_description("Specifies the count of total runs exist for the given set of filters. The number of runs in single API call are limited and this count can be used to estimate query filter values to get next set of remaining runs. Please note that this field will only be populated if startTimeUsecs or endTimeUsecs or both are specified in query parameters."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::schema::Mutability;

    #[test]
    fn run_data_source_reports_everything_as_computed() {
        let schema = protection_group_run_schema();
        assert!(schema.is_data_source());
        assert_eq!(
            schema.attributes["local_backup_info"].mutability,
            Mutability::Computed
        );
        assert_eq!(schema.attributes["run_id"].mutability, Mutability::Required);
        assert!(schema.attributes["run_id"].provider_name.is_none());
    }

    #[test]
    fn run_list_elements_carry_the_run_id() {
        let schema = protection_group_runs_schema();
        let run = schema.attributes["runs"].attr_type.nested().unwrap();
        assert_eq!(run.attributes["id"].provider_name.as_deref(), Some("id"));
        assert_eq!(
            schema.attributes["total_runs"].provider_name.as_deref(),
            Some("totalRuns")
        );
    }
}
