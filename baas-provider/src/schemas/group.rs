//! Protection group schemas

use baas_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema};

use super::common::{
    indexing_policy, ints, key_value_pair, pre_post_script, strings, tenant, tenant_id_attribute,
    time_of_day,
};
use super::run::run_with_id;

pub const PROTECTION_GROUP: &str = "protection_group";
pub const PROTECTION_GROUPS: &str = "protection_groups";

pub const ENVIRONMENTS: &[&str] = &["kPhysical", "kSQL", "kOracle"];
pub const PRIORITIES: &[&str] = &["kLow", "kMedium", "kHigh"];
pub const QOS_POLICIES: &[&str] = &["kBackupHDD", "kBackupSSD", "kTestAndDevHigh", "kBackupAll"];

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

/// Settings a user configures on a protection group
pub fn group_settings() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            string("name")
                .required()
                .with_description("Name of the protection group."),
        )
        .attribute(
            string("policy_id")
                .required()
                .with_description("Protection policy the group follows."),
        )
        .attribute(
            AttributeSchema::field("environment", AttributeType::enumeration(ENVIRONMENTS))
                .required()
                .with_description("Environment type of the group."),
        )
        .attribute(
            AttributeSchema::field("priority", AttributeType::enumeration(PRIORITIES))
                .with_description("Specifies the priority of the Protection Group."),
        )
        .attribute(
            int("storage_domain_id")
                .with_description("Specifies the Storage Domain (View Box) ID where this Protection Group writes data."),
        )
        .attribute(
            string("description")
                .with_description("Specifies a description of the Protection Group."),
        )
        .attribute(
            block("start_time", time_of_day())
                .with_description("Time of day the group's runs start."),
        )
        .attribute(
            int("end_time_usecs")
                .with_description("Specifies the end time in micro seconds for this Protection Group. If this is not specified, the Protection Group won't be ended."),
        )
        .attribute(
            int("last_modified_timestamp_usecs")
                .optional_computed()
                .with_description("Specifies the last time this protection group was updated. If this is passed into a PUT request, then the backend will validate that the timestamp passed in matches the time that the protection group was actually last modified. If the two timestamps do not match, then the request will be rejected with a stale error."),
        )
        .attribute(
            block("alert_policy", alert_policy())
                .with_description("Specifies a policy for alerting users of the status of a Protection Group."),
        )
        .attribute(
            block_list(
                "sla",
                BlockSchema::new()
                    .attribute(
                        string("backup_run_type")
                            .with_description("Specifies the type of run this rule should apply to."),
                    )
                    .attribute(
                        int("sla_minutes")
                            .with_description("Specifies the number of minutes allotted to a run of the specified type before SLA is considered violated."),
                    ),
            )
            .with_description("Specifies the SLA parameters for this Protection Group."),
        )
        .attribute(
            AttributeSchema::field("qos_policy", AttributeType::enumeration(QOS_POLICIES))
                .with_description("Specifies whether the Protection Group will be written to HDD or SSD."),
        )
        .attribute(
            boolean("abort_in_blackouts")
                .with_description("Specifies whether currently executing jobs should abort if a blackout period specified by a policy starts. Available only if the selected policy has at least one blackout period. Default value is false."),
        )
        .attribute(
            boolean("pause_in_blackouts")
                .with_description("Specifies whether currently executing jobs should be paused if a blackout period specified by a policy starts. Available only if the selected policy has at least one blackout period. Default value is false. This field should not be set to true if 'abortInBlackouts' is sent as true."),
        )
        .attribute(
            boolean("is_paused")
                .with_description("Specifies if the Protection Group is paused. New runs are not scheduled for the paused Protection Groups. Active run if any is not impacted."),
        )
        .attribute(
            block_list("advanced_configs", key_value_pair())
                .with_description("Specifies the advanced configuration for a protection job."),
        )
        .attribute(
            block("physical_params", physical_params())
                .with_description("Specifies the parameters specific to Physical Protection Groups."),
        )
        .attribute(
            block("mssql_params", mssql_params())
                .with_description("Specifies the parameters specific to MSSQL Protection Groups."),
        )
        .attribute(
            block("oracle_params", oracle_params())
                .with_description("Specifies the parameters to create Oracle Protection Group."),
        )
}

/// Settings the backend fills in on a protection group
pub fn group_status() -> BlockSchema {
    let entity = BlockSchema::new()
        .attribute(int("id").with_description("Specifies the ID of the object."))
        .attribute(string("name").with_description("Specifies the name of the object."))
        .attribute(
            int("parent_source_id")
                .with_description("Specifies the id of the parent source of the object."),
        )
        .attribute(
            string("parent_source_name")
                .with_description("Specifies the name of the parent source of the object."),
        );

    BlockSchema::new()
        .attribute(string("cluster_id").with_description("Specifies the cluster ID."))
        .attribute(string("region_id").with_description("Specifies the region ID."))
        .attribute(
            boolean("is_active")
                .with_description("Specifies if the Protection Group is active or not."),
        )
        .attribute(
            boolean("is_deleted")
                .with_description("Specifies if the Protection Group has been deleted."),
        )
        .attribute(
            block("last_run", run_with_id())
                .with_description("Specifies the parameters which are common between Protection Group runs of all Protection Groups."),
        )
        .attribute(
            block_list("permissions", tenant())
                .with_description("Specifies the list of tenants that have permissions for this protection group."),
        )
        .attribute(
            boolean("is_protect_once")
                .with_description("Specifies if the Protection Group is using a protect once type of policy. This field is helpful to identify run happen for this group."),
        )
        .attribute(
            block_list("missing_entities", entity.clone())
                .with_description("Specifies the Information about missing entities."),
        )
        .attribute(
            block_list("invalid_entities", entity)
                .with_description("Specifies the Information about invalid entities. An entity will be considered invalid if it is part of an active protection group but has lost compatibility for the given backup type."),
        )
        .attribute(
            int("num_protected_objects")
                .with_description("Specifies the number of protected objects of the Protection Group."),
        )
        .into_computed()
}

fn alert_policy() -> BlockSchema {
    let target = BlockSchema::new()
        .attribute(
            string("email_address")
                .required()
                .with_description("Specifies an email address to receive an alert."),
        )
        .attribute(
            string("language")
                .with_description("Specifies the language of the delivery target. Default value is 'en-us'."),
        )
        .attribute(
            string("recipient_type")
                .with_description("Specifies the recipient type of email recipient. Default value is 'kTo'."),
        );

    BlockSchema::new()
        .attribute(
            AttributeSchema::field("backup_run_status", strings())
                .required()
                .with_description("Specifies the run status for which the user would like to receive alerts."),
        )
        .attribute(
            block_list("alert_targets", target)
                .with_description("Specifies a list of targets to receive the alerts."),
        )
        .attribute(
            boolean("raise_object_level_failure_alert")
                .with_description("Specifies whether object level alerts are raised for backup failures after the backup run."),
        )
        .attribute(
            boolean("raise_object_level_failure_alert_after_last_attempt")
                .with_description("Specifies whether object level alerts are raised for backup failures after last backup attempt."),
        )
        .attribute(
            boolean("raise_object_level_failure_alert_after_each_attempt")
                .with_description("Specifies whether object level alerts are raised for backup failures after each backup attempt."),
        )
}

// =============================================================================
// Physical
// =============================================================================

fn physical_params() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field(
                "protection_type",
                AttributeType::enumeration(&["kFile", "kVolume"]),
            )
            .required()
            .with_description("Specifies the Physical Protection Group type."),
        )
        .attribute(
            block("volume_protection_type_params", physical_volume_params())
                .with_description("Specifies the parameters which are specific to Volume based physical Protection Groups."),
        )
        .attribute(
            block("file_protection_type_params", physical_file_params())
                .with_description("Specifies the parameters which are specific to Physical related Protection Groups."),
        )
}

fn physical_volume_params() -> BlockSchema {
    let object = BlockSchema::new()
        .attribute(
            int("id")
                .required()
                .with_description("Specifies the ID of the object protected."),
        )
        .attribute(string("name").with_description("Specifies the name of the object protected."))
        .attribute(
            AttributeSchema::field("volume_guids", strings())
                .with_description("Specifies the list of GUIDs of volumes protected. If empty, then all volumes will be protected by default."),
        )
        .attribute(
            boolean("enable_system_backup")
                .with_description("Specifies whether or not to take a system backup. Applicable only for windows sources."),
        );

    BlockSchema::new()
        .attribute(
            block_list("objects", object)
                .required()
                .with_description("Specifies the list of volume objects protected by this Protection Group."),
        )
        .attribute(
            block("indexing_policy", indexing_policy())
                .with_description("Specifies settings for indexing files found in an Object (such as a VM) so these files can be searched and recovered. This also specifies inclusion and exclusion rules that determine the directories to index."),
        )
        .attribute(
            boolean("perform_source_side_deduplication")
                .with_description("Specifies whether or not to perform source side deduplication on this Protection Group."),
        )
        .attribute(
            boolean("quiesce")
                .with_description("Specifies Whether to take app-consistent snapshots by quiescing apps and the filesystem before taking a backup."),
        )
        .attribute(
            boolean("continue_on_quiesce_failure")
                .with_description("Specifies whether to continue backing up on quiesce failure."),
        )
        .attribute(
            boolean("incremental_backup_after_restart")
                .with_description("Specifies whether or not to perform an incremental backup after the server restarts. This is applicable to windows environments."),
        )
        .attribute(
            block("pre_post_script", pre_post_script())
                .with_description("Specifies the params for pre and post scripts."),
        )
        .attribute(
            AttributeSchema::field("dedup_exclusion_source_ids", ints())
                .with_description("Specifies ids of sources for which deduplication has to be disabled."),
        )
        .attribute(
            AttributeSchema::field("excluded_vss_writers", strings())
                .with_description("Specifies writer names which should be excluded from physical volume based backups."),
        )
        .attribute(
            boolean("cobmr_backup")
                .with_description("Specifies whether to take a CoBMR backup."),
        )
}

fn physical_file_params() -> BlockSchema {
    let path = BlockSchema::new()
        .attribute(
            string("included_path")
                .required()
                .with_description("Specifies a path to be included on the source. All paths under this path will be included unless they are specifically mentioned in excluded paths."),
        )
        .attribute(
            AttributeSchema::field("excluded_paths", strings())
                .with_description("Specifies a set of paths nested under the include path which should be excluded from the Protection Group."),
        )
        .attribute(
            boolean("skip_nested_volumes")
                .with_description("Specifies whether to skip any nested volumes (both local and network) that are mounted under include path. Applicable only for windows sources."),
        );

    let object = BlockSchema::new()
        .attribute(
            int("id")
                .required()
                .with_description("Specifies the ID of the object protected."),
        )
        .attribute(string("name").with_description("Specifies the name of the object protected."))
        .attribute(
            block_list("file_paths", path)
                .with_description("Specifies a list of file paths to be protected by this Protection Group."),
        )
        .attribute(
            boolean("uses_path_level_skip_nested_volume_setting")
                .with_description("Specifies whether path level or object level skip nested volume setting will be used."),
        )
        .attribute(
            AttributeSchema::field("nested_volume_types_to_skip", strings())
                .with_description("Specifies mount types of nested volumes to be skipped."),
        )
        .attribute(
            boolean("follow_nas_symlink_target")
                .with_description("Specifies whether to follow NAS target pointed by symlink for windows sources."),
        )
        .attribute(
            string("metadata_file_path")
                .with_description("Specifies the path of metadatafile on source. This file contains absolute paths of files that needs to be backed up on the same source."),
        );

    let timeout = BlockSchema::new()
        .attribute(int("timeout_mins").with_description("Specifies the timeout in mins."))
        .attribute(
            string("backup_type")
                .with_description("The scheduled backup type(kFull, kRegular etc.)."),
        );

    BlockSchema::new()
        .attribute(
            block_list("objects", object)
                .required()
                .with_description("Specifies the list of objects protected by this Protection Group."),
        )
        .attribute(
            block("indexing_policy", indexing_policy())
                .with_description("Specifies settings for indexing files found in an Object (such as a VM) so these files can be searched and recovered. This also specifies inclusion and exclusion rules that determine the directories to index."),
        )
        .attribute(
            boolean("perform_source_side_deduplication")
                .with_description("Specifies whether or not to perform source side deduplication on this Protection Group."),
        )
        .attribute(
            boolean("perform_brick_based_deduplication")
                .with_description("Specifies whether or not to perform brick based deduplication on this Protection Group."),
        )
        .attribute(
            block_list("task_timeouts", timeout)
                .with_description("Specifies the timeouts for all the objects inside this Protection Group, for both full and incremental backups."),
        )
        .attribute(
            boolean("quiesce")
                .with_description("Specifies Whether to take app-consistent snapshots by quiescing apps and the filesystem before taking a backup."),
        )
        .attribute(
            boolean("continue_on_quiesce_failure")
                .with_description("Specifies whether to continue backing up on quiesce failure."),
        )
        .attribute(
            boolean("cobmr_backup")
                .with_description("Specifies whether to take CoBMR backup."),
        )
        .attribute(
            block("pre_post_script", pre_post_script())
                .with_description("Specifies the params for pre and post scripts."),
        )
        .attribute(
            AttributeSchema::field("dedup_exclusion_source_ids", ints())
                .with_description("Specifies ids of sources for which deduplication has to be disabled."),
        )
        .attribute(
            AttributeSchema::field("global_exclude_paths", strings())
                .with_description("Specifies global exclude filters which are applied to all sources in a job."),
        )
        .attribute(
            AttributeSchema::new("global_exclude_fs", strings())
                .with_provider_name("globalExcludeFS")
                .with_description("Specifies global exclude filesystems which are applied to all sources in a job."),
        )
        .attribute(
            AttributeSchema::field("ignorable_errors", strings())
                .with_description("Specifies the Errors to be ignored in error db."),
        )
        .attribute(
            boolean("allow_parallel_runs")
                .with_description("Specifies whether or not this job can have parallel runs."),
        )
}

// =============================================================================
// MSSQL
// =============================================================================

fn mssql_params() -> BlockSchema {
    let file = mssql_common()
        .attribute(
            block_list(
                "additional_host_params",
                BlockSchema::new()
                    .attribute(
                        boolean("disable_source_side_deduplication")
                            .with_description("Specifies whether or not to disable source side deduplication on this source. The default behavior is false unless the user has set 'performSourceSideDeduplication' to true."),
                    )
                    .attribute(
                        int("host_id")
                            .with_description("Specifies the id of the host container on which databases are hosted."),
                    )
                    .attribute(string("host_name").with_description("Specifies the host name.")),
            )
            .with_description("Specifies settings which are to be applied to specific host containers in this protection group."),
        )
        .attribute(
            boolean("perform_source_side_deduplication")
                .with_description("Specifies whether or not to perform source side deduplication on this Protection Group."),
        );

    let native = mssql_common()
        .attribute(
            int("num_streams")
                .with_description("Specifies the number of streams to be used."),
        )
        .attribute(string("with_clause").with_description("Specifies the WithClause to be used."));

    let volume = mssql_common()
        .attribute(
            block_list(
                "additional_host_params",
                BlockSchema::new()
                    .attribute(
                        boolean("enable_system_backup")
                            .with_description("Specifies whether to enable system/bmr backup using 3rd party tools installed on agent host."),
                    )
                    .attribute(
                        int("host_id")
                            .with_description("Specifies the id of the host container on which databases are hosted."),
                    )
                    .attribute(string("host_name").with_description("Specifies the host name."))
                    .attribute(
                        AttributeSchema::field("volume_guids", strings())
                            .with_description("Specifies the list of volume GUIDs to be protected. If not specified, all the volumes of the host will be protected. Note that volumes of host on which databases are hosted are protected even if its not mentioned in this list."),
                    ),
            )
            .with_description("Specifies settings which are to be applied to specific host containers in this protection group."),
        )
        .attribute(
            boolean("backup_db_volumes_only")
                .with_description("Specifies whether to only backup volumes on which the specified databases reside. If not specified (default), all the volumes of the host will be protected."),
        )
        .attribute(
            boolean("incremental_backup_after_restart")
                .with_description("Specifies whether or not to perform an incremental backup after the server restarts. This is applicable to windows environments."),
        )
        .attribute(
            block("indexing_policy", indexing_policy())
                .with_description("Specifies settings for indexing files found in an Object (such as a VM) so these files can be searched and recovered."),
        );

    BlockSchema::new()
        .attribute(
            AttributeSchema::field(
                "protection_type",
                AttributeType::enumeration(&["kFile", "kVolume", "kNative"]),
            )
            .required()
            .with_description("Specifies the MSSQL Protection Group type."),
        )
        .attribute(
            block("file_protection_type_params", file)
                .with_description("Specifies the params to create a File based MSSQL Protection Group."),
        )
        .attribute(
            block("native_protection_type_params", native)
                .with_description("Specifies the params to create a Native based MSSQL Protection Group."),
        )
        .attribute(
            block("volume_protection_type_params", volume)
                .with_description("Specifies the params to create a Volume based MSSQL Protection Group."),
        )
}

fn mssql_common() -> BlockSchema {
    let advanced = BlockSchema::new()
        .attribute(
            string("cloned_db_backup_status")
                .with_description("Whether to report error if SQL database is cloned."),
        )
        .attribute(
            string("db_backup_if_not_online_status")
                .with_description("Whether to report error if SQL database is not online."),
        )
        .attribute(
            string("missing_db_backup_status")
                .with_description("Fail the backup job when the database is missing."),
        )
        .attribute(
            string("offline_restoring_db_backup_status")
                .with_description("Fail the backup job when database is offline or restoring."),
        )
        .attribute(
            string("read_only_db_backup_status")
                .with_description("Whether to skip backup for read-only SQL databases."),
        )
        .attribute(
            string("report_all_non_autoprotect_db_errors")
                .with_description("Whether to report error for all dbs in non-autoprotect jobs."),
        );

    let object = BlockSchema::new()
        .attribute(int("id").required().with_description("Specifies the ID of the object."))
        .attribute(string("name").with_description("Specifies the name of the object."))
        .attribute(
            string("source_type")
                .with_description("Specifies the type of source such as kPhysical, kVMware, kSQL etc."),
        );

    BlockSchema::new()
        .attribute(
            string("aag_backup_preference_type")
                .with_description("Specifies the preference type for backing up databases that are part of an AAG. If not specified, then default preferences of the AAG server are applied. This field wont be applicable if user DB preference is set to skip AAG databases."),
        )
        .attribute(
            block("advanced_settings", advanced)
                .with_description("This is used to regulate certain gflag values from the UI. The values passed by the user from the UI will be used for the respective gflags."),
        )
        .attribute(
            boolean("backup_system_dbs")
                .with_description("Specifies whether to backup system databases. If not specified then parameter is set to true."),
        )
        .attribute(
            block_list("exclude_filters", filter())
                .with_description("Specifies the list of exclusion filters applied during the group creation or edit. These exclusion filters can be wildcard supported strings or regular expressions. Objects satisfying the will filters will be excluded during backup and also auto protected objects will be ignored if filtered by any of the filters."),
        )
        .attribute(
            boolean("full_backups_copy_only")
                .with_description("Specifies whether full backups should be copy-only."),
        )
        .attribute(
            int("log_backup_num_streams")
                .with_description("Specifies the number of streams to be used for log backups."),
        )
        .attribute(
            string("log_backup_with_clause")
                .with_description("Specifies the WithClause to be used for log backups."),
        )
        .attribute(
            block("pre_post_script", pre_post_script())
                .with_description("Specifies the params for pre and post scripts."),
        )
        .attribute(
            boolean("use_aag_preferences_from_server")
                .with_description("Specifies whether or not the AAG backup preferences specified on the SQL Server host should be used."),
        )
        .attribute(
            string("user_db_backup_preference_type")
                .with_description("Specifies the preference type for backing up user databases on the host."),
        )
        .attribute(
            block_list("objects", object)
                .required()
                .with_description("Specifies the list of object params to be protected."),
        )
}

/// Database name filter
pub fn filter() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            string("filter_string")
                .with_description("Specifies the filter string using wildcard supported strings or regular expressions."),
        )
        .attribute(
            boolean("is_regular_expression")
                .with_description("Specifies whether the provided filter string is a regular expression or not. This need to be explicitly set to true if user is trying to filter by regular expressions. Not providing this value in case of regular expression can result in unintended results. The default value is assumed to be false."),
        )
}

// =============================================================================
// Oracle
// =============================================================================

fn oracle_params() -> BlockSchema {
    let vlan = BlockSchema::new()
        .attribute(
            int("vlan_id")
                .with_description("If this is set, then the Cohesity host name or the IP address associated with this VLAN is used for mounting Cohesity's view on the remote host."),
        )
        .attribute(
            boolean("disable_vlan")
                .with_description("If this is set to true, then even if VLANs are configured on the system, the partition VIPs will be used for the restore."),
        )
        .attribute(
            string("interface_name")
                .with_description("Interface group to use for backup/restore. If this is not specified, primary interface group for the cluster will be used."),
        );

    let db_params = BlockSchema::new()
        .attribute(int("database_id").with_description("Specifies the id of the Oracle database."))
        .attribute(
            string("database_name")
                .with_description("Specifies the name of the Oracle database."),
        )
        .attribute(
            block_list("db_channels", oracle_db_channel())
                .with_description("Specifies the Oracle database node channels info. If not specified, the default values assigned by the server are applied to all the databases."),
        );

    let object = BlockSchema::new()
        .attribute(
            int("source_id")
                .required()
                .with_description("Specifies the id of the host on which databases are hosted."),
        )
        .attribute(
            string("source_name")
                .with_description("Specifies the name of the host on which databases are hosted."),
        )
        .attribute(
            block_list("db_params", db_params)
                .with_description("Specifies the properties of the Oracle databases."),
        );

    BlockSchema::new()
        .attribute(
            block_list("objects", object)
                .required()
                .with_description("Specifies the list of object ids to be protected."),
        )
        .attribute(
            boolean("persist_mountpoints")
                .with_description("Specifies whether the mountpoints created while backing up Oracle DBs should be persisted. Defaults to true if value is null to handle the backward compatibility for the upgrade case."),
        )
        .attribute(
            block("vlan_params", vlan)
                .with_description("Specifies VLAN params associated with the backup/restore operation."),
        )
        .attribute(
            block("pre_post_script", pre_post_script())
                .with_description("Specifies the params for pre and post scripts."),
        )
        .attribute(
            int("log_auto_kill_timeout_secs")
                .with_description("Time in seconds after which the log backup of the database in given backup job should be auto-killed."),
        )
        .attribute(
            int("incr_auto_kill_timeout_secs")
                .with_description("Time in seconds after which the incremental backup of the database in given backup job should be auto-killed."),
        )
        .attribute(
            int("full_auto_kill_timeout_secs")
                .with_description("Time in seconds after which the full backup of the database in given backup job should be auto-killed."),
        )
}

fn oracle_db_channel() -> BlockSchema {
    let credentials = BlockSchema::new()
        .attribute(
            string("username")
                .required()
                .with_description("Specifies the username to access target entity."),
        )
        .attribute(
            string("password")
                .required()
                .sensitive()
                .with_description("Specifies the password to access target entity."),
        );

    let vlan_info = BlockSchema::new()
        .attribute(
            AttributeSchema::field("ip_list", strings())
                .with_description("Specifies the list of Ips in this VLAN."),
        )
        .attribute(string("gateway").with_description("Specifies the gateway of this VLAN."))
        .attribute(int("id").with_description("Specifies the Id of this VLAN."))
        .attribute(string("subnet_ip").with_description("Specifies the subnet Ip for this VLAN."));

    let sbt = BlockSchema::new()
        .attribute(
            string("sbt_library_path")
                .with_description("Specifies the path of sbt library."),
        )
        .attribute(string("view_fs_path").with_description("Specifies the Cohesity view path."))
        .attribute(
            AttributeSchema::field("vip_list", strings())
                .with_description("Specifies the list of Cohesity primary VIPs."),
        )
        .attribute(
            block_list("vlan_info_list", vlan_info)
                .with_description("Specifies the Vlan information for Cohesity cluster."),
        );

    let host = BlockSchema::new()
        .attribute(
            string("host_id")
                .with_description("Specifies the id of the database host from which backup is allowed."),
        )
        .attribute(
            int("channel_count")
                .with_description("Specifies the number of channels to be created for this host. Default value for the number of channels will be calculated as the minimum of number of nodes in Cohesity cluster and 2 * number of CPU on the host."),
        )
        .attribute(
            int("port")
                .with_description("Specifies the port where the Database is listening."),
        )
        .attribute(
            block("sbt_host_params", sbt)
                .with_description("Specifies details about capturing Oracle SBT host info."),
        );

    BlockSchema::new()
        .attribute(
            int("archive_log_retention_days")
                .with_description("Specifies the number of days archive log should be stored. For keeping the archived log forever, set this to -1. For deleting the archived log immediately, set this to 0. For deleting the archived log after n days, set this to n."),
        )
        .attribute(
            int("archive_log_retention_hours")
                .with_description("Specifies the number of hours archive log should be stored. For keeping the archived log forever, set this to -1. For deleting the archived log immediately, set this to 0. For deleting the archived log after k hours, set this to k."),
        )
        .attribute(
            block("credentials", credentials)
                .with_description("Specifies the object to hold username and password."),
        )
        .attribute(
            string("database_unique_name")
                .with_description("Specifies the unique Name of the database."),
        )
        .attribute(
            string("database_uuid")
                .with_description("Specifies the database unique id. This is an internal field and is filled by magneto master based on corresponding app entity id."),
        )
        .attribute(
            int("default_channel_count")
                .with_description("Specifies the default number of channels to use per node per database. This value is used on all Oracle Database Nodes unless databaseNodeList item's channelCount is specified for the node. Default value for the number of channels will be calculated as the minimum of number of nodes in Cohesity cluster and 2 * number of CPU on the host. If the number of channels is unspecified here and unspecified within databaseNodeList, the above formula will be used to determine the same."),
        )
        .attribute(
            block_list("database_node_list", host)
                .with_description("Specifies the Node info from where we are allowed to take the backup/restore."),
        )
        .attribute(
            int("max_host_count")
                .with_description("Specifies the maximum number of hosts from which backup/restore is allowed in parallel. This will be less than or equal to the number of databaseNode specified within databaseNodeList."),
        )
        .attribute(
            boolean("enable_dg_primary_backup")
                .with_description("Specifies whether the database having the Primary role within Data Guard configuration is to be backed up."),
        )
        .attribute(
            string("rman_backup_type")
                .with_description("Specifies the type of Oracle RMAN backup requested."),
        )
}

// =============================================================================
// Resource and data source
// =============================================================================

pub fn protection_group_schema() -> ResourceSchema {
    ResourceSchema::new(PROTECTION_GROUP)
        .with_description("A protection group: what to back up and under which policy.")
        .attribute(tenant_id_attribute())
        .attributes_from(group_settings())
        .attributes_from(group_status())
}

pub fn protection_groups_schema() -> ResourceSchema {
    let mut group =
        group_settings().attribute(string("id").with_description("Id of the protection group."));
    group.attributes.extend(group_status().attributes);
    let group = group.into_computed();

    ResourceSchema::new(PROTECTION_GROUPS)
        .data_source()
        .with_description("Lists protection groups.")
        .attribute(tenant_id_attribute())
        .attribute(
            AttributeSchema::new("request_initiator_type", AttributeType::String)
                .with_description("Specifies the type of request from UI, which is used for services like magneto to determine the priority of requests."),
        )
        .attribute(
            AttributeSchema::new("ids", strings())
                .with_description("Filter by a list of Protection Group ids."),
        )
        .attribute(
            AttributeSchema::new("names", strings())
                .with_description("Filter by a list of Protection Group names."),
        )
        .attribute(
            AttributeSchema::new("policy_ids", strings())
                .with_description("Filter by Policy ids that are associated with Protection Groups. Only Protection Groups associated with the specified Policy ids, are returned."),
        )
        .attribute(
            AttributeSchema::new("storage_domain_id", AttributeType::Int)
                .with_description("Filter by Storage Domain id. Only Protection Groups writing data to this Storage Domain will be returned."),
        )
        .attribute(
            AttributeSchema::new("include_groups_with_datalock_only", AttributeType::Bool)
                .with_description("Whether to only return Protection Groups with a datalock."),
        )
        .attribute(
            AttributeSchema::new(
                "environments",
                AttributeType::list(AttributeType::enumeration(ENVIRONMENTS)),
            )
            .with_description("Filter by environment types such as 'kVMware', 'kView', etc. Only Protection Groups protecting the specified environment types are returned."),
        )
        .attribute(
            AttributeSchema::new("is_active", AttributeType::Bool)
                .with_description("Filter by Inactive or Active Protection Groups. If not set, all Inactive and Active Protection Groups are returned. If true, only Active Protection Groups are returned. If false, only Inactive Protection Groups are returned. When you create a Protection Group on a Primary Cluster with a replication schedule, the Cluster creates an Inactive copy of the Protection Group on the Remote Cluster. In addition, when an Active and running Protection Group is deactivated, the Protection Group becomes Inactive."),
        )
        .attribute(
            AttributeSchema::new("is_deleted", AttributeType::Bool)
                .with_description("If true, return only Protection Groups that have been deleted but still have Snapshots associated with them. If false, return all Protection Groups except those Protection Groups that have been deleted and still have Snapshots associated with them. A Protection Group that is deleted with all its Snapshots is not returned for either of these cases."),
        )
        .attribute(
            AttributeSchema::new("is_paused", AttributeType::Bool)
                .with_description("Filter by paused or non paused Protection Groups, If not set, all paused and non paused Protection Groups are returned. If true, only paused Protection Groups are returned. If false, only non paused Protection Groups are returned."),
        )
        .attribute(
            AttributeSchema::new("last_run_local_backup_status", strings())
                .with_description("Filter by last local backup run status. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("last_run_replication_status", strings())
                .with_description("Filter by last remote replication run status. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("last_run_archival_status", strings())
                .with_description("Filter by last cloud archival run status. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("last_run_cloud_spin_status", strings())
                .with_description("Filter by last cloud spin run status. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("last_run_any_status", strings())
                .with_description("Filter by last any run status. 'Running' indicates that the run is still running. 'Canceled' indicates that the run has been canceled. 'Canceling' indicates that the run is in the process of being canceled. 'Failed' indicates that the run has failed. 'Missed' indicates that the run was unable to take place at the scheduled time because the previous run was still happening. 'Succeeded' indicates that the run has finished successfully. 'SucceededWithWarning' indicates that the run finished successfully, but there were some warning messages. 'Paused' indicates that the ongoing run has been paused. 'Skipped' indicates that the run was skipped."),
        )
        .attribute(
            AttributeSchema::new("is_last_run_sla_violated", AttributeType::Bool)
                .with_description("If true, return Protection Groups for which last run SLA was violated."),
        )
        .attribute(
            AttributeSchema::new("tenant_ids", strings())
                .with_description("TenantIds contains ids of the tenants for which objects are to be returned."),
        )
        .attribute(
            AttributeSchema::new("include_tenants", AttributeType::Bool)
                .with_description("If true, the response will include Protection Groups which were created by all tenants which the current user has permission to see. If false, then only Protection Groups created by the current user will be returned."),
        )
        .attribute(
            AttributeSchema::new("include_last_run_info", AttributeType::Bool)
                .with_description("If true, the response will include last run info. If it is false or not specified, the last run info won't be returned."),
        )
        .attribute(
            AttributeSchema::new("prune_excluded_source_ids", AttributeType::Bool)
                .with_description("If true, the response will not include the list of excluded source IDs in groups that contain this field. This can be set to true in order to improve performance if excluded source IDs are not needed by the user."),
        )
        .attribute(
            AttributeSchema::new("prune_source_ids", AttributeType::Bool)
                .with_description("If true, the response will exclude the list of source IDs within the group specified."),
        )
        .attribute(
            AttributeSchema::new("use_cached_data", AttributeType::Bool)
                .with_description("Specifies whether we can serve the GET request from the read replica cache. There is a lag of 15 seconds between the read replica and primary data source."),
        )
        .attribute(
            AttributeSchema::field("protection_groups", AttributeType::block_list(group))
                .computed()
                .with_description("Protection groups matching the filters."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::convert;
    use baas_core::resource::Value;
    use baas_core::schema::Mutability;
    use std::collections::HashMap;

    #[test]
    fn last_modified_timestamp_is_sent_when_supplied() {
        let schema = protection_group_schema();
        assert_eq!(
            schema.attributes["last_modified_timestamp_usecs"].mutability,
            Mutability::OptionalComputed
        );

        let config = HashMap::from([
            ("x_ibm_tenant_id".to_string(), Value::String("tenant/".to_string())),
            ("name".to_string(), Value::String("daily".to_string())),
            ("policy_id".to_string(), Value::String("pol-1".to_string())),
            ("environment".to_string(), Value::String("kPhysical".to_string())),
            (
                "last_modified_timestamp_usecs".to_string(),
                Value::Int(1_700_000_000_000_000),
            ),
        ]);
        schema.validate(&config).unwrap();
        let body = convert::expand_json(&schema.attributes, &config).unwrap();
        assert_eq!(body["lastModifiedTimestampUsecs"], 1_700_000_000_000_000_i64);
    }

    #[test]
    fn resource_mixes_settings_and_backend_status() {
        let schema = protection_group_schema();
        assert!(!schema.is_data_source());
        assert!(schema.attributes["name"].is_required());
        assert_eq!(schema.attributes["is_active"].mutability, Mutability::Computed);
        assert!(schema.attributes["x_ibm_tenant_id"].provider_name.is_none());
    }

    #[test]
    fn irregular_wire_name_is_kept() {
        let schema = protection_group_schema();
        let physical = schema.attributes["physical_params"].attr_type.nested().unwrap();
        let file = physical.attributes["file_protection_type_params"]
            .attr_type
            .nested()
            .unwrap();
        assert_eq!(
            file.attributes["global_exclude_fs"].provider_name.as_deref(),
            Some("globalExcludeFS")
        );
    }

    #[test]
    fn oracle_password_is_sensitive() {
        let schema = protection_group_schema();
        let oracle = schema.attributes["oracle_params"].attr_type.nested().unwrap();
        let object = oracle.attributes["objects"].attr_type.nested().unwrap();
        let db = object.attributes["db_params"].attr_type.nested().unwrap();
        let channel = db.attributes["db_channels"].attr_type.nested().unwrap();
        let creds = channel.attributes["credentials"].attr_type.nested().unwrap();
        assert!(creds.attributes["password"].sensitive);
    }

    #[test]
    fn group_list_elements_are_computed_with_id() {
        let schema = protection_groups_schema();
        let group = schema.attributes["protection_groups"].attr_type.nested().unwrap();
        assert_eq!(group.attributes["id"].mutability, Mutability::Computed);
        assert_eq!(group.attributes["name"].mutability, Mutability::Computed);
        assert!(group.attributes.contains_key("last_run"));
    }
}
