//! Run request schema

use baas_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema};

use super::common::{ints, tenant_id_attribute};

pub const PROTECTION_GROUP_RUN_REQUEST: &str = "protection_group_run_request";

pub const RUN_TYPES: &[&str] = &[
    "kRegular",
    "kFull",
    "kLog",
    "kSystem",
    "kHydrateCDP",
    "kStorageArraySnapshot",
];

fn retention() -> BlockSchema {
    let data_lock = BlockSchema::new()
        .attribute(
            AttributeSchema::field("mode", AttributeType::String)
                .required()
                .with_description("Specifies the type of WORM retention type. 'Compliance' implies WORM retention is set for compliance reason. 'Administrative' implies WORM retention is set for administrative purposes."),
        )
        .attribute(
            AttributeSchema::field("unit", AttributeType::String)
                .required()
                .with_description("Specifies the Retention Unit of a dataLock measured in days, months or years. If unit is 'Months', then number specified in duration is multiplied to 30. Example: If duration is 4 and unit is 'Months' then number of retention days will be 30 * 4 = 120 days. If unit is 'Years', then number specified in duration is multiplied to 365. If duration is 2 and unit is 'Months' then number of retention days will be 365 * 2 = 730 days."),
        )
        .attribute(
            AttributeSchema::field("duration", AttributeType::Int)
                .required()
                .with_description("Specifies the duration for a dataLock. Example. If duration is 7 and unit is Months, the dataLock is enabled for last 7 * 30 = 210 days of the backup."),
        )
        .attribute(
            AttributeSchema::field("enable_worm_on_external_target", AttributeType::Bool)
                .with_description("Specifies whether objects in the external target associated with this policy need to be made immutable."),
        );

    BlockSchema::new()
        .attribute(
            AttributeSchema::field("unit", AttributeType::String)
                .required()
                .with_description("Specifies the Retention Unit of a backup measured in days, months or years. If unit is 'Months', then number specified in duration is multiplied to 30. Example: If duration is 4 and unit is 'Months' then number of retention days will be 30 * 4 = 120 days. If unit is 'Years', then number specified in duration is multiplied to 365. If duration is 2 and unit is 'Years' then number of retention days will be 365 * 2 = 730 days."),
        )
        .attribute(
            AttributeSchema::field("duration", AttributeType::Int)
                .required()
                .with_description("Specifies the duration for a backup retention. Example. If duration is 7 and unit is Months, the retention of a backup is 7 * 30 = 210 days."),
        )
        .attribute(
            AttributeSchema::field("data_lock_config", AttributeType::block(data_lock))
                .with_description("Specifies WORM retention type for the snapshots. When a WORM retention type is specified, the snapshots of the Protection Groups using this policy will be kept for the last N days as specified in the duration of the datalock. During that time, the snapshots cannot be deleted."),
        )
}

/// Replication target of a run, also used to add replicas to an existing run
pub(super) fn replication_config() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("id", AttributeType::Int)
                .required()
                .with_description("Specifies id of Remote Cluster to copy the Snapshots to."),
        )
        .attribute(
            AttributeSchema::field("retention", AttributeType::block(retention()))
                .with_description("Specifies the retention of a backup."),
        )
}

pub(super) fn archival_config() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("id", AttributeType::Int)
                .required()
                .with_description("Specifies the Archival target to copy the Snapshots to."),
        )
        .attribute(
            AttributeSchema::field(
                "archival_target_type",
                AttributeType::enumeration(&["Tape", "Cloud", "Nas"]),
            )
            .required()
            .with_description("Specifies the snapshot's archival target type from which recovery has been performed."),
        )
        .attribute(
            AttributeSchema::field("retention", AttributeType::block(retention()))
                .with_description("Specifies the retention of a backup."),
        )
        .attribute(
            AttributeSchema::field("copy_only_fully_successful", AttributeType::Bool)
                .with_description("Specifies if Snapshots are copied from a fully successful Protection Group Run or a partially successful Protection Group Run. If false, Snapshots are copied the Protection Group Run, even if the Run was not fully successful i.e. Snapshots were not captured for all Objects in the Protection Group. If true, Snapshots are copied only when the run is fully successful."),
        )
}

fn targets_config() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("use_policy_defaults", AttributeType::Bool)
                .with_description("Specifies whether to use default policy settings or not. If specified as true then 'replications' and 'archivals' should not be specified. In case of true value, replication targets configured in the policy will be added internally."),
        )
        .attribute(
            AttributeSchema::field("replications", AttributeType::block_list(replication_config()))
                .with_description("Specifies a list of replication targets configurations."),
        )
        .attribute(
            AttributeSchema::field("archivals", AttributeType::block_list(archival_config()))
                .with_description("Specifies a list of archival targets configurations."),
        )
}

pub fn protection_group_run_request_schema() -> ResourceSchema {
    let object = BlockSchema::new()
        .attribute(
            AttributeSchema::field("id", AttributeType::Int)
                .required()
                .with_description("Specifies the id of object."),
        )
        .attribute(
            AttributeSchema::field("app_ids", ints())
                .with_description("Specifies a list of ids of applications."),
        )
        .attribute(
            AttributeSchema::field(
                "physical_params",
                AttributeType::block(
                    BlockSchema::new()
                        .attribute(
                            AttributeSchema::field("metadata_file_path", AttributeType::String)
                                .with_description("Specifies metadata file path during run-now requests for physical file based backups for some specific source. If specified, it will override any default metadata/directive file path set at the object level for the source. Also note that if the job default does not specify a metadata/directive file path for the source, then specifying this field for that source during run-now request will be rejected."),
                        ),
                ),
            )
            .with_description("Specifies physical parameters for this run."),
        );

    ResourceSchema::new(PROTECTION_GROUP_RUN_REQUEST)
        .with_description("Triggers an on-demand run of a protection group.")
        .attribute(tenant_id_attribute())
        .attribute(
            AttributeSchema::new("group_id", AttributeType::String)
                .required()
                .with_description("Protection group to run."),
        )
        .attribute(
            AttributeSchema::field("run_type", AttributeType::enumeration(RUN_TYPES))
                .required()
                .with_description("Type of protection run."),
        )
        .attribute(
            AttributeSchema::field("objects", AttributeType::block_list(object))
                .with_description("Specifies the list of objects to be protected by this Protection Group run. These can be leaf objects or non-leaf objects in the protection hierarchy. This must be specified only if a subset of objects from the Protection Groups needs to be protected."),
        )
        .attribute(
            AttributeSchema::field("targets_config", AttributeType::block(targets_config()))
                .with_description("Specifies the replication and archival targets."),
        )
}
