//! Run update request schema
//!
//! Changes the retention, legal hold and copies of snapshots that existing
//! runs of a protection group already took.

use baas_core::schema::{AttributeSchema, AttributeType, BlockSchema, ResourceSchema};

use super::common::{strings, tenant_id_attribute, DATA_LOCK_MODES};
use super::run_request::{archival_config, replication_config};

pub const PROTECTION_GROUP_RUN_UPDATE_REQUEST: &str = "protection_group_run_update_request";

const LEGAL_HOLD: &str = "Specifies whether to retain the snapshot for legal purpose. If set to true, the snapshots cannot be deleted until the retention period. Note that using this option may cause the Cluster to run out of space. If set to false explicitly, the hold is removed, and the snapshots will expire as specified in the policy of the Protection Group. If this field is not specified, there is no change to the hold of the run. This field can be set only by a User having Data Security Role.";
const DELETE_SNAPSHOT: &str = "Specifies whether to delete the snapshot. When this is set to true, all other params will be ignored.";
const DATA_LOCK: &str = "Specifies WORM retention type for the snapshots. When a WORM retention type is specified, the snapshots of the Protection Groups using this policy will be kept until the maximum of the snapshot retention time. During that time, the snapshots cannot be deleted. 'Compliance' implies WORM retention is set for compliance reason. 'Administrative' implies WORM retention is set for administrative purposes.";
const DAYS_TO_KEEP: &str = "Specifies number of days to retain the snapshots. If positive, then this value is added to existing expiry time thereby increasing the retention period of the snapshot. Conversely, if this value is negative, then value is subtracted from the existing expiry time thereby decreasing the retention period of the snapshot. If the expiry time goes below the current time, the snapshot is deleted immediately.";

/// Legal hold, deletion, lock and expiry changes shared by every snapshot kind
fn snapshot_changes(block: BlockSchema) -> BlockSchema {
    block
        .attribute(
            AttributeSchema::field("enable_legal_hold", AttributeType::Bool)
                .with_description(LEGAL_HOLD),
        )
        .attribute(
            AttributeSchema::field("delete_snapshot", AttributeType::Bool)
                .with_description(DELETE_SNAPSHOT),
        )
        .attribute(
            AttributeSchema::field("data_lock", AttributeType::enumeration(DATA_LOCK_MODES))
                .with_description(DATA_LOCK),
        )
        .attribute(
            AttributeSchema::field("days_to_keep", AttributeType::Int)
                .with_description(DAYS_TO_KEEP),
        )
}

fn replication_snapshot_config() -> BlockSchema {
    let existing = snapshot_changes(BlockSchema::new())
        .attribute(
            AttributeSchema::field("id", AttributeType::Int)
                .required()
                .with_description("Specifies the cluster id of the replication cluster."),
        )
        .attribute(
            AttributeSchema::field("resync", AttributeType::Bool)
                .with_description("Specifies whether to retry the replication operation in case if earlier attempt failed. If not specified or set to false, replication is not retried."),
        );

    BlockSchema::new()
        .attribute(
            AttributeSchema::field("new_snapshot_config", AttributeType::block_list(replication_config()))
                .with_description("Specifies the new configuration about adding Replication Snapshot to existing Protection Group Run."),
        )
        .attribute(
            AttributeSchema::field("update_existing_snapshot_config", AttributeType::block_list(existing))
                .with_description("Specifies the configuration about updating an existing Replication Snapshot Run."),
        )
}

fn archival_snapshot_config() -> BlockSchema {
    let existing = snapshot_changes(BlockSchema::new())
        .attribute(
            AttributeSchema::field("id", AttributeType::Int)
                .required()
                .with_description("Specifies the id of the archival target."),
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
            AttributeSchema::field("resync", AttributeType::Bool)
                .with_description("Specifies whether to retry the archival operation in case if earlier attempt failed. If not specified or set to false, archival is not retried."),
        );

    BlockSchema::new()
        .attribute(
            AttributeSchema::field("new_snapshot_config", AttributeType::block_list(archival_config()))
                .with_description("Specifies the new configuration about adding Archival Snapshot to existing Protection Group Run."),
        )
        .attribute(
            AttributeSchema::field("update_existing_snapshot_config", AttributeType::block_list(existing))
                .with_description("Specifies the configuration about updating an existing Archival Snapshot Run."),
        )
}

fn update_run_params() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("run_id", AttributeType::String)
                .required()
                .with_description("Specifies a unique Protection Group Run id."),
        )
        .attribute(
            AttributeSchema::field(
                "local_snapshot_config",
                AttributeType::block(snapshot_changes(BlockSchema::new())),
            )
            .with_description("Specifies the params to perform actions on local snapshot taken by a Protection Group Run."),
        )
        .attribute(
            AttributeSchema::field(
                "replication_snapshot_config",
                AttributeType::block(replication_snapshot_config()),
            )
            .with_description("Specifies the params to perform actions on replication snapshots taken by a Protection Group Run."),
        )
        .attribute(
            AttributeSchema::field(
                "archival_snapshot_config",
                AttributeType::block(archival_snapshot_config()),
            )
            .with_description("Specifies the params to perform actions on archival snapshots taken by a Protection Group Run."),
        )
}

pub fn protection_group_run_update_request_schema() -> ResourceSchema {
    let failed_run = BlockSchema::new()
        .attribute(
            AttributeSchema::field("run_id", AttributeType::String)
                .with_description("Specifies the id of the run that could not be updated."),
        )
        .attribute(
            AttributeSchema::field("error_message", AttributeType::String)
                .with_description("Specifies why the run could not be updated."),
        )
        .into_computed();

    ResourceSchema::new(PROTECTION_GROUP_RUN_UPDATE_REQUEST)
        .with_description("Updates the snapshots taken by existing runs of a protection group.")
        .attribute(tenant_id_attribute())
        .attribute(
            AttributeSchema::new("group_id", AttributeType::String)
                .required()
                .with_description("Protection group whose runs are updated."),
        )
        .attribute(
            AttributeSchema::field("update_protection_group_run_params", AttributeType::block_list(update_run_params()))
                .required()
                .with_description("Specifies the changes to apply, one entry per run."),
        )
        .attribute(
            AttributeSchema::field("successful_run_ids", strings())
                .computed()
                .with_description("Specifies the ids of the runs that were updated."),
        )
        .attribute(
            AttributeSchema::field("failed_runs", AttributeType::block_list(failed_run))
                .computed()
                .with_description("Specifies the runs that could not be updated and why."),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::resource::Value;
    use baas_core::schema::Mutability;
    use std::collections::HashMap;

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn outcome_attributes_are_computed() {
        let schema = protection_group_run_update_request_schema();
        assert_eq!(
            schema.attributes["successful_run_ids"].mutability,
            Mutability::Computed
        );
        let failed = schema.attributes["failed_runs"].attr_type.nested().unwrap();
        assert_eq!(failed.attributes["error_message"].mutability, Mutability::Computed);
    }

    #[test]
    fn existing_archival_copy_needs_target_type() {
        let schema = protection_group_run_update_request_schema();
        let params = map(vec![
            ("run_id", Value::String("4205:1:26".to_string())),
            (
                "archival_snapshot_config",
                Value::List(vec![map(vec![(
                    "update_existing_snapshot_config",
                    Value::List(vec![map(vec![("id", Value::Int(7))])]),
                )])]),
            ),
        ]);
        let attributes = HashMap::from([
            ("x_ibm_tenant_id".to_string(), Value::String("tenant/".to_string())),
            ("group_id".to_string(), Value::String("4205:1:38".to_string())),
            (
                "update_protection_group_run_params".to_string(),
                Value::List(vec![params]),
            ),
        ]);
        let errors = schema.validate(&attributes).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("archival_target_type")),
            "{:?}",
            errors
        );
    }
}
