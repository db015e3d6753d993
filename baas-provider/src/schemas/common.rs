//! Block schemas shared by several resources and data sources

use baas_core::schema::{AttributeSchema, AttributeType, BlockSchema};

/// Backend status values a run, an attempt or a copy target can report
pub const RUN_STATUSES: &[&str] = crate::models::RunStatus::ALL;

pub const SNAPSHOT_STATUSES: &[&str] = &[
    "kInProgress",
    "kSuccessful",
    "kFailed",
    "kWaitingForNextAttempt",
    "kWarning",
    "kCurrentAttemptPaused",
    "kCurrentAttemptResuming",
    "kCurrentAttemptPausing",
    "kWaitingForOlderBackupRun",
];

pub const DATA_LOCK_MODES: &[&str] = &["Compliance", "Administrative"];

/// Shorthand for a list of strings
pub fn strings() -> AttributeType {
    AttributeType::list(AttributeType::String)
}

/// Shorthand for a list of integers
pub fn ints() -> AttributeType {
    AttributeType::list(AttributeType::Int)
}

/// Tenant header attribute; sent as `X-IBM-Tenant-Id`, never in a body
pub fn tenant_id_attribute() -> AttributeSchema {
    AttributeSchema::new("x_ibm_tenant_id", AttributeType::String)
        .required()
        .with_description("Id of the tenant accessing the cluster.")
}

pub fn tenant() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("id", AttributeType::String)
                .with_description("The tenant id."),
        )
        .attribute(
            AttributeSchema::field("name", AttributeType::String)
                .with_description("Name of the Tenant."),
        )
}

pub fn cluster_identifier() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("cluster_id", AttributeType::Int)
                .with_description("Specifies the id of the cluster."),
        )
        .attribute(
            AttributeSchema::field("cluster_incarnation_id", AttributeType::Int)
                .with_description("Specifies the incarnation id of the cluster."),
        )
        .attribute(
            AttributeSchema::field("cluster_name", AttributeType::String)
                .with_description("Specifies the name of the cluster."),
        )
}

pub fn key_value_pair() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("key", AttributeType::String)
                .required()
                .with_description("key."),
        )
        .attribute(
            AttributeSchema::field("value", AttributeType::String)
                .required()
                .with_description("value."),
        )
}

pub fn data_lock_constraints() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("mode", AttributeType::enumeration(DATA_LOCK_MODES))
                .with_description("WORM retention type."),
        )
        .attribute(
            AttributeSchema::field("expiry_time_usecs", AttributeType::Int)
                .with_description("Expiry time in microseconds since the epoch."),
        )
}

pub fn time_of_day() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("hour", AttributeType::Int)
                .required()
                .with_description("Hour of the day (0-23)."),
        )
        .attribute(
            AttributeSchema::field("minute", AttributeType::Int)
                .required()
                .with_description("Minute of the hour (0-59)."),
        )
        .attribute(
            AttributeSchema::field("time_zone", AttributeType::String)
                .optional_computed()
                .with_description("Time zone of the user. The backend assumes America/Los_Angeles when unset."),
        )
}

pub fn indexing_policy() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("enable_indexing", AttributeType::Bool)
                .required()
                .with_description("Specifies if the files found in an Object (such as a VM) should be indexed. If true (the default), files are indexed."),
        )
        .attribute(
            AttributeSchema::field("include_paths", strings())
                .with_description("Array of Indexed Directories. Specifies a list of directories to index. Regular expression can also be specified to provide the directory paths. Example: /Users/<wildcard>/AppData."),
        )
        .attribute(
            AttributeSchema::field("exclude_paths", strings())
                .with_description("Array of Excluded Directories. Specifies a list of directories to exclude from indexing.Regular expression can also be specified to provide the directory paths. Example: /Users/<wildcard>/AppData."),
        )
}

fn script_fields() -> BlockSchema {
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("path", AttributeType::String)
                .required()
                .with_description("Specifies the absolute path to the script on the remote host."),
        )
        .attribute(
            AttributeSchema::field("params", AttributeType::String)
                .with_description("Specifies the arguments or parameters and values to pass into the remote script. For example if the script expects values for the 'database' and 'user' parameters, specify the parameters and values using the following string: \"database=myDatabase user=me\"."),
        )
        .attribute(
            AttributeSchema::field("timeout_secs", AttributeType::Int)
                .with_description("Specifies the timeout of the script in seconds. The script will be killed if it exceeds this value. By default, no timeout will occur if left empty."),
        )
        .attribute(
            AttributeSchema::field("is_active", AttributeType::Bool)
                .with_description("Specifies whether the script should be enabled, default value set to true."),
        )
}

pub fn pre_post_script() -> BlockSchema {
    let pre = script_fields()
        .attribute(
            AttributeSchema::field("continue_on_error", AttributeType::Bool)
                .with_description("Specifies if the script needs to continue even if there is an occurrence of an error. If this flag is set to true, then Backup Run will start even if the pre backup script fails. If not specified or false, then backup run will not start when script fails."),
        );
    BlockSchema::new()
        .attribute(
            AttributeSchema::field("pre_script", AttributeType::block(pre))
                .with_description("Specifies the common params for PreBackup scripts."),
        )
        .attribute(
            AttributeSchema::field("post_script", AttributeType::block(script_fields()))
                .with_description("Specifies the common params for PostBackup scripts."),
        )
}
