//! Resource type and data source definitions
//!
//! Each type pairs a DSL name with the schema builder in [`crate::schemas`].

use baas_core::provider::ResourceType;
use baas_core::schema::ResourceSchema;

use crate::schemas::{group, run, run_request, run_update_request};

macro_rules! define_resource_type {
    ($name:ident, $type_name:expr, $schema:path) => {
        pub struct $name;
        impl ResourceType for $name {
            fn name(&self) -> &'static str {
                $type_name
            }
            fn schema(&self) -> ResourceSchema {
                $schema()
            }
        }
    };
}

define_resource_type!(
    ProtectionGroupType,
    group::PROTECTION_GROUP,
    group::protection_group_schema
);
define_resource_type!(
    ProtectionGroupRunRequestType,
    run_request::PROTECTION_GROUP_RUN_REQUEST,
    run_request::protection_group_run_request_schema
);
define_resource_type!(
    ProtectionGroupRunUpdateRequestType,
    run_update_request::PROTECTION_GROUP_RUN_UPDATE_REQUEST,
    run_update_request::protection_group_run_update_request_schema
);
define_resource_type!(
    ProtectionGroupRunType,
    run::PROTECTION_GROUP_RUN,
    run::protection_group_run_schema
);
define_resource_type!(
    ProtectionGroupRunsType,
    run::PROTECTION_GROUP_RUNS,
    run::protection_group_runs_schema
);
define_resource_type!(
    ProtectionGroupsType,
    group::PROTECTION_GROUPS,
    group::protection_groups_schema
);

/// Returns all resource types and data sources supported by this provider
pub fn resource_types() -> Vec<Box<dyn ResourceType>> {
    vec![
        Box::new(ProtectionGroupType),
        Box::new(ProtectionGroupRunRequestType),
        Box::new(ProtectionGroupRunUpdateRequestType),
        Box::new(ProtectionGroupRunType),
        Box::new(ProtectionGroupRunsType),
        Box::new(ProtectionGroupsType),
    ]
}
