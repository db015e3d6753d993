//! Resource and data source schemas of the backup-and-recovery provider

pub mod common;
pub mod group;
pub mod run;
pub mod run_request;
pub mod run_update_request;

use baas_core::schema::ResourceSchema;

pub use group::{PROTECTION_GROUP, PROTECTION_GROUPS};
pub use run::{PROTECTION_GROUP_RUN, PROTECTION_GROUP_RUNS};
pub use run_request::PROTECTION_GROUP_RUN_REQUEST;
pub use run_update_request::PROTECTION_GROUP_RUN_UPDATE_REQUEST;

/// Returns every resource and data source schema
pub fn all_schemas() -> Vec<ResourceSchema> {
    vec![
        group::protection_group_schema(),
        run_request::protection_group_run_request_schema(),
        run_update_request::protection_group_run_update_request_schema(),
        run::protection_group_run_schema(),
        run::protection_group_runs_schema(),
        group::protection_groups_schema(),
    ]
}

/// Look up a schema by resource type name
pub fn get_schema(resource_type: &str) -> Option<ResourceSchema> {
    match resource_type {
        PROTECTION_GROUP => Some(group::protection_group_schema()),
        PROTECTION_GROUP_RUN_REQUEST => Some(run_request::protection_group_run_request_schema()),
        PROTECTION_GROUP_RUN_UPDATE_REQUEST => {
            Some(run_update_request::protection_group_run_update_request_schema())
        }
        PROTECTION_GROUP_RUN => Some(run::protection_group_run_schema()),
        PROTECTION_GROUP_RUNS => Some(run::protection_group_runs_schema()),
        PROTECTION_GROUPS => Some(group::protection_groups_schema()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baas_core::schema::AttributeSchema;
    use std::collections::HashMap;

    fn undescribed(
        attributes: &HashMap<String, AttributeSchema>,
        path: &str,
        out: &mut Vec<String>,
    ) {
        for (name, attr) in attributes {
            let attr_path = if path.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", path, name)
            };
            if attr.description.as_deref().is_none_or(str::is_empty) {
                out.push(attr_path.clone());
            }
            if let Some(block) = attr.attr_type.nested() {
                undescribed(&block.attributes, &attr_path, out);
            }
        }
    }

    #[test]
    fn every_attribute_is_described() {
        for schema in all_schemas() {
            let mut missing = Vec::new();
            undescribed(&schema.attributes, "", &mut missing);
            missing.sort();
            assert!(missing.is_empty(), "{}: {:?}", schema.resource_type, missing);
            assert!(schema.description.is_some(), "{}", schema.resource_type);
        }
    }

    #[test]
    fn every_schema_is_reachable_by_name() {
        for schema in all_schemas() {
            let found = get_schema(&schema.resource_type).unwrap();
            assert_eq!(found.kind, schema.kind);
        }
        assert!(get_schema("vpc").is_none());
    }
}
