//! Backup & Recovery Provider
//!
//! Manages protection groups and on-demand runs of a backup-and-recovery
//! service through its REST API.
//!
//! ## Module Structure
//!
//! - `client` - HTTP client for the REST API
//! - `config` - Endpoint, token and default tenant settings
//! - `models` - Typed request and response bodies
//! - `schemas` - Resource and data source schemas
//! - `resources` - Resource type definitions
//! - `provider` - BackupRecoveryProvider implementation

pub mod client;
pub mod config;
pub mod models;
pub mod provider;
pub mod resources;
pub mod schemas;

// Re-export main types
pub use client::{ApiError, BackupRecoveryClient};
pub use config::ProviderConfig;
pub use provider::BackupRecoveryProvider;

use baas_core::provider::{BoxFuture, Provider, ProviderError, ProviderResult};
use baas_core::resource::{Resource, ResourceId, State};

use resources::resource_types;
use schemas::{
    PROTECTION_GROUP, PROTECTION_GROUP_RUN, PROTECTION_GROUP_RUN_REQUEST,
    PROTECTION_GROUP_RUN_UPDATE_REQUEST, PROTECTION_GROUP_RUNS, PROTECTION_GROUPS,
};

fn unsupported(id: &ResourceId) -> ProviderError {
    ProviderError::new(format!("Unknown resource type: {}", id.resource_type))
        .for_resource(id.clone())
}

// =============================================================================
// Provider Trait Implementation
// =============================================================================

impl Provider for BackupRecoveryProvider {
    fn name(&self) -> &'static str {
        "backup_recovery"
    }

    fn resource_types(&self) -> Vec<Box<dyn baas_core::provider::ResourceType>> {
        resource_types()
    }

    fn read(
        &self,
        id: &ResourceId,
        identifier: &str,
        prior: &State,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let prior = prior.clone();
        Box::pin(async move {
            match id.resource_type.as_str() {
                PROTECTION_GROUP => {
                    self.read_protection_group(&id, &identifier, &prior)
                        .await
                }
                // Nothing to read back; run requests live only in state
                PROTECTION_GROUP_RUN_REQUEST | PROTECTION_GROUP_RUN_UPDATE_REQUEST => {
                    Ok(State::existing(id, prior.attributes).with_identifier(identifier))
                }
                _ => Err(unsupported(&id)),
            }
        })
    }

    fn create(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move {
            match resource.id.resource_type.as_str() {
                PROTECTION_GROUP => self.create_protection_group(&resource).await,
                PROTECTION_GROUP_RUN_REQUEST => self.create_run_request(&resource).await,
                PROTECTION_GROUP_RUN_UPDATE_REQUEST => {
                    self.update_protection_group_runs(&resource).await
                }
                _ => Err(unsupported(&resource.id)),
            }
        })
    }

    fn update(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> BoxFuture<'_, ProviderResult<State>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let from = from.clone();
        let to = to.clone();
        Box::pin(async move {
            match id.resource_type.as_str() {
                PROTECTION_GROUP => self.update_protection_group(&id, &identifier, &to).await,
                PROTECTION_GROUP_RUN_REQUEST => Err(ProviderError::new(
                    "A run request cannot be updated; destroy it and create a new one",
                )
                .for_resource(id)),
                PROTECTION_GROUP_RUN_UPDATE_REQUEST => {
                    log::warn!("{} cannot be updated; no changes will be applied", id);
                    Ok(State::existing(id, from.attributes).with_identifier(identifier))
                }
                _ => Err(unsupported(&id)),
            }
        })
    }

    fn delete(
        &self,
        id: &ResourceId,
        identifier: &str,
        prior: &State,
    ) -> BoxFuture<'_, ProviderResult<()>> {
        let id = id.clone();
        let identifier = identifier.to_string();
        let prior = prior.clone();
        Box::pin(async move {
            match id.resource_type.as_str() {
                PROTECTION_GROUP => {
                    self.delete_protection_group(&id, &identifier, &prior)
                        .await
                }
                PROTECTION_GROUP_RUN_REQUEST => {
                    log::warn!(
                        "{} removed from state only; the run itself is not cancelled",
                        id
                    );
                    Ok(())
                }
                PROTECTION_GROUP_RUN_UPDATE_REQUEST => {
                    log::warn!(
                        "{} removed from state only; updated snapshots keep their new settings",
                        id
                    );
                    Ok(())
                }
                _ => Err(unsupported(&id)),
            }
        })
    }

    fn read_data_source(&self, resource: &Resource) -> BoxFuture<'_, ProviderResult<State>> {
        let resource = resource.clone();
        Box::pin(async move {
            match resource.id.resource_type.as_str() {
                PROTECTION_GROUP_RUN => self.read_protection_group_run(&resource).await,
                PROTECTION_GROUP_RUNS => self.read_protection_group_runs(&resource).await,
                PROTECTION_GROUPS => self.read_protection_groups(&resource).await,
                _ => Err(unsupported(&resource.id)),
            }
        })
    }
}
