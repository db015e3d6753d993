//! Backup & Recovery Core
//!
//! Provider-agnostic building blocks: the generic value tree, the schema
//! registry, schema-driven flatten/expand conversion and the Provider trait.

pub mod convert;
pub mod provider;
pub mod resource;
pub mod schema;
