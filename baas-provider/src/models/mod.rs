//! Typed request and response bodies of the backup-and-recovery API
//!
//! Field names follow the backend's camelCase JSON. Every optional field is
//! an `Option` that is left out of the body when unset.

pub mod common;
pub mod group;
pub mod run;
pub mod run_request;

pub use common::*;
pub use group::*;
pub use run::*;
pub use run_request::*;
