//! Core query layer for the family heritage dataset.
//! This crate is the single source of truth for relationship resolution.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use dataset::{embedded_members, from_json_str, DatasetError, DatasetResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Generation, Person, PersonId, PersonValidationError};
pub use query::family::{immediate_family, FamilyView};
pub use query::search::{search_members, SearchQuery};
pub use service::heritage_service::HeritageService;
pub use store::consistency::{ConsistencyIssue, RelationField};
pub use store::family_store::{FamilyStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
