//! Core persistence layer for census data entry.
//! This crate owns the local store schema and every read/write of
//! person, household and address records.

pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{initialize_db, open_db, open_db_in_memory, DbError, DbResult};
pub use form::{AddressForm, FormError, HouseholdForm, PersonForm, FILL_ALL_FIELDS_MESSAGE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{Address, AddressFields};
pub use model::household::{Household, HouseholdFields};
pub use model::person::{Person, PersonFields};
pub use model::RecordId;
pub use repo::address_repo::SqliteAddressRepository;
pub use repo::household_repo::SqliteHouseholdRepository;
pub use repo::person_repo::SqlitePersonRepository;
pub use repo::{RecordRepository, RepoError, RepoResult};
pub use service::record_service::RecordService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
