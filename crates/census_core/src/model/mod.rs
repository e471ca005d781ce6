//! Census record models.
//!
//! # Responsibility
//! - Define the person/household/address records shared by repositories,
//!   services and the FFI layer.
//! - Separate the writable field tuple (`*Fields`) from the stored record.
//!
//! # Invariants
//! - Every stored record is identified by a surrogate `RecordId` assigned by
//!   the store on insert.
//! - Serialized names match persisted column names.

pub mod address;
pub mod household;
pub mod person;

/// Surrogate auto-incrementing row identity, unique per table.
pub type RecordId = i64;
