//! Flutter-facing bindings for census data entry.

pub mod api;
