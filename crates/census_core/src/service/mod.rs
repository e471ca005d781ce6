//! Core use-case services.
//!
//! # Responsibility
//! - Wrap repository calls with the fail-soft policy the form screens expect.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod record_service;
