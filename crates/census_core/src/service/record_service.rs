//! Fail-soft record service.
//!
//! # Responsibility
//! - Expose add/update/delete/list over any `RecordRepository`.
//! - Convert repository errors into logged, success-shaped outcomes.
//!
//! # Invariants
//! - Service APIs never return an error and never panic.
//! - A failed `add` yields `None`; a failed `list` yields an empty vector;
//!   failed `update`/`delete` calls are logged and dropped.
//! - Log events carry ids and error text only, never field values.

use crate::model::RecordId;
use crate::repo::RecordRepository;
use log::{debug, error, info, warn};

/// Fail-soft wrapper used by form-facing callers.
///
/// Callers that must tell failure apart from success use the repository
/// directly via [`RecordService::repository`].
pub struct RecordService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> RecordService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the wrapped repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Inserts a record. Returns `None` when the store rejects the write.
    pub fn add(&self, fields: &R::Fields) -> Option<RecordId> {
        match self.repo.add(fields) {
            Ok(id) => {
                info!("event={}_add module=service status=ok id={id}", R::ENTITY);
                Some(id)
            }
            Err(err) => {
                error!(
                    "event={}_add module=service status=error error={err}",
                    R::ENTITY
                );
                None
            }
        }
    }

    /// Overwrites record `id`. Missing ids and store errors are logged only.
    pub fn update(&self, id: RecordId, fields: &R::Fields) {
        match self.repo.update(id, fields) {
            Ok(true) => info!("event={}_update module=service status=ok id={id}", R::ENTITY),
            Ok(false) => warn!(
                "event={}_update module=service status=noop id={id}",
                R::ENTITY
            ),
            Err(err) => error!(
                "event={}_update module=service status=error id={id} error={err}",
                R::ENTITY
            ),
        }
    }

    /// Removes record `id`. Missing ids and store errors are logged only.
    pub fn delete(&self, id: RecordId) {
        match self.repo.delete(id) {
            Ok(true) => info!("event={}_delete module=service status=ok id={id}", R::ENTITY),
            Ok(false) => warn!(
                "event={}_delete module=service status=noop id={id}",
                R::ENTITY
            ),
            Err(err) => error!(
                "event={}_delete module=service status=error id={id} error={err}",
                R::ENTITY
            ),
        }
    }

    /// Lists every record, or nothing when the store read fails.
    pub fn list(&self) -> Vec<R::Record> {
        match self.repo.list() {
            Ok(records) => {
                debug!(
                    "event={}_list module=service status=ok count={}",
                    R::ENTITY,
                    records.len()
                );
                records
            }
            Err(err) => {
                error!(
                    "event={}_list module=service status=error error={err}",
                    R::ENTITY
                );
                Vec::new()
            }
        }
    }
}
