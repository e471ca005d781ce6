//! Census schema definition and idempotent initializer.
//!
//! # Responsibility
//! - Create `person`, `household` and `address` tables on first use.
//! - Enable write-ahead-log journaling for file-backed stores.
//!
//! # Invariants
//! - Initialization is idempotent; existing rows are never touched.
//! - Schema version is mirrored to `PRAGMA user_version`.
//! - Declared link columns (`household.householdHead`, `address.household`)
//!   are nullable and never written by repositories.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

const SCHEMA_SQL: &str = include_str!("census.sql");

/// Schema version written by this binary.
pub const SCHEMA_VERSION: u32 = 1;

/// Tables owned by the census schema, in creation order.
pub const CENSUS_TABLES: &[&str] = &["person", "household", "address"];

/// Creates all census tables if missing and enables WAL journaling.
///
/// Safe to call on every app start.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file was written by a newer
///   schema.
/// - `DbError::Sqlite` for any pragma or DDL failure.
pub fn initialize_db(conn: &mut Connection) -> DbResult<()> {
    let current_version = schema_version(conn)?;
    if current_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: SCHEMA_VERSION,
        });
    }

    // journal_mode cannot change inside a transaction.
    let journal_mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    debug!("event=db_journal_mode module=db status=ok mode={journal_mode}");

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    if current_version < SCHEMA_VERSION {
        tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version stamped on the connection.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
