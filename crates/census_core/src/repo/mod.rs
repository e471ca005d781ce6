//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define one CRUD contract shared by every census table.
//! - Isolate SQLite query details from service and FFI orchestration.
//!
//! # Invariants
//! - Repositories never validate field content; the store accepts any value
//!   the column types allow.
//! - `update`/`delete` on a missing id are no-ops reported as `Ok(false)`.
//! - Repositories are only constructed over connections that carry every
//!   table/column they touch (`try_new`).

use crate::db::DbError;
use crate::model::RecordId;
use rusqlite::types::FromSql;
use rusqlite::{Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod address_repo;
pub mod household_repo;
pub mod person_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for census persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; initialize the database first")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// CRUD contract implemented once per census table.
pub trait RecordRepository {
    /// Writable field tuple accepted by `add`/`update`.
    type Fields;
    /// Stored row returned by `list`.
    type Record;

    /// Table name; also the prefix of service log events.
    const ENTITY: &'static str;

    /// Inserts a row and returns the id assigned by the store.
    fn add(&self, fields: &Self::Fields) -> RepoResult<RecordId>;
    /// Overwrites every field of row `id`. Returns whether a row matched.
    fn update(&self, id: RecordId, fields: &Self::Fields) -> RepoResult<bool>;
    /// Removes row `id`. Returns whether a row matched.
    fn delete(&self, id: RecordId) -> RepoResult<bool>;
    /// Returns every row in storage (id) order.
    fn list(&self) -> RepoResult<Vec<Self::Record>>;
}

/// Checks that `table` exists and carries every column in `columns`.
pub(crate) fn ensure_table_columns(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let existing = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<Result<HashSet<_>, _>>()?;

    if existing.is_empty() {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !existing.contains(column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

/// Reads one column, reporting undecodable values as `RepoError::InvalidData`.
pub(crate) fn read_column<T: FromSql>(row: &Row<'_>, table: &str, column: &str) -> RepoResult<T> {
    row.get(column).map_err(|err| match err {
        rusqlite::Error::InvalidColumnType(_, _, kind) => {
            RepoError::InvalidData(format!("unexpected {kind} value in {table}.{column}"))
        }
        rusqlite::Error::FromSqlConversionFailure(_, kind, source) => RepoError::InvalidData(
            format!("cannot convert {kind} value in {table}.{column}: {source}"),
        ),
        rusqlite::Error::IntegralValueOutOfRange(_, value) => {
            RepoError::InvalidData(format!("out-of-range value {value} in {table}.{column}"))
        }
        other => other.into(),
    })
}
