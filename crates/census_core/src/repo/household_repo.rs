//! Household repository over the `household` table.
//!
//! Only `numberOfPersons`, `residenceType` and `houseHoldIncome` are written;
//! the person-linking columns stay NULL.

use crate::model::household::{Household, HouseholdFields};
use crate::model::RecordId;
use crate::repo::{ensure_table_columns, read_column, RecordRepository, RepoResult};
use rusqlite::{params, Connection, Row};

const HOUSEHOLD_TABLE: &str = "household";

const HOUSEHOLD_COLUMNS: &[&str] = &["id", "numberOfPersons", "residenceType", "houseHoldIncome"];

/// SQLite-backed household repository.
pub struct SqliteHouseholdRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteHouseholdRepository<'conn> {
    /// Binds the repository to an initialized connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_columns(conn, HOUSEHOLD_TABLE, HOUSEHOLD_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteHouseholdRepository<'_> {
    type Fields = HouseholdFields;
    type Record = Household;

    const ENTITY: &'static str = HOUSEHOLD_TABLE;

    fn add(&self, fields: &HouseholdFields) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO household (numberOfPersons, residenceType, houseHoldIncome)
             VALUES (?1, ?2, ?3);",
            params![
                fields.number_of_persons,
                fields.residence_type,
                fields.house_hold_income,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, fields: &HouseholdFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE household
             SET
                numberOfPersons = ?1,
                residenceType = ?2,
                houseHoldIncome = ?3
             WHERE id = ?4;",
            params![
                fields.number_of_persons,
                fields.residence_type,
                fields.house_hold_income,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM household WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn list(&self) -> RepoResult<Vec<Household>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, numberOfPersons, residenceType, houseHoldIncome
             FROM household
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut households = Vec::new();

        while let Some(row) = rows.next()? {
            households.push(parse_household_row(row)?);
        }

        Ok(households)
    }
}

fn parse_household_row(row: &Row<'_>) -> RepoResult<Household> {
    Ok(Household {
        id: read_column(row, HOUSEHOLD_TABLE, "id")?,
        fields: HouseholdFields {
            number_of_persons: read_column(row, HOUSEHOLD_TABLE, "numberOfPersons")?,
            residence_type: read_column(row, HOUSEHOLD_TABLE, "residenceType")?,
            house_hold_income: read_column(row, HOUSEHOLD_TABLE, "houseHoldIncome")?,
        },
    })
}
