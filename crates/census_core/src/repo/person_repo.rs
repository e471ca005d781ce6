//! Person repository over the `person` table.
//!
//! # Invariants
//! - Every write binds each column to its own field; `update` overwrites all
//!   nine fields at once.

use crate::model::person::{Person, PersonFields};
use crate::model::RecordId;
use crate::repo::{ensure_table_columns, read_column, RecordRepository, RepoResult};
use rusqlite::{params, Connection, Row};

const PERSON_TABLE: &str = "person";

const PERSON_COLUMNS: &[&str] = &[
    "id",
    "firstName",
    "lastName",
    "phone",
    "email",
    "occupation",
    "province",
    "district",
    "date",
    "gender",
];

const PERSON_SELECT_SQL: &str = "SELECT
    id,
    firstName,
    lastName,
    phone,
    email,
    occupation,
    province,
    district,
    date,
    gender
FROM person";

/// SQLite-backed person repository.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    /// Binds the repository to an initialized connection.
    ///
    /// # Errors
    /// - `RepoError::MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   schema has not been initialized on `conn`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_columns(conn, PERSON_TABLE, PERSON_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RecordRepository for SqlitePersonRepository<'_> {
    type Fields = PersonFields;
    type Record = Person;

    const ENTITY: &'static str = PERSON_TABLE;

    fn add(&self, fields: &PersonFields) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO person (
                firstName,
                lastName,
                phone,
                email,
                occupation,
                province,
                district,
                date,
                gender
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                fields.first_name,
                fields.last_name,
                fields.phone,
                fields.email,
                fields.occupation,
                fields.province,
                fields.district,
                fields.date,
                fields.gender,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, fields: &PersonFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE person
             SET
                firstName = ?1,
                lastName = ?2,
                phone = ?3,
                email = ?4,
                occupation = ?5,
                province = ?6,
                district = ?7,
                date = ?8,
                gender = ?9
             WHERE id = ?10;",
            params![
                fields.first_name,
                fields.last_name,
                fields.phone,
                fields.email,
                fields.occupation,
                fields.province,
                fields.district,
                fields.date,
                fields.gender,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM person WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn list(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut persons = Vec::new();

        while let Some(row) = rows.next()? {
            persons.push(parse_person_row(row)?);
        }

        Ok(persons)
    }
}

fn parse_person_row(row: &Row<'_>) -> RepoResult<Person> {
    Ok(Person {
        id: read_column(row, PERSON_TABLE, "id")?,
        fields: PersonFields {
            first_name: read_column(row, PERSON_TABLE, "firstName")?,
            last_name: read_column(row, PERSON_TABLE, "lastName")?,
            phone: read_column(row, PERSON_TABLE, "phone")?,
            email: read_column(row, PERSON_TABLE, "email")?,
            occupation: read_column(row, PERSON_TABLE, "occupation")?,
            province: read_column(row, PERSON_TABLE, "province")?,
            district: read_column(row, PERSON_TABLE, "district")?,
            date: read_column(row, PERSON_TABLE, "date")?,
            gender: read_column(row, PERSON_TABLE, "gender")?,
        },
    })
}
