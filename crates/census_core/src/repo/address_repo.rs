//! Address repository over the `address` table.

use crate::model::address::{Address, AddressFields};
use crate::model::RecordId;
use crate::repo::{ensure_table_columns, read_column, RecordRepository, RepoResult};
use rusqlite::{params, Connection, Row};

const ADDRESS_TABLE: &str = "address";

const ADDRESS_COLUMNS: &[&str] = &["id", "street", "city", "province", "zipCode"];

/// SQLite-backed address repository.
pub struct SqliteAddressRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressRepository<'conn> {
    /// Binds the repository to an initialized connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_columns(conn, ADDRESS_TABLE, ADDRESS_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteAddressRepository<'_> {
    type Fields = AddressFields;
    type Record = Address;

    const ENTITY: &'static str = ADDRESS_TABLE;

    fn add(&self, fields: &AddressFields) -> RepoResult<RecordId> {
        self.conn.execute(
            "INSERT INTO address (street, city, province, zipCode)
             VALUES (?1, ?2, ?3, ?4);",
            params![fields.street, fields.city, fields.province, fields.zip_code],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: RecordId, fields: &AddressFields) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE address
             SET
                street = ?1,
                city = ?2,
                province = ?3,
                zipCode = ?4
             WHERE id = ?5;",
            params![
                fields.street,
                fields.city,
                fields.province,
                fields.zip_code,
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM address WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn list(&self) -> RepoResult<Vec<Address>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, street, city, province, zipCode
             FROM address
             ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut addresses = Vec::new();

        while let Some(row) = rows.next()? {
            addresses.push(parse_address_row(row)?);
        }

        Ok(addresses)
    }
}

fn parse_address_row(row: &Row<'_>) -> RepoResult<Address> {
    Ok(Address {
        id: read_column(row, ADDRESS_TABLE, "id")?,
        fields: AddressFields {
            street: read_column(row, ADDRESS_TABLE, "street")?,
            city: read_column(row, ADDRESS_TABLE, "city")?,
            province: read_column(row, ADDRESS_TABLE, "province")?,
            zip_code: read_column(row, ADDRESS_TABLE, "zipCode")?,
        },
    })
}
