use census_core::db::{
    initialize_db, open_db, open_db_in_memory, schema_version, DbError, CENSUS_TABLES,
    SCHEMA_VERSION,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_all_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    for table in CENSUS_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn file_database_uses_wal_journal_mode() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_db(dir.path().join("census.sqlite3")).unwrap();

    let mode: String = conn
        .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "wal");
}

#[test]
fn initialize_twice_keeps_tables_and_rows() {
    let mut conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO address (street, city, province, zipCode) VALUES ('1 Main', 'Town', 'ProvA', 1000);",
        [],
    )
    .unwrap();

    initialize_db(&mut conn).unwrap();
    initialize_db(&mut conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM address;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(table_names(&conn), vec!["address", "household", "person"]);
}

#[test]
fn reopening_same_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("census.sqlite3");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO household (numberOfPersons, residenceType, houseHoldIncome) VALUES (2, 'flat', 10.5);",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM household;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn declared_link_columns_are_nullable_and_unset() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO household (numberOfPersons, residenceType, houseHoldIncome) VALUES (1, 'hut', 0);",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO address (street, city, province, zipCode) VALUES ('s', 'c', 'p', 1);",
        [],
    )
    .unwrap();

    let head: Option<i64> = conn
        .query_row("SELECT householdHead FROM household;", [], |row| row.get(0))
        .unwrap();
    let household: Option<i64> = conn
        .query_row("SELECT household FROM address;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(head, None);
    assert_eq!(household, None);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
