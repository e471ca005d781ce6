//! FFI use-case API for the census form screens.
//!
//! # Responsibility
//! - Expose submit/delete/list calls per entity to Dart via FRB.
//! - Own the process-wide store handle and inject it into repositories.
//! - Run form checks before any store call.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The store is opened at most once per process and never closed.
//! - Store failures surface as `ok=false` envelopes or empty lists, never as
//!   errors thrown into Dart.

use census_core::db::open_db;
use census_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner,
    Address, AddressForm, Household, HouseholdForm, Person, PersonForm, RecordId,
    RecordRepository, RecordService, SqliteAddressRepository, SqliteHouseholdRepository,
    SqlitePersonRepository,
};
use log::{error, info, warn};
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_DB_FILE_NAME: &str = "census.sqlite3";

static CENSUS_STORE: OnceCell<CensusStore> = OnceCell::new();

struct CensusStore {
    path: PathBuf,
    conn: Mutex<Connection>,
}

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Returns the log level to pass to `init_logging` when the app has no
/// override (`debug` in debug builds, `info` in release builds).
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Opens the census store at `db_path` and creates its tables.
///
/// # FFI contract
/// - Call once at startup before any form screen loads.
/// - Repeat calls with the same path are idempotent.
/// - A different path after the store is open is rejected.
/// - Returns an empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_census_db(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);

    match CENSUS_STORE.get_or_try_init(|| open_store(&requested)) {
        Ok(store) if store.path == requested => String::new(),
        Ok(store) => format!(
            "census store already open at `{}`; refusing to switch to `{}`",
            store.path.display(),
            requested.display()
        ),
        Err(err) => err,
    }
}

/// Person form payload as typed on the person screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonEntry {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub province: String,
    pub district: String,
    /// ISO-8601 string from the date picker.
    pub date: String,
    pub gender: String,
}

/// Household form payload; numbers arrive as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseholdEntry {
    pub number_of_persons: String,
    pub residence_type: String,
    pub house_hold_income: String,
}

/// Address form payload; `zip_code` arrives as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressEntry {
    pub street: String,
    pub city: String,
    pub province: String,
    pub zip_code: String,
}

/// Person row for the listing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonItem {
    pub id: i64,
    pub entry: PersonEntry,
}

/// Household row for the listing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdItem {
    pub id: i64,
    pub entry: HouseholdEntry,
}

/// Address row for the listing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressItem {
    pub id: i64,
    pub entry: AddressEntry,
}

/// Result envelope for submit/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormActionResponse {
    /// Whether the store applied the action. `false` for rejected input,
    /// store errors, and update/delete of a missing id.
    pub ok: bool,
    /// Created or edited record id.
    pub record_id: Option<i64>,
    /// Human-readable message for the alert/snackbar.
    pub message: String,
}

impl FormActionResponse {
    fn success(message: impl Into<String>, record_id: Option<RecordId>) -> Self {
        Self {
            ok: true,
            record_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Creates a person, or overwrites `editing_id` when set.
///
/// # FFI contract
/// - Blank fields are rejected before the store is touched.
/// - Editing a missing id, or a write the store rejects, returns `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn person_submit(editing_id: Option<i64>, entry: PersonEntry) -> FormActionResponse {
    let fields = match PersonForm::from(entry).into_fields() {
        Ok(fields) => fields,
        Err(err) => return FormActionResponse::failure(err.to_string()),
    };
    with_store(|conn| {
        let repo = SqlitePersonRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(submit_record(&RecordService::new(repo), editing_id, &fields, "Person"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Deletes person `id`; a missing id reports `ok=false` without touching the store.
#[flutter_rust_bridge::frb(sync)]
pub fn person_delete(id: i64) -> FormActionResponse {
    with_store(|conn| {
        let repo = SqlitePersonRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(delete_record(&repo, id, "Person"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Lists every person; empty when the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn person_list() -> Vec<PersonItem> {
    list_records("person", |conn| {
        let repo = SqlitePersonRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(RecordService::new(repo)
            .list()
            .iter()
            .map(PersonItem::from)
            .collect())
    })
}

/// Creates a household, or overwrites `editing_id` when set.
#[flutter_rust_bridge::frb(sync)]
pub fn household_submit(editing_id: Option<i64>, entry: HouseholdEntry) -> FormActionResponse {
    let fields = match HouseholdForm::from(entry).into_fields() {
        Ok(fields) => fields,
        Err(err) => return FormActionResponse::failure(err.to_string()),
    };
    with_store(|conn| {
        let repo = SqliteHouseholdRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(submit_record(&RecordService::new(repo), editing_id, &fields, "Household"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Deletes household `id`; a missing id reports `ok=false` without touching the store.
#[flutter_rust_bridge::frb(sync)]
pub fn household_delete(id: i64) -> FormActionResponse {
    with_store(|conn| {
        let repo = SqliteHouseholdRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(delete_record(&repo, id, "Household"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Lists every household; empty when the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn household_list() -> Vec<HouseholdItem> {
    list_records("household", |conn| {
        let repo = SqliteHouseholdRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(RecordService::new(repo)
            .list()
            .iter()
            .map(HouseholdItem::from)
            .collect())
    })
}

/// Creates an address, or overwrites `editing_id` when set.
#[flutter_rust_bridge::frb(sync)]
pub fn address_submit(editing_id: Option<i64>, entry: AddressEntry) -> FormActionResponse {
    let fields = match AddressForm::from(entry).into_fields() {
        Ok(fields) => fields,
        Err(err) => return FormActionResponse::failure(err.to_string()),
    };
    with_store(|conn| {
        let repo = SqliteAddressRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(submit_record(&RecordService::new(repo), editing_id, &fields, "Address"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Deletes address `id`; a missing id reports `ok=false` without touching the store.
#[flutter_rust_bridge::frb(sync)]
pub fn address_delete(id: i64) -> FormActionResponse {
    with_store(|conn| {
        let repo = SqliteAddressRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(delete_record(&repo, id, "Address"))
    })
    .unwrap_or_else(FormActionResponse::failure)
}

/// Lists every address; empty when the store is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn address_list() -> Vec<AddressItem> {
    list_records("address", |conn| {
        let repo = SqliteAddressRepository::try_new(conn).map_err(|err| err.to_string())?;
        Ok(RecordService::new(repo)
            .list()
            .iter()
            .map(AddressItem::from)
            .collect())
    })
}

fn submit_record<R: RecordRepository>(
    service: &RecordService<R>,
    editing_id: Option<RecordId>,
    fields: &R::Fields,
    label: &str,
) -> FormActionResponse {
    let Some(id) = editing_id else {
        return match service.add(fields) {
            Some(id) => FormActionResponse::success(format!("{label} created."), Some(id)),
            None => FormActionResponse::failure(format!("{label} could not be saved.")),
        };
    };

    match service.repository().update(id, fields) {
        Ok(true) => {
            info!("event={}_update module=ffi status=ok id={id}", R::ENTITY);
            FormActionResponse::success(format!("{label} updated."), Some(id))
        }
        Ok(false) => {
            warn!("event={}_update module=ffi status=noop id={id}", R::ENTITY);
            FormActionResponse::failure(format!("{label} {id} not found."))
        }
        Err(err) => {
            error!(
                "event={}_update module=ffi status=error id={id} error={err}",
                R::ENTITY
            );
            FormActionResponse::failure(format!("{label} could not be updated: {err}"))
        }
    }
}

fn delete_record<R: RecordRepository>(repo: &R, id: RecordId, label: &str) -> FormActionResponse {
    match repo.delete(id) {
        Ok(true) => {
            info!("event={}_delete module=ffi status=ok id={id}", R::ENTITY);
            FormActionResponse::success(format!("{label} deleted."), Some(id))
        }
        Ok(false) => {
            warn!("event={}_delete module=ffi status=noop id={id}", R::ENTITY);
            FormActionResponse::failure(format!("{label} {id} not found."))
        }
        Err(err) => {
            error!(
                "event={}_delete module=ffi status=error id={id} error={err}",
                R::ENTITY
            );
            FormActionResponse::failure(format!("{label} could not be deleted: {err}"))
        }
    }
}

fn list_records<T>(entity: &str, f: impl FnOnce(&Connection) -> Result<Vec<T>, String>) -> Vec<T> {
    with_store(f).unwrap_or_else(|err| {
        error!("event={entity}_list module=ffi status=error error={err}");
        Vec::new()
    })
}

fn with_store<T>(f: impl FnOnce(&Connection) -> Result<T, String>) -> Result<T, String> {
    let store = CENSUS_STORE.get_or_try_init(|| open_store(&default_db_path()))?;
    let conn = store
        .conn
        .lock()
        .map_err(|_| "census store lock poisoned".to_string())?;
    f(&conn)
}

fn open_store(path: &Path) -> Result<CensusStore, String> {
    let conn = open_db(path).map_err(|err| format!("census DB open failed: {err}"))?;
    Ok(CensusStore {
        path: path.to_path_buf(),
        conn: Mutex::new(conn),
    })
}

fn default_db_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_DB_FILE_NAME)
}

impl From<PersonEntry> for PersonForm {
    fn from(entry: PersonEntry) -> Self {
        Self {
            first_name: entry.first_name,
            last_name: entry.last_name,
            phone: entry.phone,
            email: entry.email,
            occupation: entry.occupation,
            province: entry.province,
            district: entry.district,
            date: entry.date,
            gender: entry.gender,
        }
    }
}

impl From<PersonForm> for PersonEntry {
    fn from(form: PersonForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            phone: form.phone,
            email: form.email,
            occupation: form.occupation,
            province: form.province,
            district: form.district,
            date: form.date,
            gender: form.gender,
        }
    }
}

impl From<&Person> for PersonItem {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id,
            entry: PersonForm::from(person).into(),
        }
    }
}

impl From<HouseholdEntry> for HouseholdForm {
    fn from(entry: HouseholdEntry) -> Self {
        Self {
            number_of_persons: entry.number_of_persons,
            residence_type: entry.residence_type,
            house_hold_income: entry.house_hold_income,
        }
    }
}

impl From<&Household> for HouseholdItem {
    fn from(household: &Household) -> Self {
        let form = HouseholdForm::from(household);
        Self {
            id: household.id,
            entry: HouseholdEntry {
                number_of_persons: form.number_of_persons,
                residence_type: form.residence_type,
                house_hold_income: form.house_hold_income,
            },
        }
    }
}

impl From<AddressEntry> for AddressForm {
    fn from(entry: AddressEntry) -> Self {
        Self {
            street: entry.street,
            city: entry.city,
            province: entry.province,
            zip_code: entry.zip_code,
        }
    }
}

impl From<&Address> for AddressItem {
    fn from(address: &Address) -> Self {
        let form = AddressForm::from(address);
        Self {
            id: address.id,
            entry: AddressEntry {
                street: form.street,
                city: form.city,
                province: form.province,
                zip_code: form.zip_code,
            },
        }
    }
}
