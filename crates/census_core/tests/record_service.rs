use census_core::db::open_db_in_memory;
use census_core::{
    AddressFields, HouseholdFields, PersonFields, RecordRepository, RecordService,
    SqliteAddressRepository, SqliteHouseholdRepository, SqlitePersonRepository,
};

fn person(first_name: &str) -> PersonFields {
    PersonFields {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        phone: "5551234".to_string(),
        email: "doe@x.com".to_string(),
        occupation: "engineer".to_string(),
        province: "ProvA".to_string(),
        district: "DistB".to_string(),
        date: "2020-01-01T00:00:00.000Z".to_string(),
        gender: "female".to_string(),
    }
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = RecordService::new(SqlitePersonRepository::try_new(&conn).unwrap());

    let id = service.add(&person("Jane")).expect("add should return an id");
    service.update(id, &person("Janet"));

    let listed = service.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].fields.first_name, "Janet");

    service.delete(id);
    service.delete(id);
    assert!(service.list().is_empty());
}

#[test]
fn service_tolerates_missing_ids() {
    let conn = open_db_in_memory().unwrap();
    let service = RecordService::new(SqliteAddressRepository::try_new(&conn).unwrap());
    let fields = AddressFields {
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        province: "ProvA".to_string(),
        zip_code: 12345,
    };
    let id = service.add(&fields).unwrap();

    service.update(id + 7, &fields);
    service.delete(id + 7);

    assert_eq!(service.list().len(), 1);
}

#[test]
fn store_failures_become_empty_outcomes() {
    let conn = open_db_in_memory().unwrap();
    let service = RecordService::new(SqliteHouseholdRepository::try_new(&conn).unwrap());
    let fields = HouseholdFields {
        number_of_persons: 2,
        residence_type: "flat".to_string(),
        house_hold_income: 10.0,
    };
    service.add(&fields).unwrap();

    conn.execute_batch("DROP TABLE household;").unwrap();

    assert_eq!(service.add(&fields), None);
    service.update(1, &fields);
    service.delete(1);
    assert!(service.list().is_empty());
    assert!(service.repository().list().is_err());
}

#[test]
fn constraint_violation_yields_absent_id() {
    let conn = open_db_in_memory().unwrap();
    let service = RecordService::new(SqlitePersonRepository::try_new(&conn).unwrap());
    conn.execute_batch(
        "CREATE TRIGGER reject_person BEFORE INSERT ON person
         BEGIN
            SELECT RAISE(ABORT, 'rejected');
         END;",
    )
    .unwrap();

    assert_eq!(service.add(&person("Jane")), None);
    assert!(service.list().is_empty());
}
