use contactbook_core::db::open_store_in_memory;
use contactbook_core::{
    ContactDraft, ContactService, InterchangeError, ServiceError, SqliteContactRepository,
};
use std::fs;
use std::path::{Path, PathBuf};

#[test]
fn import_reports_stored_and_rejected_lines() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));

    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "bulk.csv",
        "name,job,email,mobile\n\
         Ann,Eng,a@x.com,1\n\
         ,Ops,missing-name@x.com,2\n\
         Cid,,c@x.com,\n\
         Dee,QA,d@x.com,4\n",
    );

    let report = service.import_contacts(&path).unwrap();

    let imported: Vec<&str> = report.imported.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(imported, ["Ann", "Dee"]);

    let rejected_lines: Vec<u64> = report.rejected.iter().map(|r| r.line).collect();
    assert_eq!(rejected_lines, [3, 4]);

    assert_eq!(service.all_contacts().unwrap().len(), 2);
}

#[test]
fn import_with_bad_header_applies_zero_rows() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));

    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "bad.csv",
        "Name,Job,Email,Mobile\nAnn,Eng,a@x.com,1\n",
    );

    let err = service.import_contacts(&path).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Interchange(InterchangeError::InvalidHeaders { .. })
    ));
    assert!(service.all_contacts().unwrap().is_empty());
}

#[test]
fn export_returns_destination_and_row_count() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));
    service
        .add_contact(&ContactDraft::new("Ann", "Eng", "a@x.com", "1"))
        .unwrap();
    service
        .add_contact(&ContactDraft::new("bob", "", "b@x.com", "2"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let summary = service.export_contacts(dir.path(), "backup.csv").unwrap();

    assert_eq!(summary.path, dir.path().join("backup.csv"));
    assert_eq!(summary.exported, 2);

    let content = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        ["name,job,email,mobile", "Ann,Eng,a@x.com,1", "bob,,b@x.com,2"]
    );
}

#[test]
fn export_with_wrong_extension_writes_nothing() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));
    service
        .add_contact(&ContactDraft::new("Ann", "Eng", "a@x.com", "1"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let err = service.export_contacts(dir.path(), "backup.txt").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Interchange(InterchangeError::NotCsv(_))
    ));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn delete_and_clear_round_out_the_action_set() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));

    let ann = service
        .add_contact(&ContactDraft::new("Ann", "Eng", "a@x.com", "1"))
        .unwrap();
    service
        .add_contact(&ContactDraft::new("bob", "", "b@x.com", "2"))
        .unwrap();

    assert!(service.delete_contact(ann.id).unwrap());
    assert!(!service.delete_contact(ann.id).unwrap());

    assert_eq!(service.clear_contacts().unwrap(), 1);
    assert!(service.all_contacts().unwrap().is_empty());
}

#[test]
fn concrete_scenario_filter_and_export() {
    let conn = open_store_in_memory().unwrap();
    let service = ContactService::new(SqliteContactRepository::new(&conn));
    service
        .add_contact(&ContactDraft::new("Ann", "Eng", "a@x.com", "1"))
        .unwrap();
    service
        .add_contact(&ContactDraft::new("bob", "", "b@x.com", "2"))
        .unwrap();

    let contacts = service.all_contacts().unwrap();
    let hits = contactbook_core::NameFilter::new("an").apply(&contacts);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Ann");

    let dir = tempfile::tempdir().unwrap();
    let summary = service.export_contacts(dir.path(), "contacts.csv").unwrap();
    let content = fs::read_to_string(&summary.path).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        ["name,job,email,mobile", "Ann,Eng,a@x.com,1", "bob,,b@x.com,2"]
    );
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
