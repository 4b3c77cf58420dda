use contactbook_core::db::open_store_in_memory;
use contactbook_core::{
    name_suggestions, ContactDraft, ContactRepository, NameFilter, SqliteContactRepository,
};

#[test]
fn filter_matches_case_insensitive_substrings_in_order() {
    let contacts = sample_contacts(&["Ann", "bob", "Annabel", "Joanne", "Cid"]);

    let hits = NameFilter::new("an").apply(&contacts);
    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Annabel", "Joanne"]);

    let hits = NameFilter::new("AN").apply(&contacts);
    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Annabel", "Joanne"]);
}

#[test]
fn empty_needle_matches_every_contact() {
    let contacts = sample_contacts(&["Ann", "bob"]);
    assert_eq!(NameFilter::new("").apply(&contacts).len(), 2);
}

#[test]
fn needle_with_regex_metacharacters_stays_literal() {
    let contacts = sample_contacts(&["A.B Corp", "AxB Corp"]);

    let hits = NameFilter::new("a.b").apply(&contacts);
    let names: Vec<&str> = hits.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A.B Corp"]);
}

#[test]
fn filter_does_not_match_other_columns() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    repo.add(&ContactDraft::new("Ann", "zebra trainer", "z@x.com", "1"))
        .unwrap();
    repo.add(&ContactDraft::new("Zoe", "Eng", "zoe@x.com", "2"))
        .unwrap();

    let contacts = repo.all().unwrap();
    let hits = NameFilter::new("zebra").apply(&contacts);
    assert!(hits.is_empty());
}

#[test]
fn suggestions_are_lowercased_deduplicated_and_sorted() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    for (name, email) in [("Bob", "b1@x.com"), ("ann", "a1@x.com"), ("ANN", "a2@x.com")] {
        repo.add(&ContactDraft::new(name, "", email, "1")).unwrap();
    }

    let suggestions = name_suggestions(&conn).unwrap();
    assert_eq!(suggestions, ["ann", "bob"]);
}

#[test]
fn suggestions_reflect_mutations_immediately() {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    assert!(name_suggestions(&conn).unwrap().is_empty());

    let ann = repo.add(&ContactDraft::new("Ann", "", "a@x.com", "1")).unwrap();
    assert_eq!(name_suggestions(&conn).unwrap(), ["ann"]);

    repo.add(&ContactDraft::new("Bob", "", "b@x.com", "2")).unwrap();
    assert_eq!(name_suggestions(&conn).unwrap(), ["ann", "bob"]);

    repo.delete(ann.id).unwrap();
    assert_eq!(name_suggestions(&conn).unwrap(), ["bob"]);
}

fn sample_contacts(names: &[&str]) -> Vec<contactbook_core::Contact> {
    let conn = open_store_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);
    for (n, name) in names.iter().enumerate() {
        repo.add(&ContactDraft::new(*name, "", &format!("c{n}@x.com"), "1"))
            .unwrap();
    }
    repo.all().unwrap()
}
