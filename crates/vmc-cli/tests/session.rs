//! Session operations against a storage file in a temporary directory.

use std::fs;

use tempfile::TempDir;
use vmc_cli::config::Config;
use vmc_cli::session::Session;
use vmc_core::Action;
use vmc_model::Status;
use vmc_page::{ControlStyle, Outcome, Trigger};

fn open(dir: &TempDir) -> Session {
    let catalog = dir.path().join("catalog.toml");
    fs::write(
        &catalog,
        "[[machine]]\nslug = \"apple-iie\"\nname = \"Apple IIe\"\n\n\
         [[machine]]\nslug = \"pet-2001\"\nname = \"Commodore PET 2001\"\n",
    )
    .unwrap();
    let mut config = Config::default();
    config.storage.path = Some(dir.path().join("data").join("storage.json"));
    config.catalog.path = Some(catalog);
    Session::open(config).unwrap()
}

fn applied_to(outcome: Outcome) -> Status {
    match outcome {
        Outcome::Applied(transition) => transition.to,
        other => panic!("expected an applied transition, got {other:?}"),
    }
}

#[test]
fn toggles_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);

    let to = applied_to(session.press("apple-iie", Trigger::Toggle(Action::ToggleAvailable)).unwrap());
    assert_eq!(to, Status::CheckedOut);

    let reopened = open(&dir);
    assert_eq!(reopened.status("apple-iie"), Status::CheckedOut);
    assert_eq!(reopened.status("pet-2001"), Status::Available);
}

#[test]
fn rows_follow_catalog_then_extra_slugs() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    session.set("kim-1", Status::Repairing).unwrap();
    session.set("pet-2001", Status::CheckedOut).unwrap();

    let rows = session.rows();
    let slugs: Vec<&str> = rows.iter().map(|row| row.slug.as_str()).collect();
    assert_eq!(slugs, ["apple-iie", "pet-2001", "kim-1"]);
    assert_eq!(rows[0].status, Status::Available);
    assert!(rows[0].since.is_none());
    assert_eq!(rows[1].name.as_deref(), Some("Commodore PET 2001"));
    assert!(rows[1].since.is_some());
    assert!(rows[2].name.is_none());
}

#[test]
fn legacy_checkout_is_ignored_during_repair() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    session.set("pet-2001", Status::Repairing).unwrap();

    let outcome = session.press("pet-2001", Trigger::LegacyCheckout).unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(session.status("pet-2001"), Status::Repairing);
}

#[test]
fn repair_then_return_via_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    let repair = Trigger::Toggle(Action::ToggleRepairing);

    assert_eq!(applied_to(session.press("apple-iie", repair).unwrap()), Status::Repairing);
    assert_eq!(applied_to(session.press("apple-iie", repair).unwrap()), Status::Available);
    assert!(session.store().load().is_empty());
}

#[test]
fn clear_makes_everything_available() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    session.set("apple-iie", Status::CheckedOut).unwrap();
    session.clear().unwrap();
    assert_eq!(session.status("apple-iie"), Status::Available);
    assert!(session.rows().iter().all(|row| row.status == Status::Available));
}

#[test]
fn renders_catalog_with_stored_statuses() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    session.set("pet-2001", Status::Repairing).unwrap();

    insta::assert_snapshot!(session.render_catalog(), @r#"<body><section class="catalog"><article class="card" data-slug="apple-iie"><h2>Apple IIe</h2><p class="status" data-status="available">Available</p></article><article class="card" data-slug="pet-2001"><h2>Commodore PET 2001</h2><p class="status" data-status="repairing">Repairing</p></article></section></body>"#);
}

#[test]
fn renders_checked_out_detail_controls() {
    let dir = tempfile::tempdir().unwrap();
    let session = open(&dir);
    session.set("apple-iie", Status::CheckedOut).unwrap();

    let html = session.render_detail("apple-iie", ControlStyle::Toggles);
    assert!(html.contains(r#"data-status="checked-out">Checked out</p>"#));
    assert!(html.contains(">Return</button>"));
    assert!(html.contains(r#"aria-pressed="false" class="status-toggle" data-slug="apple-iie" data-toggle="repairing" disabled>Mark As Repairing</button>"#));
}
