mod common;
use common::{base_export_json, hd, setup_test_db, setup_url_store, write_export};
use predicates::prelude::*;

#[test]
fn test_init_creates_snapshot_schema() {
    let db = setup_test_db("init_schema");
    let urls = setup_url_store("init_schema");

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    // Schema is in place: an empty clients listing works
    hd()
        .args(["--db", &db, "--urls", &urls, "clients"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients in the snapshot"));
}

#[test]
fn test_import_reports_counts() {
    let db = setup_test_db("import_counts");
    let urls = setup_url_store("import_counts");

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "init"])
        .assert()
        .success();

    let export = write_export("import_counts", &base_export_json());

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "import", &export])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 11 records across 3 tables"));
}

#[test]
fn test_import_rejects_malformed_document() {
    let db = setup_test_db("import_malformed");
    let urls = setup_url_store("import_malformed");

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "init"])
        .assert()
        .success();

    let export = write_export("import_malformed", r#"{ "Clients": "not an array" }"#);

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "import", &export])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base export"));
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log_operations");
    let urls = setup_url_store("log_operations");

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "init"])
        .assert()
        .success();

    let export = write_export("log_operations", &base_export_json());
    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "import", &export])
        .assert()
        .success();

    hd()
        .args(["--db", &db, "--urls", &urls, "generate", "recAcme"])
        .assert()
        .success();

    hd()
        .args(["--db", &db, "--urls", &urls, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshot database initialized"))
        .stdout(predicate::str::contains("Imported 11 records"))
        .stdout(predicate::str::contains("(recAcme)"));
}

#[test]
fn test_db_maintenance_surface() {
    let db = setup_test_db("db_maintenance");
    let urls = setup_url_store("db_maintenance");

    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "init"])
        .assert()
        .success();

    let export = write_export("db_maintenance", &base_export_json());
    hd()
        .args(["--db", &db, "--urls", &urls, "--test", "import", &export])
        .assert()
        .success();

    hd()
        .args(["--db", &db, "--urls", &urls, "db", "--check", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"))
        .stdout(predicate::str::contains("Hours Log"));
}
