mod common;
use common::{hd, init_db_with_data, setup_test_db, setup_url_store, temp_out};
use std::fs;

#[test]
fn test_export_hours_csv_all() {
    let db = setup_test_db("export_csv_all");
    let urls = setup_url_store("export_csv_all");
    init_db_with_data(&db, &urls);

    let out = temp_out("export_csv_all", "csv");

    hd()
        .args([
            "--db", &db, "--urls", &urls, "export", "--client", "recAcme", "--format", "csv",
            "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("id,date,consultant,description,status,hours"));
    assert!(content.contains("2025-03-15"));
    assert!(content.contains("\"John Doe, Jane Smith\""));
    assert!(content.contains("Non-billable"));
    // Entries of other clients and internal entries never leave the pipeline
    assert!(!content.contains("recH5"));
    assert!(!content.contains("recH4"));
}

#[test]
fn test_export_hours_json_month_filter() {
    let db = setup_test_db("export_json_month");
    let urls = setup_url_store("export_json_month");
    init_db_with_data(&db, &urls);

    let out = temp_out("export_json_month", "json");

    hd()
        .args([
            "--db", &db, "--urls", &urls, "export", "--client", "recAcme", "--format", "json",
            "--file", &out, "--month", "2025-03",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["date"], "2025-03-15");
    assert_eq!(rows[1]["date"], "2025-03-05");
}

#[test]
fn test_export_refuses_relative_paths() {
    let db = setup_test_db("export_relative");
    let urls = setup_url_store("export_relative");
    init_db_with_data(&db, &urls);

    hd()
        .args([
            "--db", &db, "--urls", &urls, "export", "--client", "recAcme", "--format", "csv",
            "--file", "relative_out.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db = setup_test_db("export_force");
    let urls = setup_url_store("export_force");
    init_db_with_data(&db, &urls);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").unwrap();

    hd()
        .args([
            "--db", &db, "--urls", &urls, "export", "--client", "recAcme", "--format", "csv",
            "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.contains("2025-03-15"));
}
