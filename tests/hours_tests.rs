mod common;
use common::{hd, init_db_with_data, setup_test_db, setup_url_store};
use predicates::prelude::*;

#[test]
fn test_hours_dashboard_lists_scoped_entries() {
    let db = setup_test_db("hours_dashboard");
    let urls = setup_url_store("hours_dashboard");
    init_db_with_data(&db, &urls);

    hd()
        .args(["--db", &db, "--urls", &urls, "hours", "recAcme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corp (Acme Holdings)"))
        .stdout(predicate::str::contains("John Doe, Jane Smith"))
        .stdout(predicate::str::contains("Sprint planning"))
        // The numeric-triple date is a real calendar date
        .stdout(predicate::str::contains("Jan 20, 2025"))
        // Free-text consultants work without an employee link
        .stdout(predicate::str::contains("Jordan Lee"))
        // Internal and other-client entries never appear
        .stdout(predicate::str::contains("Internal planning").not())
        .stdout(predicate::str::contains("Globex onboarding").not());
}

#[test]
fn test_hours_summary_totals() {
    let db = setup_test_db("hours_summary");
    let urls = setup_url_store("hours_summary");
    init_db_with_data(&db, &urls);

    hd()
        .args(["--db", &db, "--urls", &urls, "hours", "recAcme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.75"))
        .stdout(predicate::str::contains("1.50"))
        .stdout(predicate::str::contains("9.25"));
}

#[test]
fn test_hours_json_view_model() {
    let db = setup_test_db("hours_json");
    let urls = setup_url_store("hours_json");
    init_db_with_data(&db, &urls);

    let output = hd()
        .args(["--db", &db, "--urls", &urls, "hours", "recAcme", "--json"])
        .output()
        .expect("run hours --json");
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse json");

    let entries = view["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 4);

    // Descending by date
    let dates: Vec<&str> = entries
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["2025-03-15", "2025-03-05", "2025-02-01", "2025-01-20"]);

    assert_eq!(view["summary"]["billable"], 7.75);
    assert_eq!(view["summary"]["nonBillable"], 1.5);
    assert_eq!(view["summary"]["total"], 9.25);

    // Consultants stay a list in the view model
    assert_eq!(
        entries[0]["consultants"],
        serde_json::json!(["John Doe", "Jane Smith"])
    );
}

#[test]
fn test_hours_month_filter_recomputes_summary() {
    let db = setup_test_db("hours_month");
    let urls = setup_url_store("hours_month");
    init_db_with_data(&db, &urls);

    let output = hd()
        .args([
            "--db", &db, "--urls", &urls, "hours", "recAcme", "--month", "2025-03", "--json",
        ])
        .output()
        .expect("run hours --month");
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["entries"].as_array().unwrap().len(), 2);
    assert_eq!(view["summary"]["billable"], 5.75);
    assert_eq!(view["summary"]["nonBillable"], 0.0);
    assert_eq!(view["summary"]["total"], 5.75);
}

#[test]
fn test_hours_consultant_filter_matches_list_members() {
    let db = setup_test_db("hours_consultant");
    let urls = setup_url_store("hours_consultant");
    init_db_with_data(&db, &urls);

    let output = hd()
        .args([
            "--db",
            &db,
            "--urls",
            &urls,
            "hours",
            "recAcme",
            "--consultant",
            "Jane Smith",
            "--json",
        ])
        .output()
        .expect("run hours --consultant");
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = view["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["recH1", "recH2"]);
}

#[test]
fn test_hours_rejects_bad_month_filter() {
    let db = setup_test_db("hours_bad_month");
    let urls = setup_url_store("hours_bad_month");
    init_db_with_data(&db, &urls);

    hd()
        .args([
            "--db", &db, "--urls", &urls, "hours", "recAcme", "--month", "March",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month filter"));
}

#[test]
fn test_hours_unknown_client_not_found() {
    let db = setup_test_db("hours_unknown_client");
    let urls = setup_url_store("hours_unknown_client");
    init_db_with_data(&db, &urls);

    hd()
        .args(["--db", &db, "--urls", &urls, "hours", "recNobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such client: recNobody"));
}

#[test]
fn test_hours_empty_state_for_client_without_entries() {
    let db = setup_test_db("hours_empty_state");
    let urls = setup_url_store("hours_empty_state");
    init_db_with_data(&db, &urls);

    hd()
        .args(["--db", &db, "--urls", &urls, "hours", "recInitech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hours logged yet."));
}
