#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hd() -> Command {
    cargo_bin_cmd!("hourdash")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourdash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique URL-fallback-store path inside the system temp dir
pub fn setup_url_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_client_urls.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Standard base export used by most tests.
///
/// The Clients table deliberately has NO generated-URL column, so `generate`
/// exercises the fallback file path.
pub fn base_export_json() -> String {
    serde_json::json!({
        "Clients": [
            { "id": "recAcme",    "fields": { "Name": "Acme Corp", "Company": "Acme Holdings" } },
            { "id": "recGlobex",  "fields": { "Name": "Globex" } },
            { "id": "recInitech", "fields": { "Name": "Initech" } }
        ],
        "Employees": [
            { "id": "empJohn", "fields": { "Name": "John Doe" } },
            { "id": "empJane", "fields": { "Name": "Jane Smith" } }
        ],
        "Hours Log": [
            {
                "id": "recH1",
                "fields": {
                    "Clients": ["recAcme"],
                    "Employees": ["empJohn", "empJane"],
                    "Date": "2025-03-15",
                    "Billable": "Yes",
                    "Hours Logged": 2.5,
                    "Summary": "Sprint planning"
                }
            },
            {
                "id": "recH2",
                "fields": {
                    "Clients": ["recAcme"],
                    "Employees": ["empJane"],
                    "Date": "2025-03-05",
                    "Billable": "Yes",
                    "Hours Logged": 3.25,
                    "Summary": "API integration"
                }
            },
            {
                "id": "recH3",
                "fields": {
                    "Clients": ["recAcme"],
                    "Date": [2025, 1, 20],
                    "Billable": "No",
                    "Hours Logged": 1.5,
                    "Consultant": "Jordan Lee",
                    "Summary": "Retainer review"
                }
            },
            {
                "id": "recH4",
                "fields": {
                    "Clients": ["recAcme"],
                    "Internal": "Yes",
                    "Billable": "Yes",
                    "Hours Logged": 99.0,
                    "Date": "2025-03-01",
                    "Summary": "Internal planning"
                }
            },
            {
                "id": "recH5",
                "fields": {
                    "Clients": ["recGlobex"],
                    "Billable": "Yes",
                    "Hours Logged": 4.0,
                    "Date": "2025-03-10",
                    "Summary": "Globex onboarding"
                }
            },
            {
                "id": "recH6",
                "fields": {
                    "ClientID": "recAcme",
                    "Employees": ["empJohn"],
                    "Date": "2025-02-01",
                    "Billable": true,
                    "Hours": 2.0,
                    "Summary": "Data migration"
                }
            }
        ]
    })
    .to_string()
}

/// Variant whose Clients table DOES carry the generated-URL column.
pub fn base_export_with_url_column_json() -> String {
    serde_json::json!({
        "Clients": [
            { "id": "recAcme", "fields": { "Name": "Acme Corp", "GeneratedPageURL": "" } }
        ],
        "Hours Log": []
    })
    .to_string()
}

/// Write an export document to a temp file and return its path
pub fn write_export(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_base_export.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write base export fixture");
    p
}

/// Initialize a snapshot DB and import the standard fixture
pub fn init_db_with_data(db_path: &str, urls_path: &str) {
    hd()
        .args(["--db", db_path, "--urls", urls_path, "--test", "init"])
        .assert()
        .success();

    let export = write_export(&format!("seed_{}", sanitize(db_path)), &base_export_json());

    hd()
        .args(["--db", db_path, "--urls", urls_path, "--test", "import", &export])
        .assert()
        .success();
}

fn sanitize(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
