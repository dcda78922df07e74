use crate::store::sqlite::SqliteStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_snapshot_info(store: &SqliteStore, db_path: &str) -> crate::errors::AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TABLES & RECORD COUNTS
    //
    let tables = store.table_names()?;

    if tables.is_empty() {
        println!("{}• Tables:{} {}none (snapshot empty){}", CYAN, RESET, GREY, RESET);
        println!();
        return Ok(());
    }

    println!("{}• Tables:{}", CYAN, RESET);
    for table in &tables {
        let count = store.record_count(table)?;
        println!("    {:<24} {}{}{}", table, GREEN, count, RESET);
    }

    //
    // 3) TOTAL RECORDS
    //
    let total: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    println!("{}• Total records:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    println!();
    Ok(())
}
