use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::import::import_base_export;
use crate::store::log;
use crate::store::migrate::run_pending_migrations;
use crate::store::sqlite::SqliteStore;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `import` subcommand: replace the snapshot with the contents
/// of a JSON base export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        run_pending_migrations(&store.conn)?;

        let summary = import_base_export(&store.conn, Path::new(file))?;

        success(format!(
            "Imported {} records across {} tables from {}",
            summary.records, summary.tables, file
        ));

        if summary.skipped > 0 {
            warning(format!(
                "Skipped {} malformed records (missing id or bad field map)",
                summary.skipped
            ));
        }

        if let Err(e) = log::oplog(
            &store.conn,
            "import",
            file,
            &format!(
                "Imported {} records ({} skipped)",
                summary.records, summary.skipped
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
    Ok(())
}
