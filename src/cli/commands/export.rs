use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewFilter;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::sqlite::SqliteStore;

/// Handle the `export` subcommand: write a client's (optionally filtered)
/// hours view to a CSV or JSON file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        client,
        format,
        file,
        month,
        consultant,
        force,
    } = cmd
    {
        let filter = ViewFilter::new(month, consultant)?;
        let store = SqliteStore::open(&cfg.database)?;

        ExportLogic::export(
            &store,
            &cfg.hours_table,
            client,
            &filter,
            format.clone(),
            file,
            *force,
        )?;
    }
    Ok(())
}
