use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clients::ClientDirectory;
use crate::errors::{AppError, AppResult};
use crate::store::log;
use crate::store::sqlite::SqliteStore;
use crate::store::urls::UrlStore;
use crate::ui::messages::success;

/// Handle the `generate` subcommand: build the shareable dashboard URL of a
/// client and persist it (base column, or the fallback file when the base
/// has no such column).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        client_id,
        base_url,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let urls = UrlStore::new(&cfg.url_store);
        let mut directory = ClientDirectory::new(&store, &urls, &cfg.clients_table);

        let Some(client) = directory.get(client_id)? else {
            return Err(AppError::ClientNotFound(client_id.clone()));
        };

        let base = base_url.as_deref().unwrap_or(&cfg.base_url);
        let url = format!("{}/client/{}", base.trim_end_matches('/'), client.id);

        directory.update_generated_url(&client.id, &url)?;

        success(format!("Dashboard URL for {}:", client.label()));
        println!("{}", url);

        if let Err(e) = log::oplog(
            &store.conn,
            "generate",
            client_id,
            &format!("Generated dashboard URL {}", url),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
    Ok(())
}
