use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clients::ClientDirectory;
use crate::errors::AppResult;
use crate::store::sqlite::SqliteStore;
use crate::store::urls::UrlStore;
use crate::utils::colors::colorize_url;
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

/// Handle the `clients` subcommand: the full client list with the dashboard
/// URL overlay (base field first, fallback file second).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clients { json } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let urls = UrlStore::new(&cfg.url_store);
        let mut directory = ClientDirectory::new(&store, &urls, &cfg.clients_table);

        let clients = directory.list()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&clients)?);
            return Ok(());
        }

        if clients.is_empty() {
            println!("No clients in the snapshot. Run `hourdash import` first.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::fitted("ID", clients.iter().map(|c| c.id.width())),
            Column::fitted("Client", clients.iter().map(|c| c.label().width())),
            Column::fitted(
                "Dashboard URL",
                clients
                    .iter()
                    .map(|c| c.generated_page_url.as_deref().unwrap_or("--").width()),
            ),
        ]);

        for client in &clients {
            table.add_row(vec![
                client.id.clone(),
                client.label(),
                colorize_url(client.generated_page_url.as_deref()),
            ]);
        }

        println!("\n{}", table.render());
        println!("{} clients", clients.len());
    }
    Ok(())
}
