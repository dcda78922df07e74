use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clients::ClientDirectory;
use crate::core::hours::fetch_hours;
use crate::core::summary::summarize;
use crate::core::view::ViewFilter;
use crate::errors::{AppError, AppResult};
use crate::models::client::Client;
use crate::models::hour_entry::HourEntry;
use crate::models::summary::HoursSummary;
use crate::store::sqlite::SqliteStore;
use crate::store::urls::UrlStore;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_status};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// JSON view model of the dashboard: visible entries plus their summary.
#[derive(Serialize)]
struct HoursView<'a> {
    entries: &'a [HourEntry],
    summary: HoursSummary,
}

/// Handle the `hours` subcommand: the per-client dashboard.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours {
        client_id,
        month,
        consultant,
        json,
    } = cmd
    {
        let filter = ViewFilter::new(month, consultant)?;

        let store = SqliteStore::open(&cfg.database)?;
        let urls = UrlStore::new(&cfg.url_store);
        let mut directory = ClientDirectory::new(&store, &urls, &cfg.clients_table);

        let Some(client) = directory.get(client_id)? else {
            return Err(AppError::ClientNotFound(client_id.clone()));
        };

        let entries = fetch_hours(&store, &cfg.hours_table, client_id)?;

        // Filter first, summarize after: the summary must reflect only the
        // visible entries.
        let visible = filter.apply(&entries);
        let summary = summarize(&visible);

        if *json {
            let view = HoursView {
                entries: &visible,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        print_dashboard(&client, &visible, &summary, month, consultant);
    }
    Ok(())
}

fn print_dashboard(
    client: &Client,
    visible: &[HourEntry],
    summary: &HoursSummary,
    month: &Option<String>,
    consultant: &Option<String>,
) {
    println!("\n=== {} ===", client.label());

    if let Some(m) = month {
        let label = date::format_month_key(m).unwrap_or_else(|| m.clone());
        println!("Month: {}", label);
    }
    if let Some(name) = consultant {
        println!("Consultant: {}", name);
    }

    if visible.is_empty() {
        println!("\nNo hours logged yet.");
        return;
    }

    let mut table = Table::new(vec![
        Column::fitted("Date", visible.iter().map(|e| date::format_display(&e.date).width())),
        Column::fitted(
            "Consultant",
            visible.iter().map(|e| e.consultant_display().width()),
        ),
        Column::fitted("Description", visible.iter().map(|e| e.description.width())),
        Column::fitted("Status", visible.iter().map(|e| e.status.bs_as_str().width())),
        Column::fitted("Hours", visible.iter().map(|e| format!("{:.2}", e.hours).width())),
    ]);

    for entry in visible {
        table.add_row(vec![
            date::format_display(&entry.date),
            entry.consultant_display(),
            entry.description.clone(),
            colorize_status(entry.status.bs_as_str(), entry.status.is_billable()),
            format!("{:.2}", entry.hours),
        ]);
    }

    println!("\n{}", table.render());

    println!(
        "{}Billable:{}     {:.2} h",
        GREEN, RESET, summary.billable
    );
    println!(
        "{}Non-billable:{} {:.2} h",
        YELLOW, RESET, summary.non_billable
    );
    println!("{}Total:{}        {:.2} h", CYAN, RESET, summary.total);
}
