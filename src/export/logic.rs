use crate::core::hours::fetch_hours;
use crate::core::view::ViewFilter;
use crate::errors::{AppError, AppResult};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, HourExport};
use crate::store::base::RecordStore;
use crate::ui::messages::{info, warning};
use crate::utils::path::is_absolute;
use std::io::{self, Write};
use std::path::Path;

/// High-level export logic for a client's hours view.
pub struct ExportLogic;

impl ExportLogic {
    /// Run the pipeline for one client, apply the view filter, and write
    /// the result.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    pub fn export<S: RecordStore>(
        store: &S,
        hours_table: &str,
        client_id: &str,
        filter: &ViewFilter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let entries = fetch_hours(store, hours_table, client_id)?;
        let visible = filter.apply(&entries);

        let rows: Vec<HourExport> = visible.iter().map(HourExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}

/// Check whether a file can be created or overwritten.
///
/// - File does not exist → Ok
/// - File exists and `force` is set → Ok
/// - File exists and no `force` → ask the user.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}
