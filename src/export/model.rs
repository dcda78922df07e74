use crate::models::hour_entry::HourEntry;
use serde::Serialize;

/// Flat row shape for CSV / JSON export of a client's hours view.
#[derive(Serialize, Clone, Debug)]
pub struct HourExport {
    pub id: String,
    pub date: String,
    pub consultant: String,
    pub description: String,
    pub status: String,
    pub hours: f64,
}

impl From<&HourEntry> for HourExport {
    fn from(entry: &HourEntry) -> Self {
        Self {
            id: entry.id.clone(),
            date: entry.date_str(),
            consultant: entry.consultant_display(),
            description: entry.description.clone(),
            status: entry.status.bs_as_str().to_string(),
            hours: entry.hours,
        }
    }
}
