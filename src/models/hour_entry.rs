use super::billing_status::BillingStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// Canonical hour entry, recomputed in full on every fetch.
/// Never mutated in place; the pipeline only ever builds fresh vectors.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourEntry {
    pub id: String,
    pub client_id: String,
    pub date: NaiveDate,            // ⇔ "Date" (string, or [YYYY, MM, DD])
    pub consultants: Vec<String>,   // ⇔ "Employees" link, resolved to names
    pub description: String,        // ⇔ "Summary" / "Description"
    pub status: BillingStatus,      // ⇔ "Billable" / "Status"
    pub hours: f64,                 // ⇔ "Hours Logged" / "Hours"
    pub internal: bool,             // ⇔ "Internal" checkbox or select
}

impl HourEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Consultant names joined for display. The list is the source of
    /// truth; the joined string exists only at the render boundary.
    pub fn consultant_display(&self) -> String {
        self.consultants.join(", ")
    }

    /// True when `name` matches one of the consultants exactly
    /// (whitespace-insensitive on both sides).
    pub fn has_consultant(&self, name: &str) -> bool {
        let target = name.trim();
        self.consultants.iter().any(|c| c.trim() == target)
    }
}
