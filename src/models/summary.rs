use serde::Serialize;

/// Billable / non-billable / total hours, each rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoursSummary {
    pub billable: f64,
    pub non_billable: f64,
    pub total: f64,
}
