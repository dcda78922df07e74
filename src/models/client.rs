use serde::Serialize;

/// One row of the external `Clients` table, with the dashboard URL overlay
/// already applied (base field first, fallback file second).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub generated_page_url: Option<String>,
}

impl Client {
    /// Display label: "Name (Company)" when a company is present.
    pub fn label(&self) -> String {
        match &self.company {
            Some(company) if !company.trim().is_empty() => {
                format!("{} ({})", self.name, company)
            }
            _ => self.name.clone(),
        }
    }
}
