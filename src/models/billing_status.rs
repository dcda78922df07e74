use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BillingStatus {
    #[serde(rename = "Billable")]
    Billable,
    #[serde(rename = "Non-billable")]
    NonBillable,
}

impl BillingStatus {
    pub fn bs_as_str(&self) -> &'static str {
        match self {
            BillingStatus::Billable => "Billable",
            BillingStatus::NonBillable => "Non-billable",
        }
    }

    /// Convert the normalizer's boolean verdict → enum
    pub fn from_flag(billable: bool) -> Self {
        if billable {
            BillingStatus::Billable
        } else {
            BillingStatus::NonBillable
        }
    }

    pub fn is_billable(&self) -> bool {
        matches!(self, BillingStatus::Billable)
    }
}
