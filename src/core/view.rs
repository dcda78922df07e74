//! Presentation-side filtering and ordering of normalized entries.
//!
//! The view filter runs on the already-normalized set, so interactive
//! refinement never re-fetches. Summaries shown next to a filtered view are
//! computed on the filtered subset, not the full one.

use crate::errors::{AppError, AppResult};
use crate::models::hour_entry::HourEntry;
use crate::utils::date;
use chrono::Datelike;

#[derive(Debug, Default, Clone)]
pub struct ViewFilter {
    month: Option<(i32, u32)>,
    consultant: Option<String>,
}

impl ViewFilter {
    pub fn new(month: &Option<String>, consultant: &Option<String>) -> AppResult<Self> {
        let month = match month {
            Some(raw) => Some(
                date::parse_month_key(raw).ok_or_else(|| AppError::InvalidMonth(raw.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            month,
            consultant: consultant.clone(),
        })
    }

    fn matches(&self, entry: &HourEntry) -> bool {
        if let Some((year, month)) = self.month
            && (entry.date.year() != year || entry.date.month() != month)
        {
            return false;
        }

        if let Some(name) = &self.consultant
            && !entry.has_consultant(name)
        {
            return false;
        }

        true
    }

    /// Filtered subset, most recent first. The sort is stable, so entries
    /// sharing a date keep their original fetch order.
    pub fn apply(&self, entries: &[HourEntry]) -> Vec<HourEntry> {
        let mut out: Vec<HourEntry> = entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();

        out.sort_by(|a, b| b.date.cmp(&a.date));
        out
    }
}
