//! Shared board filter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;
use crate::errors::CoreError;

/// Filter applied to all three board columns at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub priority: Option<Priority>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl TaskFilter {
    /// Reject a due-date range whose end precedes its start.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `end_date < start_date`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(CoreError::Validation(format!(
                    "end date {end} is before start date {start}"
                )));
            }
        }
        Ok(())
    }

    /// Query parameters for the listing endpoint. Unset and blank fields are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(project_id) = self.project_id.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("projectId", project_id.to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority", priority.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}
