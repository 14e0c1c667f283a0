//! Bug model and response shapes.

use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::PageEnvelope;

/// Severity of a defect, 1 (high) through 6 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::One => "1",
            Severity::Two => "2",
            Severity::Three => "3",
            Severity::Four => "4",
            Severity::Five => "5",
            Severity::Six => "6",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter: only bugs with the given status are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Fixed,
    Terminated,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "O",
            Status::Fixed => "F",
            Status::Terminated => "T",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modified-date filter: only bugs modified within the given window
/// are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateModified {
    LastWeek,
    Last30Days,
    Last6Months,
    LastYear,
    All,
}

impl DateModified {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateModified::LastWeek => "1",
            DateModified::Last30Days => "2",
            DateModified::Last6Months => "3",
            DateModified::LastYear => "4",
            DateModified::All => "5",
        }
    }
}

impl std::fmt::Display for DateModified {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for bug search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Status,
    ModifiedDate,
    Severity,
    CaseCount,
    EarliestModifiedDate,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Status => "status",
            SortBy::ModifiedDate => "modified_date",
            SortBy::Severity => "severity",
            SortBy::CaseCount => "support_case_count",
            SortBy::EarliestModifiedDate => "modified_date_earliest",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters shared by the bug search operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BugListQuery {
    /// Only bugs with this status.
    pub status: Option<Status>,
    /// Only bugs modified within this window.
    pub modified_date: Option<DateModified>,
    /// Only bugs with this severity.
    pub severity: Option<Severity>,
    /// Sort order for the results.
    pub sort_by: Option<SortBy>,
}

impl BugListQuery {
    pub(crate) fn to_params(self) -> Vec<(String, Option<String>)> {
        vec![
            ("status".to_string(), self.status.map(|v| v.to_string())),
            (
                "modified_date".to_string(),
                self.modified_date.map(|v| v.to_string()),
            ),
            ("severity".to_string(), self.severity.map(|v| v.to_string())),
            ("sort_by".to_string(), self.sort_by.map(|v| v.to_string())),
        ]
    }
}

/// A Cisco defect record as surfaced by the Bug Search Tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bug {
    pub id: String,
    #[serde(default)]
    pub base_pid: Option<String>,
    pub behavior_changed: String,
    pub bug_id: String,
    pub headline: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_series: Option<String>,
    pub severity: String,
    pub status: String,
    #[serde(default)]
    pub duplicate_of: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    pub last_modified_date: String,
    pub product: String,
    pub known_affected_releases: String,
    pub known_fixed_releases: String,
    pub support_case_count: String,
}

/// Wire shape of every bug listing endpoint: records under `bugs`,
/// with pagination metadata on the multi-page search endpoints.
#[derive(Debug, Deserialize)]
pub struct BugListResponse {
    #[serde(rename = "bugs")]
    items: Vec<Bug>,
    #[serde(default)]
    pagination_response_record: Option<PageInfo>,
}

impl PageEnvelope for BugListResponse {
    type Item = Bug;

    fn into_page(self) -> (Vec<Bug>, Option<PageInfo>) {
        (self.items, self.pagination_response_record)
    }
}
