//! Support case models and response shapes.

use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::{PageEnvelope, SingleEnvelope};

/// Sort order for case summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCaseBy {
    #[default]
    UpdatedDate,
    Status,
}

impl SortCaseBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCaseBy::UpdatedDate => "UPDATED_DATE",
            SortCaseBy::Status => "STATUS",
        }
    }
}

impl std::fmt::Display for SortCaseBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseStatusFlag {
    #[default]
    Open,
    Closed,
}

impl CaseStatusFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatusFlag::Open => "O",
            CaseStatusFlag::Closed => "C",
        }
    }
}

impl std::fmt::Display for CaseStatusFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the by-contract and by-user case listings.
#[derive(Debug, Clone, Default)]
pub struct CaseListQuery {
    /// Beginning of the creation-date range (UTC), e.g.
    /// `2013-04-23T11:00:14Z`. The API supports a 90-day window.
    pub date_created_from: Option<String>,
    /// End of the creation-date range (UTC).
    pub date_created_to: Option<String>,
    /// Only cases with this status.
    pub status_flag: CaseStatusFlag,
}

impl CaseListQuery {
    pub(crate) fn to_params(&self) -> Vec<(String, Option<String>)> {
        vec![
            (
                "date_created_from".to_string(),
                self.date_created_from.clone(),
            ),
            ("date_created_to".to_string(), self.date_created_to.clone()),
            (
                "status_flag".to_string(),
                Some(self.status_flag.to_string()),
            ),
        ]
    }
}

/// Summary information for a support case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub bugs: Vec<String>,
    pub case_id: String,
    pub contact_name: String,
    pub contract_id: String,
    pub creation_date: String,
    #[serde(default)]
    pub item_entry_id: Option<i64>,
    pub rmas: Vec<String>,
    pub serial_number: String,
    pub status: String,
    #[serde(default)]
    pub sub_technology_name: Option<String>,
    #[serde(default)]
    pub status_flag: Option<String>,
    pub severity: String,
    #[serde(default)]
    pub technology_name: Option<String>,
    pub title: String,
    pub user_id: String,
    pub updated_date: String,
}

/// A note attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub note: String,
    pub note_detail: String,
    pub created_by: String,
    pub creation_date: String,
}

/// Detailed information for a single case.
///
/// Carries everything [`Case`] does plus contact, ownership, and
/// resolution details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDetail {
    pub bugs: Vec<String>,
    pub case_id: String,
    pub contact_name: String,
    pub contract_id: String,
    pub creation_date: String,
    #[serde(default)]
    pub item_entry_id: Option<i64>,
    pub rmas: Vec<String>,
    pub serial_number: String,
    pub status: String,
    #[serde(default)]
    pub sub_technology_name: Option<String>,
    #[serde(default)]
    pub status_flag: Option<String>,
    pub severity: String,
    #[serde(default)]
    pub technology_name: Option<String>,
    pub title: String,
    pub user_id: String,
    pub updated_date: String,
    pub contact_user_id: String,
    pub preferred_contact_method: String,
    pub contact_email_ids: Vec<String>,
    pub contact_business_phone_numbers: Vec<String>,
    pub contact_mobile_phone_numbers: Vec<String>,
    pub owner_name: String,
    pub owner_email: String,
    pub close_date: String,
    pub tracking_number: String,
    pub problem_code_name: String,
    pub request_type: String,
    pub notes: Vec<Note>,
}

/// Wire shape of the case summary endpoint.
#[derive(Debug, Deserialize)]
pub struct CaseSummaryResponse {
    #[serde(rename = "cases")]
    items: Vec<Case>,
    pub count: i64,
    #[serde(default)]
    pagination_response_record: Option<PageInfo>,
}

impl PageEnvelope for CaseSummaryResponse {
    type Item = Case;

    fn into_page(self) -> (Vec<Case>, Option<PageInfo>) {
        (self.items, self.pagination_response_record)
    }
}

/// Wire shape of the by-contract and by-user case listings.
#[derive(Debug, Deserialize)]
pub struct CaseResponse {
    #[serde(rename = "cases")]
    items: Vec<Case>,
    #[serde(default)]
    pagination_response_record: Option<PageInfo>,
}

impl PageEnvelope for CaseResponse {
    type Item = Case;

    fn into_page(self) -> (Vec<Case>, Option<PageInfo>) {
        (self.items, self.pagination_response_record)
    }
}

/// Wire shape of the case detail endpoint: one aggregate object under
/// `caseDetail`.
#[derive(Debug, Deserialize)]
pub struct CaseDetailResponse {
    #[serde(rename = "caseDetail")]
    detail: CaseDetail,
}

impl SingleEnvelope for CaseDetailResponse {
    type Item = CaseDetail;

    fn into_inner(self) -> CaseDetail {
        self.detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_deserialize() {
        let case: Case = serde_json::from_value(json!({
            "bugs": [],
            "case_id": "688423698",
            "contact_name": "J. Doe",
            "contract_id": "912512343",
            "creation_date": "2013-04-23T11:00:14Z",
            "item_entry_id": null,
            "rmas": ["800000000"],
            "serial_number": "FXS2130Q286",
            "status": "Closed",
            "severity": "3",
            "title": "Port flapping",
            "user_id": "jdoe",
            "updated_date": "2013-05-01T09:12:00Z"
        }))
        .unwrap();

        assert_eq!(case.case_id, "688423698");
        assert!(case.item_entry_id.is_none());
        assert_eq!(case.rmas, vec!["800000000"]);
    }

    #[test]
    fn test_status_flag_defaults_to_open() {
        let query = CaseListQuery::default();
        let params = query.to_params();
        assert_eq!(
            params.iter().find(|(k, _)| k == "status_flag").unwrap().1,
            Some("O".to_string())
        );
    }
}
