//! Support case API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{
    CaseDetail, CaseDetailResponse, CaseListQuery, CaseResponse, CaseSummaryResponse, SortCaseBy,
};
use crate::pagination::{Pages, RequestPath};
use crate::response;
use crate::validate;

use super::{joined_segment, segment};

const SERVICE_BASE_URL: &str = "/case/v3/cases";

/// Access to the Cisco Support Case API.
///
/// Exposes the Support Case Manager's case data for programmatic,
/// bulk access.
#[derive(Debug, Clone)]
pub struct CaseApi {
    client: SupportClient,
}

impl CaseApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns brief information for the specified cases.
    ///
    /// At most 30 case IDs may be passed.
    pub fn get_case_summary(
        &self,
        case_ids: &[&str],
        sort_by: SortCaseBy,
    ) -> Result<Pages<CaseSummaryResponse>> {
        validate::at_most("case_ids", case_ids, 30)?;
        let path = format!("{SERVICE_BASE_URL}/case_ids/{}", joined_segment(case_ids));
        let params = vec![("sort_by".to_string(), Some(sort_by.to_string()))];
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            params,
        ))
    }

    /// Returns detailed information for the specified case.
    pub async fn get_case_details(&self, case_id: &str) -> Result<CaseDetail> {
        let path = format!("{SERVICE_BASE_URL}/details/case_id/{}", segment(case_id));
        let body = self.client.get_json(&path, &[]).await?;
        response::decode_single::<CaseDetailResponse>(body)
    }

    /// Returns summary information for cases associated with the
    /// specified contracts.
    ///
    /// At most 10 contract IDs may be passed.
    pub fn get_cases_by_contract_id(
        &self,
        contract_ids: &[&str],
        query: &CaseListQuery,
    ) -> Result<Pages<CaseResponse>> {
        validate::at_most("contract_ids", contract_ids, 10)?;
        let path = format!(
            "{SERVICE_BASE_URL}/contracts/contract_ids/{}",
            joined_segment(contract_ids)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns summary information for cases associated with the
    /// specified users.
    ///
    /// At most 10 user IDs may be passed.
    pub fn get_cases_by_user_id(
        &self,
        user_ids: &[&str],
        query: &CaseListQuery,
    ) -> Result<Pages<CaseResponse>> {
        validate::at_most("user_ids", user_ids, 10)?;
        let path = format!("{SERVICE_BASE_URL}/users/user_ids/{}", joined_segment(user_ids));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }
}
