//! Service order return (RMA) API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{RmaByUserResponse, RmaListQuery, RmaResponse};
use crate::pagination::{Pages, RequestPath};

use super::segment;

const SERVICE_BASE_URL: &str = "/return/v1.0/returns";

/// Access to the Cisco Service Order Return (RMA) API.
///
/// Provides RMA information programmatically and in bulk.
#[derive(Debug, Clone)]
pub struct ServiceOrderReturnApi {
    client: SupportClient,
}

impl ServiceOrderReturnApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns detailed information about the specified RMA.
    ///
    /// The service currently accepts a single RMA number per request.
    pub fn get_rma_details_by_rma_number(&self, rma_number: &str) -> Result<Pages<RmaResponse>> {
        let path = format!("{SERVICE_BASE_URL}/rma_numbers/{}", segment(rma_number));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns the RMAs associated with the specified user. By
    /// default the service reports the last 30 days of RMAs.
    ///
    /// The service currently accepts a single user ID per request.
    pub fn get_rma_details_by_user_id(
        &self,
        user_id: &str,
        query: &RmaListQuery,
    ) -> Result<Pages<RmaByUserResponse>> {
        let path = format!("{SERVICE_BASE_URL}/users/user_ids/{}", segment(user_id));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }
}
