//! Serial-number-to-information API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{
    CoverageOwnerStatusResponse, CoverageStatusResponse, CoverageSummaryByInstanceResponse,
    CoverageSummaryResponse, OrderableProductListResponse,
};
use crate::pagination::{Pages, RequestPath};
use crate::validate;

use super::joined_segment;

const SERVICE_BASE_URL: &str = "/sn2info/v2";

/// Access to the Cisco Serial Number to Information API.
///
/// Identifies orderable product IDs and coverage status from device
/// serial numbers.
#[derive(Debug, Clone)]
pub struct SerialNumberApi {
    client: SupportClient,
}

impl SerialNumberApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns coverage status for the specified serial numbers.
    ///
    /// At most 75 serial numbers may be passed.
    pub fn get_coverage_status(
        &self,
        serial_numbers: &[&str],
    ) -> Result<Pages<CoverageStatusResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/coverage/status/serial_numbers/{}",
            joined_segment(serial_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns coverage, warranty, and product identifier details for
    /// the specified serial numbers.
    ///
    /// At most 75 serial numbers may be passed.
    pub fn get_coverage_summary_by_serial(
        &self,
        serial_numbers: &[&str],
    ) -> Result<Pages<CoverageSummaryResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/coverage/summary/serial_numbers/{}",
            joined_segment(serial_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns coverage details for the specified instance numbers.
    ///
    /// At most 75 instance numbers may be passed.
    pub fn get_coverage_summary_by_instance(
        &self,
        instance_numbers: &[&str],
    ) -> Result<Pages<CoverageSummaryByInstanceResponse>> {
        validate::at_most("instance_numbers", instance_numbers, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/coverage/summary/instance_numbers/{}",
            joined_segment(instance_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns the orderable product IDs for the specified serial
    /// numbers.
    ///
    /// At most 75 serial numbers may be passed.
    pub fn get_orderable_pids(
        &self,
        serial_numbers: &[&str],
    ) -> Result<Pages<OrderableProductListResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/identifiers/orderable/serial_numbers/{}",
            joined_segment(serial_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns coverage and ownership status for the specified serial
    /// numbers.
    ///
    /// At most 75 serial numbers may be passed.
    pub fn get_coverage_owner_status(
        &self,
        serial_numbers: &[&str],
    ) -> Result<Pages<CoverageOwnerStatusResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/coverage/owner_status/serial_numbers/{}",
            joined_segment(serial_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }
}
