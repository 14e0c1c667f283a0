//! Serial-number-to-information models and response shapes.

use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::PageEnvelope;

/// Coverage status for a single serial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageStatus {
    #[serde(rename = "sr_no")]
    pub serial_number: String,
    pub is_covered: bool,
    pub coverage_end_date: String,
}

/// Coverage status plus ownership of the serial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageOwnerStatus {
    #[serde(rename = "sr_no")]
    pub serial_number: String,
    pub is_covered: bool,
    pub coverage_end_date: String,
    #[serde(rename = "sr_no_owner")]
    pub is_owner: bool,
}

/// A base product ID entry in a coverage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasePidListItem {
    pub base_pid: String,
}

/// An orderable product ID entry in a coverage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderablePidItem {
    pub item_description: String,
    pub item_position: String,
    pub item_type: String,
    pub orderable_pid: String,
    pub pillar_code: String,
}

/// Coverage, warranty, and contract details for a serial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub id: String,
    pub contract_site_customer_name: String,
    pub contract_site_address1: String,
    pub contract_site_city: String,
    pub contract_site_state_province: String,
    pub contract_site_country: String,
    pub covered_product_line_end_date: String,
    pub is_covered: bool,
    pub sr_no: String,
    pub warranty_end_date: String,
    pub warranty_type: String,
    pub warranty_type_description: String,
    pub service_contract_number: String,
    pub service_line_descr: String,
    pub base_pid_list: Vec<BasePidListItem>,
    pub orderable_pid_list: Vec<OrderablePidItem>,
    pub parent_sr_no: String,
}

/// Base product ID in an instance-number coverage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceBasePid {
    pub base_pid: String,
}

/// Orderable product ID in an instance-number coverage summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceOrderablePid {
    pub item_description: String,
    pub item_position: String,
    pub item_type: String,
    pub orderable_pid: String,
}

/// Coverage details looked up by instance number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageSummaryByInstance {
    pub id: String,
    pub contract_site_customer_name: String,
    pub contract_site_address1: String,
    pub contract_site_city: String,
    pub contract_site_state_province: String,
    pub contract_site_country: String,
    pub covered_product_line_end_date: String,
    pub is_covered: bool,
    pub sr_no: String,
    pub warranty_end_date: String,
    pub warranty_type: String,
    pub warranty_type_description: String,
    pub service_contract_number: String,
    pub service_line_descr: String,
    pub base_pid: InstanceBasePid,
    pub instance_number: String,
    pub parent_instance_no: String,
    pub orderable_pid: InstanceOrderablePid,
}

/// An orderable product ID with its pillar classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderablePidListItem {
    pub orderable_pid: String,
    pub pillar_code: String,
    pub pillar_description: String,
}

/// Orderable product IDs for one serial number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderableProductList {
    pub sr_no: String,
    pub orderable_pid_list: Vec<OrderablePidListItem>,
}

/// Wire shape of the coverage status lookup. Single-page: the
/// endpoint returns no pagination metadata.
#[derive(Debug, Deserialize)]
pub struct CoverageStatusResponse {
    #[serde(rename = "serial_numbers")]
    items: Vec<CoverageStatus>,
}

impl PageEnvelope for CoverageStatusResponse {
    type Item = CoverageStatus;

    fn into_page(self) -> (Vec<CoverageStatus>, Option<PageInfo>) {
        (self.items, None)
    }
}

/// Wire shape of the coverage summary by serial number.
#[derive(Debug, Deserialize)]
pub struct CoverageSummaryResponse {
    pagination_response_record: PageInfo,
    #[serde(rename = "serial_numbers")]
    items: Vec<CoverageSummary>,
}

impl PageEnvelope for CoverageSummaryResponse {
    type Item = CoverageSummary;

    fn into_page(self) -> (Vec<CoverageSummary>, Option<PageInfo>) {
        (self.items, Some(self.pagination_response_record))
    }
}

/// Wire shape of the coverage summary by instance number.
#[derive(Debug, Deserialize)]
pub struct CoverageSummaryByInstanceResponse {
    pagination_response_record: PageInfo,
    #[serde(rename = "instance_numbers")]
    items: Vec<CoverageSummaryByInstance>,
}

impl PageEnvelope for CoverageSummaryByInstanceResponse {
    type Item = CoverageSummaryByInstance;

    fn into_page(self) -> (Vec<CoverageSummaryByInstance>, Option<PageInfo>) {
        (self.items, Some(self.pagination_response_record))
    }
}

/// Wire shape of the orderable PID lookup. Single-page.
#[derive(Debug, Deserialize)]
pub struct OrderableProductListResponse {
    #[serde(rename = "serial_numbers")]
    items: Vec<OrderableProductList>,
}

impl PageEnvelope for OrderableProductListResponse {
    type Item = OrderableProductList;

    fn into_page(self) -> (Vec<OrderableProductList>, Option<PageInfo>) {
        (self.items, None)
    }
}

/// Wire shape of the coverage owner status lookup. Single-page.
#[derive(Debug, Deserialize)]
pub struct CoverageOwnerStatusResponse {
    #[serde(rename = "serial_numbers")]
    items: Vec<CoverageOwnerStatus>,
}

impl PageEnvelope for CoverageOwnerStatusResponse {
    type Item = CoverageOwnerStatus;

    fn into_page(self) -> (Vec<CoverageOwnerStatus>, Option<PageInfo>) {
        (self.items, None)
    }
}
