//! Service order return (RMA) models and response shapes.
//!
//! The RMA service uses camelCase wire keys and reports pagination
//! under `APIPagination`. The by-user endpoint additionally nests its
//! whole payload (records, pagination, and errors) one level down
//! inside `OrderList`, and advances pages on the records-in-page
//! count; both quirks are handled by the envelope declarations here.

use serde::{Deserialize, Serialize};

use crate::pagination::{AdvanceRule, PageInfo};
use crate::response::PageEnvelope;

/// Customer reference numbers attached to an RMA.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRefInfo {
    #[serde(rename = "customerPONumber")]
    pub customer_po_number: String,
    pub orig_sales_order_number: String,
    pub customer_ref_number: String,
    #[serde(rename = "customerProvidedSN")]
    pub customer_provided_sn: String,
}

/// Shipping destination and acknowledgement contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipToInfo {
    pub customer_name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub address4: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub state_prov: String,
    pub site_use_id: String,
    pub ack_user_id: String,
    pub ack_phone: String,
    pub ack_email: String,
    pub ack_name: String,
    pub ship_to_contact_name: String,
    pub ship_to_contact_phone: String,
    pub ship_to_contact_email: String,
}

/// Billing address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillToInfo {
    pub customer_name: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub address4: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub state_prov: String,
    pub site_use_id: String,
}

/// Courier tracking for a replacement shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub tracking_number: String,
    pub courier_list: String,
    pub ship_date: String,
}

/// One line of a replacement-parts shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsLineDetail {
    pub parts_line_ref: String,
    pub parts_line_status: String,
    pub parts_transaction_type: String,
    pub shipped_part_no: String,
    pub parts_description: String,
    pub parts_qty_auth: String,
    pub parts_scheduled_ship_time: String,
    pub partsqty_shipped: String,
    pub parts_ship_date: String,
    pub parts_shipment_warehouse: String,
    pub parts_dispatch_status: String,
}

/// Replacement parts shipped for an RMA.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementParts {
    pub tracking_info: TrackingInfo,
    pub parts_line_details: Vec<PartsLineDetail>,
}

/// One part expected back from the customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPart {
    pub return_line_ref: String,
    pub return_line_status: String,
    pub return_transaction_type: String,
    pub received_part_no: String,
    pub return_description: String,
    pub return_qty_auth: String,
    pub return_to_cisco_by: String,
    // The feed itself spells this key "reqturnQtyReceived".
    pub reqturn_qty_received: String,
    pub return_date_received: String,
    pub return_warehouse: String,
}

/// Parts to be returned under an RMA.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLines {
    pub return_parts: Vec<ReturnPart>,
}

/// One scheduled labor task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborLine {
    pub labor_task_number: String,
    pub labor_status: String,
    pub primary_product_family: String,
    pub labor_scheduled_time: String,
    pub labor_dispatch: String,
    pub labor_dispatch_or_cancellation_notes: String,
}

/// Field-engineer dispatch details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaborDetails {
    pub field_engineer_name: String,
    pub field_engineer_phone: String,
    pub field_engineer_on_route_time: String,
    pub field_engineer_arrived_time: String,
    pub field_engineer_released_time: String,
    pub labor_lines: Vec<LaborLine>,
}

/// Free-text notes attached to an RMA.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RmaNotes {
    pub addl_comments: String,
    pub failure_description: String,
    pub field_engineer_instructions: String,
    pub part_delivery_instructions: String,
    pub partial_shipment_note: String,
    pub special_instructions: String,
}

/// A service order return.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rma {
    pub rma_no: i64,
    pub status: String,
    pub order_date: String,
    pub case_id: String,
    pub requested_ship_date: String,
    pub originator: String,
    pub allow_partial_shipment: String,
    pub failure_class: String,
    pub failure_code: String,
    pub contract_id: String,
    pub service_level: String,
    pub customer_ref_info: CustomerRefInfo,
    pub ship_to_info: ShipToInfo,
    pub bill_to_info: BillToInfo,
    pub replacement_parts: ReplacementParts,
    pub return_lines: ReturnLines,
    pub labor_details: LaborDetails,
    pub notes: RmaNotes,
}

/// Filters for the by-user RMA listing.
#[derive(Debug, Clone, Default)]
pub struct RmaListQuery {
    /// Beginning of the order-date range, e.g. `2013-04-01`.
    pub from_date: Option<String>,
    /// End of the order-date range.
    pub to_date: Option<String>,
    /// Only RMAs with this status.
    pub status: Option<String>,
    /// Sort order for the results.
    pub sort_by: Option<String>,
}

impl RmaListQuery {
    pub(crate) fn to_params(&self) -> Vec<(String, Option<String>)> {
        vec![
            ("fromDate".to_string(), self.from_date.clone()),
            ("toDate".to_string(), self.to_date.clone()),
            ("status".to_string(), self.status.clone()),
            ("sortBy".to_string(), self.sort_by.clone()),
        ]
    }
}

/// A user with their associated returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RmaUser {
    pub user_id: String,
    pub return_count: String,
    pub returns: Vec<Rma>,
}

#[derive(Debug, Deserialize)]
struct Returns {
    #[serde(rename = "RmaRecord")]
    rma_records: Vec<Rma>,
}

/// Wire shape of the by-RMA-number lookup: records nested under
/// `returns.RmaRecord`, pagination under `APIPagination`.
#[derive(Debug, Deserialize)]
pub struct RmaResponse {
    #[serde(rename = "APIPagination")]
    pagination: PageInfo,
    returns: Returns,
}

impl PageEnvelope for RmaResponse {
    type Item = Rma;

    const PAGE_PARAM: &'static str = "pageIndex";

    fn into_page(self) -> (Vec<Rma>, Option<PageInfo>) {
        (self.returns.rma_records, Some(self.pagination))
    }
}

#[derive(Debug, Deserialize)]
struct OrderList {
    #[serde(rename = "APIPagination")]
    pagination: PageInfo,
    users: Vec<RmaUser>,
}

/// Wire shape of the by-user lookup: everything, including embedded
/// errors, lives one level down inside `OrderList`, and the service
/// advances pages on the records-in-page count rather than a last
/// index.
#[derive(Debug, Deserialize)]
pub struct RmaByUserResponse {
    #[serde(rename = "OrderList")]
    order_list: OrderList,
}

impl PageEnvelope for RmaByUserResponse {
    type Item = RmaUser;

    const PAGE_PARAM: &'static str = "pageIndex";
    const ADVANCE: AdvanceRule = AdvanceRule::PageRecords;
    const ERROR_SCOPE: Option<&'static str> = Some("OrderList");

    fn into_page(self) -> (Vec<RmaUser>, Option<PageInfo>) {
        (self.order_list.users, Some(self.order_list.pagination))
    }
}
