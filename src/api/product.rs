//! Product information API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{ProductInformationResponse, ProductMdfResponse};
use crate::pagination::{Pages, RequestPath};
use crate::validate;

use super::joined_segment;

const SERVICE_BASE_URL: &str = "/product/v1/information";

/// Access to the Cisco Product Information API.
///
/// Looks up product details by serial number or product ID.
#[derive(Debug, Clone)]
pub struct ProductInformationApi {
    client: SupportClient,
}

impl ProductInformationApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns product information for the specified serial numbers.
    ///
    /// At most 5 serial numbers may be passed.
    pub fn get_info_by_serial(
        &self,
        serial_numbers: &[&str],
    ) -> Result<Pages<ProductInformationResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 5)?;
        let path = format!(
            "{SERVICE_BASE_URL}/serial_numbers/{}",
            joined_segment(serial_numbers)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns product information for the specified product IDs.
    ///
    /// At most 5 product IDs may be passed.
    pub fn get_info_by_product_id(
        &self,
        product_ids: &[&str],
    ) -> Result<Pages<ProductInformationResponse>> {
        validate::at_most("product_ids", product_ids, 5)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_ids/{}",
            joined_segment(product_ids)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns metadata framework (MDF) identifiers for the specified
    /// product IDs.
    ///
    /// At most 5 product IDs may be passed.
    pub fn get_mdf_by_product_id(&self, product_ids: &[&str]) -> Result<Pages<ProductMdfResponse>> {
        validate::at_most("product_ids", product_ids, 5)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_ids_mdf/{}",
            joined_segment(product_ids)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }
}
