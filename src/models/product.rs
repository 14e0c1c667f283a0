//! Product information models and response shapes.

use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::PageEnvelope;

/// Physical dimensions of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub dimensions_format: String,
    pub dimensions_value: String,
}

/// Product imagery links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichMediaUrls {
    pub large_image_url: String,
    pub small_image_url: String,
}

/// Product details looked up by serial number or product ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInformationRecord {
    pub id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    pub product_name: String,
    pub product_type: String,
    pub product_series: String,
    pub product_category: String,
    pub product_subcategory: String,
    pub release_date: String,
    pub orderable_status: String,
    pub dimensions: Dimensions,
    pub weight: String,
    pub form_factor: String,
    pub product_support_page: String,
    pub visio_stencil_url: String,
    pub rich_media_urls: RichMediaUrls,
}

/// Metadata framework identifiers for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMdfRecord {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_name_mdf: String,
    pub product_series: String,
    pub product_series_mdf: String,
}

/// Wire shape of the product information lookups: records under
/// `product_list`.
#[derive(Debug, Deserialize)]
pub struct ProductInformationResponse {
    #[serde(rename = "product_list")]
    items: Vec<ProductInformationRecord>,
    #[serde(default)]
    pagination_response_record: Option<PageInfo>,
}

impl PageEnvelope for ProductInformationResponse {
    type Item = ProductInformationRecord;

    fn into_page(self) -> (Vec<ProductInformationRecord>, Option<PageInfo>) {
        (self.items, self.pagination_response_record)
    }
}

/// Wire shape of the MDF identifier lookup.
#[derive(Debug, Deserialize)]
pub struct ProductMdfResponse {
    #[serde(rename = "product_list")]
    items: Vec<ProductMdfRecord>,
    #[serde(default)]
    pagination_response_record: Option<PageInfo>,
}

impl PageEnvelope for ProductMdfResponse {
    type Item = ProductMdfRecord;

    fn into_page(self) -> (Vec<ProductMdfRecord>, Option<PageInfo>) {
        (self.items, self.pagination_response_record)
    }
}
