//! Software suggestion models and response shapes.
//!
//! This family uses camelCase request and response conventions
//! throughout, including the `pageIndex` cursor parameter.

use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::PageEnvelope;

/// The product a set of suggestions applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, rename = "basePID")]
    pub base_pid: Option<String>,
    #[serde(rename = "mdfId")]
    pub mdf_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "softwareType")]
    pub software_type: String,
}

/// A downloadable software image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "imageName")]
    pub name: String,
    #[serde(rename = "imageSize")]
    pub size: String,
    #[serde(default, rename = "featureSet")]
    pub feature_set: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "requiredDRAM")]
    pub required_dram: String,
    #[serde(rename = "requiredFlash")]
    pub required_flash: String,
}

/// Error details attached to a suggestion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "errorCode")]
    pub error_code: String,
    #[serde(rename = "errorDescription")]
    pub error_description: String,
    #[serde(rename = "suggestedAction")]
    pub suggested_action: String,
    #[serde(rename = "inputIdentifier")]
    pub input_identifier: String,
}

/// A suggested software release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "isSuggested")]
    pub is_suggested: bool,
    #[serde(rename = "releaseFormat1")]
    pub release_format1: String,
    #[serde(rename = "releaseFormat2")]
    pub release_format2: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    #[serde(rename = "majorRelease")]
    pub major_release: String,
    #[serde(rename = "releaseTrain")]
    pub release_train: String,
    #[serde(rename = "releaseLifeCycle")]
    pub release_life_cycle: String,
    #[serde(rename = "relDispName")]
    pub rel_display_name: String,
    #[serde(rename = "trainDispName")]
    pub train_display_name: String,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default, rename = "errorDetailsResponse")]
    pub error_details_response: Option<ErrorDetails>,
}

/// Suggestions grouped under the product they apply to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    pub id: String,
    pub product: Product,
    pub suggestions: Vec<Suggestion>,
}

/// Software attributes narrowing a compatibility lookup.
#[derive(Debug, Clone, Default)]
pub struct CompatibleQuery {
    pub current_image: Option<String>,
    pub current_release: Option<String>,
    pub supported_features: Option<Vec<String>>,
    pub supported_hardware: Option<Vec<String>>,
}

impl CompatibleQuery {
    pub(crate) fn to_params(&self) -> Vec<(String, Option<String>)> {
        vec![
            ("currentImage".to_string(), self.current_image.clone()),
            ("currentRelease".to_string(), self.current_release.clone()),
            (
                "supportedFeatures".to_string(),
                self.supported_features.as_ref().map(|v| v.join(",")),
            ),
            (
                "supportedHardware".to_string(),
                self.supported_hardware.as_ref().map(|v| v.join(",")),
            ),
        ]
    }
}

/// Wire shape of the by-product and by-MDF suggestion lookups:
/// grouped records under `productList`.
#[derive(Debug, Deserialize)]
pub struct SuggestionsByProductResponse {
    #[serde(rename = "paginationResponseRecord")]
    pagination: PageInfo,
    #[serde(rename = "productList")]
    items: Vec<Suggestions>,
    pub status: String,
    #[serde(default, rename = "errorDetailsResponse")]
    pub error_details_response: Option<ErrorDetails>,
}

impl PageEnvelope for SuggestionsByProductResponse {
    type Item = Suggestions;

    const PAGE_PARAM: &'static str = "pageIndex";

    fn into_page(self) -> (Vec<Suggestions>, Option<PageInfo>) {
        (self.items, Some(self.pagination))
    }
}

/// Wire shape of the compatibility lookups: flat records under
/// `suggestions`.
#[derive(Debug, Deserialize)]
pub struct CompatibleSoftwareResponse {
    #[serde(rename = "paginationResponseRecord")]
    pagination: PageInfo,
    #[serde(rename = "suggestions")]
    items: Vec<Suggestion>,
    pub status: String,
    #[serde(default, rename = "errorDetailsResponse")]
    pub error_details_response: Option<ErrorDetails>,
}

impl PageEnvelope for CompatibleSoftwareResponse {
    type Item = Suggestion;

    const PAGE_PARAM: &'static str = "pageIndex";

    fn into_page(self) -> (Vec<Suggestion>, Option<PageInfo>) {
        (self.items, Some(self.pagination))
    }
}
