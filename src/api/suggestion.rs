//! Software suggestion API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{CompatibleQuery, CompatibleSoftwareResponse, SuggestionsByProductResponse};
use crate::pagination::{Pages, RequestPath};
use crate::validate;

use super::{joined_segment, segment};

const SERVICE_BASE_URL: &str = "/software/suggestion/v2/suggestions";

/// Access to the Cisco Software Suggestion API.
///
/// Surfaces Cisco's suggested software releases and images to assist
/// upgrade planning.
#[derive(Debug, Clone)]
pub struct SoftwareSuggestionApi {
    client: SupportClient,
}

impl SoftwareSuggestionApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns suggested software releases and images for the
    /// specified product IDs.
    ///
    /// At most 10 product IDs may be passed.
    pub fn get_suggestions_and_image_by_product_ids(
        &self,
        product_ids: &[&str],
    ) -> Result<Pages<SuggestionsByProductResponse>> {
        validate::at_most("product_ids", product_ids, 10)?;
        let path = format!(
            "{SERVICE_BASE_URL}/software/productIds/{}",
            joined_segment(product_ids)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns suggested software releases (without images) for the
    /// specified product IDs.
    ///
    /// At most 10 product IDs may be passed.
    pub fn get_suggestions_by_product_ids(
        &self,
        product_ids: &[&str],
    ) -> Result<Pages<SuggestionsByProductResponse>> {
        validate::at_most("product_ids", product_ids, 10)?;
        let path = format!(
            "{SERVICE_BASE_URL}/releases/productIds/{}",
            joined_segment(product_ids)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns compatible and suggested software releases for a
    /// product, narrowed by the given software attributes.
    pub fn get_compatible_by_product_id(
        &self,
        product_id: &str,
        query: &CompatibleQuery,
    ) -> Result<Pages<CompatibleSoftwareResponse>> {
        let path = format!(
            "{SERVICE_BASE_URL}/compatible/productId/{}",
            segment(product_id)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns suggested software releases and images for the
    /// specified MDF IDs.
    ///
    /// At most 10 MDF IDs may be passed.
    pub fn get_suggestions_and_image_by_mdf_ids(
        &self,
        mdf_ids: &[&str],
    ) -> Result<Pages<SuggestionsByProductResponse>> {
        validate::at_most("mdf_ids", mdf_ids, 10)?;
        let path = format!("{SERVICE_BASE_URL}/software/mdfIds/{}", joined_segment(mdf_ids));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns suggested software releases (without images) for the
    /// specified MDF IDs.
    ///
    /// At most 10 MDF IDs may be passed.
    pub fn get_suggestions_by_mdf_ids(
        &self,
        mdf_ids: &[&str],
    ) -> Result<Pages<SuggestionsByProductResponse>> {
        validate::at_most("mdf_ids", mdf_ids, 10)?;
        let path = format!("{SERVICE_BASE_URL}/releases/mdfIds/{}", joined_segment(mdf_ids));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns compatible and suggested software releases for a
    /// product given its MDF identifier.
    pub fn get_compatible_by_mdf_id(
        &self,
        mdf_id: &str,
        query: &CompatibleQuery,
    ) -> Result<Pages<CompatibleSoftwareResponse>> {
        let path = format!("{SERVICE_BASE_URL}/compatible/mdfId/{}", segment(mdf_id));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }
}
