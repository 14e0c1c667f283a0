//! Bug API adapter.

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{Bug, BugListQuery, BugListResponse};
use crate::pagination::{Pages, RequestPath};
use crate::validate;

use super::{joined_segment, segment};

const SERVICE_BASE_URL: &str = "/bug/v2.0/bugs";

/// Access to the Cisco Bug API.
///
/// Cisco defects are made visible to customers and partners through
/// the Bug Search Tool; this API exposes the same bug details and
/// searches for integration into other tooling.
#[derive(Debug, Clone)]
pub struct BugApi {
    client: SupportClient,
}

impl BugApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    /// Returns detailed information for the specified bug IDs.
    ///
    /// At most 5 bug IDs may be passed.
    pub fn get_bug_details(&self, bug_ids: &[&str]) -> Result<Pages<BugListResponse>> {
        validate::at_most("bug_ids", bug_ids, 5)?;
        let path = format!("{SERVICE_BASE_URL}/bug_ids/{}", joined_segment(bug_ids));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            Vec::new(),
        ))
    }

    /// Returns the bugs associated with the specified base product ID.
    pub fn get_bugs_by_product_id(
        &self,
        base_pid: &str,
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        let path = format!(
            "{SERVICE_BASE_URL}/products/product_id/{}",
            segment(base_pid)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified base product ID
    /// and software releases.
    ///
    /// At most 75 software releases may be passed.
    pub fn get_bugs_by_product_id_and_release(
        &self,
        base_pid: &str,
        software_releases: &[&str],
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        validate::at_most("software_releases", software_releases, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/products/product_id/{}/software_releases/{}",
            segment(base_pid),
            joined_segment(software_releases)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified keyword or
    /// keywords.
    pub fn get_bugs_by_keyword(
        &self,
        keyword: &str,
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        let path = format!("{SERVICE_BASE_URL}/keyword/{}", segment(keyword));
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified hardware product
    /// series and affected software releases.
    ///
    /// At most 75 affected releases may be passed.
    pub fn get_bugs_by_product_and_affected_release(
        &self,
        product_series: &str,
        affected_releases: &[&str],
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        validate::at_most("affected_releases", affected_releases, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_series/{}/affected_releases/{}",
            segment(product_series),
            joined_segment(affected_releases)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified hardware product
    /// series and fixed-in software releases.
    ///
    /// At most 75 fixed-in releases may be passed.
    pub fn get_bugs_by_product_and_fixed_release(
        &self,
        product_series: &str,
        fixed_in_releases: &[&str],
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        validate::at_most("fixed_in_releases", fixed_in_releases, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_series/{}/fixed_in_releases/{}",
            segment(product_series),
            joined_segment(fixed_in_releases)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified product name and
    /// affected software releases.
    ///
    /// At most 75 affected releases may be passed.
    pub fn get_bugs_by_product_name_and_affected_release(
        &self,
        product_name: &str,
        affected_releases: &[&str],
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        validate::at_most("affected_releases", affected_releases, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_name/{}/affected_releases/{}",
            segment(product_name),
            joined_segment(affected_releases)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }

    /// Returns the bugs associated with the specified product name and
    /// fixed-in software releases.
    ///
    /// At most 75 fixed-in releases may be passed.
    pub fn get_bugs_by_product_name_and_fixed_release(
        &self,
        product_name: &str,
        fixed_in_releases: &[&str],
        query: &BugListQuery,
    ) -> Result<Pages<BugListResponse>> {
        validate::at_most("fixed_in_releases", fixed_in_releases, 75)?;
        let path = format!(
            "{SERVICE_BASE_URL}/product_name/{}/fixed_in_releases/{}",
            segment(product_name),
            joined_segment(fixed_in_releases)
        );
        Ok(Pages::new(
            self.client.clone(),
            RequestPath::Fixed(path),
            query.to_params(),
        ))
    }
}
