//! End-of-life (EoX) API adapter.
//!
//! The EoX service deviates from the rest of the family: the page
//! cursor is a path segment rather than a query parameter, and every
//! request carries `responseencoding=json`.

use chrono::NaiveDate;

use crate::client::SupportClient;
use crate::error::Result;
use crate::models::{EoxAttrib, EoxResponse, SoftwareRelease};
use crate::pagination::{Pages, RequestPath};
use crate::validate;

use super::joined_segment;

const SERVICE_BASE_URL: &str = "/supporttools/eox/rest/5";

/// Access to the Cisco EoX API.
///
/// Provides Cisco end-of-life product data for both hardware and
/// software, looked up by date range, product ID, serial number, or
/// software release.
#[derive(Debug, Clone)]
pub struct EoxApi {
    client: SupportClient,
}

impl EoxApi {
    pub(crate) fn new(client: SupportClient) -> Self {
        Self { client }
    }

    fn default_params() -> Vec<(String, Option<String>)> {
        vec![("responseencoding".to_string(), Some("json".to_string()))]
    }

    fn pages(
        &self,
        endpoint: &str,
        args: &str,
        mut params: Vec<(String, Option<String>)>,
    ) -> Pages<EoxResponse> {
        let mut base = Self::default_params();
        base.append(&mut params);
        Pages::new(
            self.client.clone(),
            RequestPath::Indexed {
                prefix: format!("{SERVICE_BASE_URL}/{endpoint}"),
                suffix: args.to_string(),
            },
            base,
        )
    }

    /// Get EoX notices for all products within an inclusive date range.
    ///
    /// Records match when any of the given date attributes falls in
    /// the range; with no attributes, the update timestamp is used.
    /// At most 20 attributes may be passed.
    pub fn get_by_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        eox_attribs: &[EoxAttrib],
    ) -> Result<Pages<EoxResponse>> {
        validate::at_most("eox_attribs", eox_attribs, 20)?;
        let attribs = eox_attribs
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let params = vec![("eoxAttrib".to_string(), Some(attribs))];
        let args = format!(
            "{}/{}",
            start_date.format("%Y-%m-%d"),
            end_date.format("%Y-%m-%d")
        );
        Ok(self.pages("EOXByDates", &args, params))
    }

    /// Get EoX records for the specified product IDs.
    ///
    /// Wildcards (minimum 3 characters) are accepted, e.g. `*VPN*`.
    /// At most 20 product IDs may be passed.
    pub fn get_by_product_ids(&self, product_ids: &[&str]) -> Result<Pages<EoxResponse>> {
        validate::at_most("product_ids", product_ids, 20)?;
        Ok(self.pages("EOXByProductID", &joined_segment(product_ids), Vec::new()))
    }

    /// Get EoX records for products with the specified serial numbers.
    ///
    /// At most 20 serial numbers may be passed.
    pub fn get_by_serial_number(&self, serial_numbers: &[&str]) -> Result<Pages<EoxResponse>> {
        validate::at_most("serial_numbers", serial_numbers, 20)?;
        Ok(self.pages(
            "EOXBySerialNumber",
            &joined_segment(serial_numbers),
            Vec::new(),
        ))
    }

    /// Get EoX records for products running the specified software
    /// releases.
    ///
    /// At most 20 release/OS combinations may be passed; each may
    /// match multiple records.
    pub fn get_by_software_release(
        &self,
        software_releases: &[SoftwareRelease],
    ) -> Result<Pages<EoxResponse>> {
        validate::at_most("software_releases", software_releases, 20)?;
        let params = software_releases
            .iter()
            .enumerate()
            .map(|(i, release)| (format!("input{}", i + 1), Some(release.to_string())))
            .collect();
        Ok(self.pages("EOXBySWReleaseString", "", params))
    }
}
