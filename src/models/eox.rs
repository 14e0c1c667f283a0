//! End-of-life (EoX) models and response shapes.
//!
//! The EoX service predates the rest of the support API family and
//! shows it: PascalCase metadata keys, the page cursor embedded in the
//! URL path, and errors reported through a top-level `EOXError` key.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pagination::PageInfo;
use crate::response::PageEnvelope;

/// Date attribute selecting which EoX milestone a date-range query
/// matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EoxAttrib {
    ExtAnnounceDate,
    SalesDate,
    FailAnalysisDate,
    SvcAttachDate,
    SwMaintenanceDate,
    SecurityVulSupportDate,
    ContractRenewDate,
    LastSupportDate,
    UpdateTimestamp,
}

impl EoxAttrib {
    pub fn as_str(&self) -> &'static str {
        match self {
            EoxAttrib::ExtAnnounceDate => "EO_EXT_ANNOUNCE_DATE",
            EoxAttrib::SalesDate => "EO_SALES_DATE",
            EoxAttrib::FailAnalysisDate => "EO_FAIL_ANALYSIS_DATE",
            EoxAttrib::SvcAttachDate => "EO_SVC_ATTACH_DATE",
            EoxAttrib::SwMaintenanceDate => "EO_SW_MAINTENANCE_DATE",
            EoxAttrib::SecurityVulSupportDate => "EO_SECURITY_VUL_SUPPORT_DATE",
            EoxAttrib::ContractRenewDate => "EO_CONTRACT_RENEW_DATE",
            EoxAttrib::LastSupportDate => "EO_LAST_SUPPORT_DATE",
            EoxAttrib::UpdateTimestamp => "UPDATE_TIMESTAMP",
        }
    }
}

impl std::fmt::Display for EoxAttrib {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system identifiers accepted by the software-release
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsType {
    Acns,
    Acsw,
    Altigaos,
    Asa,
    Asyncos,
    Catos,
    CdsIs,
    CdsTv,
    CdsVn,
    CdsVqe,
    Cts,
    Ecds,
    FwsmOs,
    Gss,
    Ios,
    IosXr,
    IosXe,
    Ips,
    Nam,
    NxOs,
    Ons,
    Pixos,
    SanOs,
    StarOs,
    Tc,
    Te,
    UcsNxOs,
    Vcs,
    VdsIs,
    Waas,
    WanswBpxIgxIpx,
    Webns,
    Wlc,
    WlseOs,
    Xc,
}

impl OsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsType::Acns => "ACNS",
            OsType::Acsw => "ACSW",
            OsType::Altigaos => "ALTIGAOS",
            OsType::Asa => "ASA",
            OsType::Asyncos => "ASYNCOS",
            OsType::Catos => "CATOS",
            OsType::CdsIs => "CDS-IS",
            OsType::CdsTv => "CDS-TV",
            OsType::CdsVn => "CDS-VN",
            OsType::CdsVqe => "CDS-VQE",
            OsType::Cts => "CTS",
            OsType::Ecds => "ECDS",
            OsType::FwsmOs => "FWSM-OS",
            OsType::Gss => "GSS",
            OsType::Ios => "IOS",
            OsType::IosXr => "IOS XR",
            OsType::IosXe => "IOS-XE",
            OsType::Ips => "IPS",
            OsType::Nam => "NAM",
            OsType::NxOs => "NX-OS",
            OsType::Ons => "ONS",
            OsType::Pixos => "PIXOS",
            OsType::SanOs => "SAN-OS",
            OsType::StarOs => "STAR OS",
            OsType::Tc => "TC",
            OsType::Te => "TE",
            OsType::UcsNxOs => "UCS NX-OS",
            OsType::Vcs => "VCS",
            OsType::VdsIs => "VDS-IS",
            OsType::Waas => "WAAS",
            OsType::WanswBpxIgxIpx => "WANSW BPX/IGX/IPX",
            OsType::Webns => "WEBNS",
            OsType::Wlc => "WLC",
            OsType::WlseOs => "WLSE-OS",
            OsType::Xc => "XC",
        }
    }
}

impl std::fmt::Display for OsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A software release / operating system pair for the
/// by-software-release lookup.
#[derive(Debug, Clone)]
pub struct SoftwareRelease {
    pub os: OsType,
    pub version: String,
}

impl SoftwareRelease {
    pub fn new(os: OsType, version: impl Into<String>) -> Self {
        Self {
            os,
            version: version.into(),
        }
    }
}

impl std::fmt::Display for SoftwareRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.version, self.os)
    }
}

/// Error payload reported by the EoX service, either at the top level
/// of a response or attached to an individual record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoxErrorDetails {
    #[serde(default, rename = "ErrorID")]
    pub error_id: Option<String>,
    #[serde(default, rename = "ErrorDescription")]
    pub error_description: Option<String>,
    #[serde(default, rename = "ErrorDataType")]
    pub error_data_type: Option<String>,
    #[serde(default, rename = "ErrorDataValue")]
    pub error_data_value: Option<String>,
}

impl std::fmt::Display for EoxErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.error_id.as_deref().unwrap_or("unknown"),
            self.error_description.as_deref().unwrap_or("no description"),
        )?;
        if let Some(value) = &self.error_data_value {
            write!(f, " ({value})")?;
        }
        Ok(())
    }
}

/// A milestone date in an EoX record.
///
/// The service reports dates as a string plus the format it used; an
/// empty value means the milestone is not yet announced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoxDate {
    pub value: String,
    #[serde(default, rename = "dateFormat")]
    pub date_format: Option<String>,
}

impl EoxDate {
    /// Parse the milestone into a date. An empty value is treated as
    /// the far-future sentinel `2099-01-01`, matching how the feed is
    /// conventionally read.
    pub fn to_date(&self) -> Result<NaiveDate, chrono::ParseError> {
        let value = if self.value.is_empty() {
            "2099-01-01"
        } else {
            self.value.as_str()
        };
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
    }
}

/// Migration guidance attached to an EoX record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoxMigrationDetails {
    #[serde(rename = "PIDActiveFlag")]
    pub pid_active_flag: String,
    #[serde(rename = "MigrationInformation")]
    pub migration_information: String,
    #[serde(rename = "MigrationOption")]
    pub migration_option: String,
    #[serde(rename = "MigrationProductId")]
    pub migration_product_id: String,
    #[serde(rename = "MigrationProductName")]
    pub migration_product_name: String,
    #[serde(rename = "MigrationStrategy")]
    pub migration_strategy: String,
    #[serde(rename = "MigrationProductInfoURL")]
    pub migration_product_info_url: String,
}

/// An end-of-life record for a product or software release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoxRecord {
    #[serde(rename = "EOLProductID")]
    pub eol_product_id: String,
    #[serde(rename = "ProductIDDescription")]
    pub product_id_description: String,
    #[serde(rename = "ProductBulletinNumber")]
    pub product_bulletin_number: String,
    #[serde(rename = "LinkToProductBulletinURL")]
    pub link_to_product_bulletin_url: String,
    #[serde(rename = "EOXExternalAnnouncementDate")]
    pub eox_external_announcement_date: EoxDate,
    #[serde(rename = "EndOfSaleDate")]
    pub end_of_sale_date: EoxDate,
    #[serde(rename = "EndOfSWMaintenanceReleases")]
    pub end_of_sw_maintenance_releases: EoxDate,
    #[serde(default, rename = "EndOfSecurityVulSupportDate")]
    pub end_of_security_vul_support_date: Option<EoxDate>,
    #[serde(rename = "EndOfRoutineFailureAnalysisDate")]
    pub end_of_routine_failure_analysis_date: EoxDate,
    #[serde(rename = "EndOfServiceContractRenewal")]
    pub end_of_service_contract_renewal: EoxDate,
    #[serde(rename = "LastDateOfSupport")]
    pub last_date_of_support: EoxDate,
    #[serde(rename = "EndOfSvcAttachDate")]
    pub end_of_svc_attach_date: EoxDate,
    #[serde(rename = "UpdatedTimeStamp")]
    pub updated_time_stamp: EoxDate,
    #[serde(rename = "EOXMigrationDetails")]
    pub eox_migration_details: EoxMigrationDetails,
    #[serde(rename = "EOXInputType")]
    pub eox_input_type: String,
    #[serde(rename = "EOXInputValue")]
    pub eox_input_value: String,
    #[serde(default, rename = "EOXError")]
    pub eox_error: Option<EoxErrorDetails>,
}

/// Wire shape of every EoX lookup: records under `EOXRecord`, with
/// PascalCase pagination metadata.
#[derive(Debug, Deserialize)]
pub struct EoxResponse {
    #[serde(rename = "PaginationResponseRecord")]
    pagination: PageInfo,
    #[serde(rename = "EOXRecord")]
    items: Vec<EoxRecord>,
}

impl PageEnvelope for EoxResponse {
    type Item = EoxRecord;

    fn into_page(self) -> (Vec<EoxRecord>, Option<PageInfo>) {
        (self.items, Some(self.pagination))
    }
}
