//! Cisco Support API client library.
//!
//! A Rust library for the Cisco Support API family: bugs, support
//! cases, end-of-life (EoX) records, RMAs, product and serial number
//! lookups, and software suggestions. One session authenticates via
//! an OAuth2 client-credentials grant and drives every sub-API;
//! paginated endpoints are exposed as lazy [`Pages`] traversals that
//! fetch pages on demand.
//!
//! # Quick Start
//!
//! ```no_run
//! use ciscosupport::CiscoSupport;
//!
//! #[tokio::main]
//! async fn main() -> ciscosupport::Result<()> {
//!     // Create a session from CS_API_KEY / CS_API_SECRET
//!     let api = CiscoSupport::from_env().await?;
//!
//!     // Look up a bug by ID
//!     let mut bugs = api.bug.get_bug_details(&["CSCvc57217"])?;
//!     while let Some(bug) = bugs.try_next().await? {
//!         println!("{}: {}", bug.bug_id, bug.headline);
//!     }
//!
//!     // Coverage status for a serial number
//!     let status = api
//!         .serial_information
//!         .get_coverage_status(&["FXS2130Q286"])?
//!         .collect()
//!         .await?;
//!     println!("covered: {}", status[0].is_covered);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`SupportClient`] owns the HTTP connection pool and the OAuth2
//!   token; it is cheaply cloneable and shared by every sub-API.
//! - [`CiscoSupport`] bundles the per-family adapters (`bug`, `case`,
//!   `eox`, ...) behind one session.
//! - [`Pages`] walks multi-page result sets lazily: a page is fetched
//!   only when its items are needed, and the three pagination
//!   conventions used across the family (query-parameter cursors in
//!   two casings, the EoX path cursor, and the returns-by-user
//!   advance rule) are hidden behind it.
//!
//! # Configuration
//!
//! [`CiscoSupport::from_env`] reads:
//!
//! - `CS_API_KEY` (required) - OAuth2 client ID
//! - `CS_API_SECRET` (required) - OAuth2 client secret
//! - `CS_API_URL` (optional) - API origin (defaults to `https://api.cisco.com`)
//! - `CS_TOKEN_URL` (optional) - token endpoint override

mod api;
mod auth;
mod client;
mod error;
mod models;
mod pagination;
mod response;
mod validate;

// Re-export core types
pub use auth::Credentials;
pub use client::SupportClient;
pub use error::{Result, SupportError};
pub use pagination::{AdvanceRule, PageInfo, Pages};
pub use response::{PageEnvelope, SingleEnvelope};

// Re-export the API surface
pub use api::{
    BugApi, CaseApi, CiscoSupport, EoxApi, ProductInformationApi, SerialNumberApi,
    ServiceOrderReturnApi, SoftwareSuggestionApi,
};

// Re-export models
pub use models::*;
