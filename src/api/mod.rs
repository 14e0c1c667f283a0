//! Per-family endpoint adapters.
//!
//! Each adapter owns a clone of the session client, validates its
//! declared parameter bounds, builds the request path and parameters,
//! and hands off to the pagination engine or the single-object
//! decoder. [`CiscoSupport`] bundles all of them behind one session.

mod bug;
mod case;
mod eox;
mod product;
mod rma;
mod serial;
mod suggestion;

pub use bug::BugApi;
pub use case::CaseApi;
pub use eox::EoxApi;
pub use product::ProductInformationApi;
pub use rma::ServiceOrderReturnApi;
pub use serial::SerialNumberApi;
pub use suggestion::SoftwareSuggestionApi;

use crate::client::SupportClient;
use crate::error::Result;

/// Percent-encode one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-encode identifiers and join them into one comma-separated
/// path segment. The commas stay literal; they are the list separator
/// the API expects.
pub(crate) fn joined_segment(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| segment(v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Entry point bundling every support API behind one session.
///
/// The session authenticates once; all sub-APIs share the token and
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use ciscosupport::CiscoSupport;
///
/// # async fn example() -> ciscosupport::Result<()> {
/// let api = CiscoSupport::from_env().await?;
///
/// let mut bugs = api.bug.get_bug_details(&["CSCvc57217"])?;
/// while let Some(bug) = bugs.try_next().await? {
///     println!("{}: {}", bug.bug_id, bug.headline);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CiscoSupport {
    pub bug: BugApi,
    pub case: CaseApi,
    pub eox: EoxApi,
    pub product_information: ProductInformationApi,
    pub serial_information: SerialNumberApi,
    pub suggestion: SoftwareSuggestionApi,
    pub rma: ServiceOrderReturnApi,
}

impl CiscoSupport {
    /// Establish a session with the given credentials.
    pub async fn connect(client_id: &str, client_secret: &str) -> Result<Self> {
        Ok(Self::with_client(
            SupportClient::connect(client_id, client_secret).await?,
        ))
    }

    /// Establish a session from `CS_API_KEY` / `CS_API_SECRET`.
    pub async fn from_env() -> Result<Self> {
        Ok(Self::with_client(SupportClient::from_env().await?))
    }

    /// Wrap an existing session client.
    pub fn with_client(client: SupportClient) -> Self {
        Self {
            bug: BugApi::new(client.clone()),
            case: CaseApi::new(client.clone()),
            eox: EoxApi::new(client.clone()),
            product_information: ProductInformationApi::new(client.clone()),
            serial_information: SerialNumberApi::new(client.clone()),
            suggestion: SoftwareSuggestionApi::new(client.clone()),
            rma: ServiceOrderReturnApi::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_segment_encodes_each_value() {
        assert_eq!(
            joined_segment(&["WS-C3850-48XS-E", "WS-C3850-48XS-E-RF"]),
            "WS-C3850-48XS-E,WS-C3850-48XS-E-RF"
        );
        assert_eq!(joined_segment(&["a b", "c"]), "a%20b,c");
    }

    #[test]
    fn test_segment_encodes_spaces() {
        assert_eq!(
            segment("Cisco 5500 Series Wireless Controllers"),
            "Cisco%205500%20Series%20Wireless%20Controllers"
        );
    }
}
