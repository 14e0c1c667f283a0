//! Response decoding.
//!
//! Maps raw JSON bodies into typed results. Each response family
//! declares its shape by implementing [`PageEnvelope`] (paginated
//! endpoints) or [`SingleEnvelope`] (single-object endpoints); the
//! decoder checks for embedded application errors before attempting
//! the typed decode, since error bodies do not match the record shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SupportError};
use crate::models::EoxErrorDetails;
use crate::pagination::{AdvanceRule, PageInfo};

/// A paginated response shape.
///
/// Implementations split a decoded body into the page's items and its
/// optional pagination metadata, and declare the cursor and advance
/// conventions their API family uses.
pub trait PageEnvelope: DeserializeOwned {
    /// The record type the page contains.
    type Item;

    /// Query parameter name carrying the page cursor.
    ///
    /// Families with camelCase request conventions override this with
    /// `"pageIndex"`. Ignored by endpoints that embed the cursor in
    /// the URL path.
    const PAGE_PARAM: &'static str = "page_index";

    /// How the engine decides whether another page exists.
    const ADVANCE: AdvanceRule = AdvanceRule::LastIndex;

    /// Aggregate key under which an embedded `APIError` is nested,
    /// when the family does not report errors at the top level.
    const ERROR_SCOPE: Option<&'static str> = None;

    /// Split the envelope into items and pagination metadata.
    ///
    /// Returning `None` metadata marks the response as single-page.
    fn into_page(self) -> (Vec<Self::Item>, Option<PageInfo>);
}

/// A single-object response shape.
pub trait SingleEnvelope: DeserializeOwned {
    /// The record type the envelope wraps.
    type Item;

    /// Unwrap the top-level aggregate field.
    fn into_inner(self) -> Self::Item;
}

/// Fail if the body carries an embedded application error.
///
/// Two error-shape conventions exist across the API families: a
/// generic `APIError` key (top-level, or nested under `scope`), and
/// the EoX service's top-level `EOXError` key.
fn check_embedded_error(body: &Value, scope: Option<&str>) -> Result<()> {
    let root = match scope {
        Some(key) => body.get(key).unwrap_or(body),
        None => body,
    };

    if let Some(payload) = root.get("APIError") {
        return Err(SupportError::Api(payload.clone()));
    }

    if let Some(payload) = body.get("EOXError") {
        let details: EoxErrorDetails =
            serde_json::from_value(payload.clone()).unwrap_or_else(|_| EoxErrorDetails {
                error_id: None,
                error_description: Some(payload.to_string()),
                error_data_type: None,
                error_data_value: None,
            });
        return Err(SupportError::Eox(details));
    }

    Ok(())
}

/// Decode one page of results.
pub(crate) fn decode_page<E: PageEnvelope>(body: Value) -> Result<(Vec<E::Item>, Option<PageInfo>)> {
    check_embedded_error(&body, E::ERROR_SCOPE)?;
    let envelope: E = serde_json::from_value(body)?;
    Ok(envelope.into_page())
}

/// Decode a single-object response.
pub(crate) fn decode_single<E: SingleEnvelope>(body: Value) -> Result<E::Item> {
    check_embedded_error(&body, None)?;
    let envelope: E = serde_json::from_value(body)?;
    Ok(envelope.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Widgets {
        widgets: Vec<String>,
        pagination_response_record: Option<PageInfo>,
    }

    impl PageEnvelope for Widgets {
        type Item = String;

        fn into_page(self) -> (Vec<String>, Option<PageInfo>) {
            (self.widgets, self.pagination_response_record)
        }
    }

    #[test]
    fn test_decode_page_without_pagination() {
        let body = json!({"widgets": ["a", "b"]});
        let (items, info) = decode_page::<Widgets>(body).unwrap();
        assert_eq!(items, vec!["a", "b"]);
        assert!(info.is_none());
    }

    #[test]
    fn test_decode_page_with_pagination() {
        let body = json!({
            "widgets": ["a"],
            "pagination_response_record": {
                "pageIndex": 1,
                "lastIndex": 3,
                "totalRecords": 25,
                "pageRecords": 10
            }
        });
        let (items, info) = decode_page::<Widgets>(body).unwrap();
        assert_eq!(items.len(), 1);
        let info = info.unwrap();
        assert_eq!(info.page_index, 1);
        assert_eq!(info.last_index, 3);
    }

    #[test]
    fn test_top_level_api_error() {
        let body = json!({"APIError": {"code": "API_EXCEPTION"}});
        match decode_page::<Widgets>(body) {
            Err(SupportError::Api(payload)) => {
                assert_eq!(payload["code"], "API_EXCEPTION");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_top_level_eox_error() {
        let body = json!({
            "EOXError": {
                "ErrorID": "SSA_ERR_026",
                "ErrorDescription": "EOX information does not exist",
                "ErrorDataType": "SERIAL_ID",
                "ErrorDataValue": "not a serial"
            }
        });
        match decode_page::<Widgets>(body) {
            Err(SupportError::Eox(details)) => {
                assert_eq!(details.error_id.as_deref(), Some("SSA_ERR_026"));
                assert_eq!(details.error_data_value.as_deref(), Some("not a serial"));
            }
            other => panic!("expected Eox error, got {other:?}"),
        }
    }

    #[test]
    fn test_scoped_api_error() {
        #[derive(Deserialize)]
        struct Scoped {
            #[serde(rename = "OrderList")]
            order_list: ScopedInner,
        }
        #[derive(Deserialize)]
        struct ScopedInner {
            users: Vec<String>,
        }
        impl PageEnvelope for Scoped {
            type Item = String;
            const ERROR_SCOPE: Option<&'static str> = Some("OrderList");
            fn into_page(self) -> (Vec<String>, Option<PageInfo>) {
                (self.order_list.users, None)
            }
        }

        let body = json!({"OrderList": {"APIError": "no records found"}});
        assert!(matches!(
            decode_page::<Scoped>(body),
            Err(SupportError::Api(_))
        ));
    }

    #[test]
    fn test_missing_required_field_is_decode_error() {
        let body = json!({"gadgets": ["a"]});
        assert!(matches!(
            decode_page::<Widgets>(body),
            Err(SupportError::Decode(_))
        ));
    }
}
