//! EoX API tests against a mock server.
//!
//! The EoX service is the divergent family: the page cursor is a URL
//! path segment, pagination metadata uses PascalCase keys, and
//! application errors arrive as a top-level `EOXError` payload.

use chrono::NaiveDate;
use ciscosupport::{CiscoSupport, Credentials, SupportClient, SupportError};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_session(server: &MockServer) -> CiscoSupport {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;

    let client = SupportClient::with_urls(
        Credentials::new("client-id", "client-secret"),
        &server.uri(),
        &format!("{}/token", server.uri()),
    )
    .await
    .expect("session setup failed");

    CiscoSupport::with_client(client)
}

fn eox_date(value: &str) -> Value {
    json!({ "value": value, "dateFormat": "YYYY-MM-DD" })
}

fn eox_record_json(product_id: &str, input_value: &str) -> Value {
    json!({
        "EOLProductID": product_id,
        "ProductIDDescription": "Catalyst switch",
        "ProductBulletinNumber": "EOL10623",
        "LinkToProductBulletinURL": "https://www.cisco.com/c/en/us/products/eos.html",
        "EOXExternalAnnouncementDate": eox_date("2016-10-31"),
        "EndOfSaleDate": eox_date("2017-10-30"),
        "EndOfSWMaintenanceReleases": eox_date("2018-10-30"),
        "EndOfSecurityVulSupportDate": eox_date("2019-10-30"),
        "EndOfRoutineFailureAnalysisDate": eox_date("2018-10-30"),
        "EndOfServiceContractRenewal": eox_date("2022-01-27"),
        "LastDateOfSupport": eox_date("2022-10-31"),
        "EndOfSvcAttachDate": eox_date("2018-10-30"),
        "UpdatedTimeStamp": eox_date("2016-11-03"),
        "EOXMigrationDetails": {
            "PIDActiveFlag": "Y",
            "MigrationInformation": "Catalyst 9300 Series",
            "MigrationOption": "Enter PID(s)",
            "MigrationProductId": "C9300-48T-E",
            "MigrationProductName": "",
            "MigrationStrategy": "",
            "MigrationProductInfoURL": "https://www.cisco.com/c/en/us/products/switches.html"
        },
        "EOXInputType": "ShowEOXBySerialNumber",
        "EOXInputValue": input_value
    })
}

fn eox_pagination(page_index: u32, last_index: u32, total: u32, page_records: u32) -> Value {
    json!({
        "PageIndex": page_index,
        "LastIndex": last_index,
        "TotalRecords": total,
        "PageRecords": page_records
    })
}

#[tokio::test]
async fn test_get_by_serial_number_embeds_cursor_in_path() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/supporttools/eox/rest/5/EOXBySerialNumber/1/FHK0933224R"))
        .and(query_param("responseencoding", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PaginationResponseRecord": eox_pagination(1, 1, 1, 1),
            "EOXRecord": [eox_record_json("WS-C3560-48PS-S", "FHK0933224R")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = api
        .eox
        .get_by_serial_number(&["FHK0933224R"])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].eol_product_id, "WS-C3560-48PS-S");
    assert_eq!(
        records[0].last_date_of_support.to_date().unwrap(),
        NaiveDate::from_ymd_opt(2022, 10, 31).unwrap()
    );
}

#[tokio::test]
async fn test_get_by_product_ids_advances_the_path_segment() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    let ids = "WS-C3850-48XS-E,WS-C3850-48XS-E-RF";

    Mock::given(method("GET"))
        .and(path(format!(
            "/supporttools/eox/rest/5/EOXByProductID/1/{ids}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PaginationResponseRecord": eox_pagination(1, 2, 2, 1),
            "EOXRecord": [eox_record_json("WS-C3850-48XS-E", "WS-C3850-48XS-E")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/supporttools/eox/rest/5/EOXByProductID/2/{ids}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PaginationResponseRecord": eox_pagination(2, 2, 2, 1),
            "EOXRecord": [eox_record_json("WS-C3850-48XS-E-RF", "WS-C3850-48XS-E-RF")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = api
        .eox
        .get_by_product_ids(&["WS-C3850-48XS-E", "WS-C3850-48XS-E-RF"])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].eol_product_id, "WS-C3850-48XS-E");
    assert_eq!(records[1].eol_product_id, "WS-C3850-48XS-E-RF");
}

#[tokio::test]
async fn test_eox_error_aborts_before_yielding() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/supporttools/eox/rest/5/EOXBySerialNumber/1/not%20a%20serial",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "EOXError": {
                "ErrorID": "SSA_ERR_026",
                "ErrorDescription": "EOX information does not exist for the following serial number(s)",
                "ErrorDataType": "SERIAL_ID",
                "ErrorDataValue": "not a serial"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut records = api.eox.get_by_serial_number(&["not a serial"]).unwrap();

    match records.try_next().await {
        Err(SupportError::Eox(details)) => {
            assert_eq!(details.error_id.as_deref(), Some("SSA_ERR_026"));
            assert_eq!(details.error_data_value.as_deref(), Some("not a serial"));
        }
        other => panic!("expected Eox error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_by_dates_formats_the_range_into_the_path() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/supporttools/eox/rest/5/EOXByDates/1/2022-01-01/2022-01-31",
        ))
        .and(query_param("eoxAttrib", "EO_LAST_SUPPORT_DATE"))
        .and(query_param("responseencoding", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PaginationResponseRecord": eox_pagination(1, 1, 1, 1),
            "EOXRecord": [eox_record_json("WS-C3560-48PS-S", "2022-01-15")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = api
        .eox
        .get_by_dates(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
            &[ciscosupport::EoxAttrib::LastSupportDate],
        )
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_get_by_software_release_numbers_its_inputs() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/supporttools/eox/rest/5/EOXBySWReleaseString/1/"))
        .and(query_param("input1", "12.2,IOS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PaginationResponseRecord": eox_pagination(1, 1, 1, 1),
            "EOXRecord": [eox_record_json("WS-C3560-48PS-S", "12.2,IOS")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = api
        .eox
        .get_by_software_release(&[ciscosupport::SoftwareRelease::new(
            ciscosupport::OsType::Ios,
            "12.2",
        )])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_serial_number_bound_is_enforced() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    let serials: Vec<String> = (0..21).map(|i| format!("SN{i}")).collect();
    let refs: Vec<&str> = serials.iter().map(String::as_str).collect();

    assert!(matches!(
        api.eox.get_by_serial_number(&refs),
        Err(SupportError::Validation { .. })
    ));
}
