//! Serial number to information API tests against a mock server.

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

fn coverage_summary_json(serial: &str) -> Value {
    json!({
        "id": "1",
        "contract_site_customer_name": "ACME CORP",
        "contract_site_address1": "1 MAIN ST",
        "contract_site_city": "SPRINGFIELD",
        "contract_site_state_province": "IL",
        "contract_site_country": "US",
        "covered_product_line_end_date": "2023-12-31",
        "is_covered": true,
        "sr_no": serial,
        "warranty_end_date": "2018-05-12",
        "warranty_type": "WARR-LTD-LIFE",
        "warranty_type_description": "Limited Lifetime Warranty",
        "service_contract_number": "912512343",
        "service_line_descr": "SNT 8X5XNBD",
        "base_pid_list": [{ "base_pid": "WS-C3850-48XS" }],
        "orderable_pid_list": [{
            "item_description": "Catalyst 3850 48 Port",
            "item_position": "1.0",
            "item_type": "Major",
            "orderable_pid": "WS-C3850-48XS-E",
            "pillar_code": "EN"
        }],
        "parent_sr_no": ""
    })
}

#[tokio::test]
async fn test_get_coverage_status() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/sn2info/v2/coverage/status/serial_numbers/FXS2130Q286"))
        .and(query_param("page_index", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serial_numbers": [{
                "sr_no": "FXS2130Q286",
                "is_covered": true,
                "coverage_end_date": "2023-12-31"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut statuses = api
        .serial_information
        .get_coverage_status(&["FXS2130Q286"])
        .unwrap();

    let status = statuses.try_next().await.unwrap().expect("expected status");
    assert_eq!(status.serial_number, "FXS2130Q286");
    assert!(status.is_covered);
    assert_eq!(status.coverage_end_date, "2023-12-31");

    // No pagination metadata in the response: exactly one fetch.
    assert!(statuses.try_next().await.unwrap().is_none());
    let gets = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == "GET")
        .count();
    assert_eq!(gets, 1);
}

#[tokio::test]
async fn test_get_orderable_pids_joins_serials() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/sn2info/v2/identifiers/orderable/serial_numbers/FOC0717W107,FOC11517LEX,FOC0737Y43K",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serial_numbers": [
                {
                    "sr_no": "FOC0717W107",
                    "orderable_pid_list": [{
                        "orderable_pid": "WS-C2950G-24-EI",
                        "pillar_code": "EN",
                        "pillar_description": "Enterprise Networking"
                    }]
                },
                { "sr_no": "FOC11517LEX", "orderable_pid_list": [] },
                { "sr_no": "FOC0737Y43K", "orderable_pid_list": [] }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pids = api
        .serial_information
        .get_orderable_pids(&["FOC0717W107", "FOC11517LEX", "FOC0737Y43K"])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(pids.len(), 3);
    assert_eq!(pids[0].orderable_pid_list[0].orderable_pid, "WS-C2950G-24-EI");
}

#[tokio::test]
async fn test_coverage_summary_walks_pages() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    let summary_path = "/sn2info/v2/coverage/summary/serial_numbers/FXS2130Q286";

    Mock::given(method("GET"))
        .and(path(summary_path))
        .and(query_param("page_index", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination_response_record": {
                "title": "Coverage Summary",
                "pageIndex": 1,
                "lastIndex": 2,
                "totalRecords": 2,
                "pageRecords": 1,
                "selfLink": "https://api.cisco.com/sn2info/v2"
            },
            "serial_numbers": [coverage_summary_json("FXS2130Q286")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(summary_path))
        .and(query_param("page_index", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination_response_record": {
                "title": "Coverage Summary",
                "pageIndex": 2,
                "lastIndex": 2,
                "totalRecords": 2,
                "pageRecords": 1,
                "selfLink": "https://api.cisco.com/sn2info/v2"
            },
            "serial_numbers": [coverage_summary_json("FXS2130Q287")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summaries = api
        .serial_information
        .get_coverage_summary_by_serial(&["FXS2130Q286"])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].sr_no, "FXS2130Q286");
    assert_eq!(summaries[1].sr_no, "FXS2130Q287");
}

#[tokio::test]
async fn test_get_coverage_owner_status() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    Mock::given(method("GET"))
        .and(path(
            "/sn2info/v2/coverage/owner_status/serial_numbers/FXS2130Q286",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serial_numbers": [{
                "sr_no": "FXS2130Q286",
                "is_covered": true,
                "coverage_end_date": "2023-12-31",
                "sr_no_owner": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let statuses = api
        .serial_information
        .get_coverage_owner_status(&["FXS2130Q286"])
        .unwrap()
        .collect()
        .await
        .unwrap();

    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].is_owner);
}

#[tokio::test]
async fn test_serial_number_bound_is_enforced() {
    let server = MockServer::start().await;
    let api = mock_session(&server).await;

    let serials: Vec<String> = (0..76).map(|i| format!("SN{i}")).collect();
    let refs: Vec<&str> = serials.iter().map(String::as_str).collect();

    match api.serial_information.get_coverage_status(&refs) {
        Err(SupportError::Validation { param, reason }) => {
            assert_eq!(param, "serial_numbers");
            assert!(reason.contains("at most 75"));
        }
        other => panic!("expected Validation error, got {other:?}"),
    }
}
