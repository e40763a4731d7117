//! Integration tests for `FireballClient` using wiremock HTTP mocks.

use fireball_api::{ApiError, FireballClient};
use fireball_core::QueryParams;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> FireballClient {
    FireballClient::with_base_url(
        &format!("{}/fireball.api", server.uri()),
        5,
        "fireball-test/0.1",
    )
    .expect("client construction should not fail")
}

fn reference_params() -> QueryParams {
    QueryParams::new()
        .with("date_min", "2017-01-01")
        .with("req_alt", "true")
        .with("energy_min", "0.3")
        .with("sort", "-energy")
}

fn five_row_body() -> serde_json::Value {
    json!({
        "signature": { "source": "NASA/JPL Fireball Data API", "version": "1.0" },
        "count": "5",
        "fields": ["date", "energy", "impact-e", "lat", "lat-dir", "lon", "lon-dir", "alt", "vel"],
        "data": [
            ["2018-12-18 23:48:20", "13000", "173", "56.9", "N", "172.4", "E", "25.6", "32.0"],
            ["2020-12-22 23:23:33", "489.8", "9.5", "31.9", "N", "96.2", "E", "35.5", "13.6"],
            ["2017-12-15 13:14:37", "311.4", "6.4", "60.2", "N", "170.0", "E", "20.0", "31.4"],
            ["2019-06-22 21:25:48", "294.7", "6", "14.9", "N", "66.2", "W", "25.0", "14.9"],
            ["2019-02-18 10:00:43", "195.8", "4.2", "15.5", "S", "25.3", "E", "26", null]
        ]
    })
}

#[tokio::test]
async fn fetch_sends_hyphenated_params_and_parses_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fireball.api"))
        .and(query_param("date-min", "2017-01-01"))
        .and(query_param("req-alt", "true"))
        .and(query_param("energy-min", "0.3"))
        .and(query_param("sort", "-energy"))
        .and(header("user-agent", "fireball-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(five_row_body()))
        .expect(1)
        .mount(&server)
        .await;

    let payload = test_client(&server)
        .fetch(&reference_params())
        .await
        .expect("should parse payload");

    assert_eq!(payload.count.as_deref(), Some("5"));
    assert_eq!(payload.fields().len(), 9);
    assert_eq!(payload.rows().len(), 5);
    assert_eq!(payload.rows()[0][1].as_deref(), Some("13000"));
    assert_eq!(payload.rows()[4][8], None);
    assert!(!payload.is_empty());
}

#[tokio::test]
async fn fetch_returns_empty_payload_when_count_is_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fireball.api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "signature": { "source": "NASA/JPL Fireball Data API", "version": "1.0" },
            "count": "0"
        })))
        .mount(&server)
        .await;

    let payload = test_client(&server)
        .fetch(&reference_params())
        .await
        .expect("empty result is not an error");
    assert!(payload.is_empty());
}

#[tokio::test]
async fn fetch_treats_null_body_as_empty_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fireball.api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let payload = test_client(&server)
        .fetch(&reference_params())
        .await
        .expect("null body is not an error");
    assert!(payload.is_empty());
    assert!(payload.count.is_none());
}

#[tokio::test]
async fn fetch_maps_server_error_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch(&reference_params())
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::HttpStatus { status: 503, .. }),
        "expected HttpStatus(503), got: {err:?}"
    );
    assert!(err.is_transport());
    if let ApiError::HttpStatus { message, .. } = &err {
        assert_eq!(message, "Service Unavailable");
    }
}

#[tokio::test]
async fn fetch_surfaces_api_message_on_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "400",
            "message": "one or more query parameter was not recognized",
            "moreInfo": "https://ssd-api.jpl.nasa.gov/doc/fireball.html"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch(&QueryParams::new().with("bogus_param", "1"))
        .await
        .unwrap_err();
    match err {
        ApiError::HttpStatus { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "one or more query parameter was not recognized");
        }
        other => panic!("expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch(&reference_params())
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::Format { .. }),
        "expected Format, got: {err:?}"
    );
    assert!(!err.is_transport());
}

#[tokio::test]
async fn fetch_rejects_ragged_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": "1",
            "fields": ["date", "energy", "lat"],
            "data": [["2019-01-01 00:00:00", "1.0"]]
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch(&reference_params())
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::Format { ref reason, .. } if reason.contains("row 0")),
        "expected Format for ragged row, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_reports_transport_error_when_server_is_gone() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    drop(server);

    let err = client.fetch(&reference_params()).await.unwrap_err();
    assert!(
        matches!(err, ApiError::Transport(_)),
        "expected Transport, got: {err:?}"
    );
}
