//! reqwest adapter against a stub backend

mod common;

use std::time::Duration;

use common::{StubResponse, StubServer};
use serde_json::json;
use storefront_core::port::{ApiClient, NetworkError};
use storefront_infra_http::ReqwestApiClient;

fn client(server: &StubServer, timeout: Duration) -> ReqwestApiClient {
    ReqwestApiClient::new(&server.base_url(), timeout, "storefront-http-test").unwrap()
}

#[tokio::test]
async fn test_get_decodes_json() {
    let server = StubServer::start(|_: &str, _: &str| {
        StubResponse::json(json!({"data": {"products": []}}))
    })
    .await;

    let body = client(&server, Duration::from_secs(5))
        .get("api/product/getproducts?referenceWebsite=abc")
        .await
        .unwrap();

    assert_eq!(body, json!({"data": {"products": []}}));
    assert_eq!(
        server.requests()[0].path,
        "/api/product/getproducts?referenceWebsite=abc"
    );
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server =
        StubServer::start(|_: &str, _: &str| StubResponse::json(json!({"data": {"cart": {}}})))
            .await;

    client(&server, Duration::from_secs(5))
        .post("api/cart/add", &json!({"productId": "p1", "quantity": 1}))
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, "POST");
    let sent: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(sent, json!({"productId": "p1", "quantity": 1}));
}

#[tokio::test]
async fn test_error_status_is_mapped() {
    let server =
        StubServer::start(|_: &str, _: &str| StubResponse::status(404, "no such route")).await;

    let err = client(&server, Duration::from_secs(5))
        .get("api/unknown")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        NetworkError::Status {
            status: 404,
            body: "no such route".to_string()
        }
    );
}

#[tokio::test]
async fn test_invalid_body_is_decode_error() {
    let server = StubServer::start(|_: &str, _: &str| StubResponse::status(200, "not json")).await;

    let err = client(&server, Duration::from_secs(5))
        .get("api/product/getproducts")
        .await
        .unwrap_err();

    assert!(matches!(err, NetworkError::Decode(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = StubServer::start(|_: &str, _: &str| {
        StubResponse::json(json!({})).delayed(Duration::from_secs(3))
    })
    .await;

    let err = client(&server, Duration::from_millis(200))
        .get("api/product/getproducts")
        .await
        .unwrap_err();

    assert_eq!(err, NetworkError::Timeout(200));
}
