//! Integration tests for the reqwest HTTP adapter.
//!
//! These run the production client against a local wiremock server and cover:
//! - Request forwarding (method, path, headers, body)
//! - Response mapping (status, headers, body)
//! - Transport error classification

use std::time::Duration;

use etalage::adapters::ReqwestHttpClient;
use etalage::traits::{Headers, HttpClient, HttpError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert(
        "Content-Type".to_string(),
        "application/x-www-form-urlencoded".to_string(),
    );
    headers
}

#[tokio::test]
async fn test_post_forwards_body_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/newsletter"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("naam=Anna&email=anna%40devries.nl"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    let response = client
        .post(
            &format!("{}/v1/newsletter", server.uri()),
            "naam=Anna&email=anna%40devries.nl",
            &form_headers(),
        )
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(response.text().unwrap(), "ok");
}

#[tokio::test]
async fn test_response_carries_status_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .insert_header("x-request-id", "abc123")
                .set_body_string("ongeldig adres"),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    let response = client
        .post(&server.uri(), "email=", &Headers::new())
        .await
        .unwrap();

    assert_eq!(response.status, 422);
    assert!(!response.is_success());
    // reqwest normalizes header names to lowercase.
    assert_eq!(
        response.headers.get("x-request-id"),
        Some(&"abc123".to_string())
    );
    assert_eq!(response.text().unwrap(), "ongeldig adres");
}

#[tokio::test]
async fn test_server_errors_come_back_as_responses() {
    // A 5xx is still a transport success; status handling belongs to the
    // caller, not the adapter.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    let result = client.post(&server.uri(), "", &Headers::new()).await;

    let response = result.unwrap();
    assert_eq!(response.status, 503);
}

#[tokio::test]
async fn test_connection_refused_is_retryable() {
    // Take an address from a live server, then shut it down so the port
    // refuses connections. A builder-made server is not pooled: dropping it
    // actually closes the listener, whereas `MockServer::start()` hands the
    // still-listening server back to wiremock's pool.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    let addr = *server.address();
    drop(server);

    // The listener closes on a background thread; until it does, a connect
    // can be accepted and then reset instead of refused. Wait for the close.
    for _ in 0..200 {
        if std::net::TcpStream::connect_timeout(&addr, Duration::from_millis(25)).is_err() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let client = ReqwestHttpClient::new();
    let err = client.post(&uri, "", &Headers::new()).await.unwrap_err();

    assert!(
        matches!(err, HttpError::ConnectionFailed(_)),
        "expected ConnectionFailed, got {err:?}"
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_url_is_not_retryable() {
    let client = ReqwestHttpClient::new();
    let err = client
        .post("not a url", "", &Headers::new())
        .await
        .unwrap_err();

    assert!(
        matches!(err, HttpError::InvalidUrl(_) | HttpError::Other(_)),
        "expected a non-transport error, got {err:?}"
    );
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_slow_server_hits_the_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(400)))
        .mount(&server)
        .await;

    let quick = reqwest::Client::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = ReqwestHttpClient::with_client(quick);

    let err = client
        .post(&server.uri(), "", &Headers::new())
        .await
        .unwrap_err();

    assert!(matches!(err, HttpError::Timeout(_)), "got {err:?}");
    assert!(err.is_retryable());
}
