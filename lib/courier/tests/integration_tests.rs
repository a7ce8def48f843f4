//! Integration tests for the full pipeline over `HyperTransport`, using wiremock.

use bytes::Bytes;
use courier::{Client, Endpoint, Error, HyperTransport, Method, TransportConfig};
use serde::{Deserialize, Serialize};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct User {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[allow(dead_code)]
    message: String,
}

fn pipeline() -> Client<HyperTransport> {
    Client::new(HyperTransport::new())
}

#[tokio::test]
async fn get_request_decodes_typed_value() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 1,
        name: "Alice".to_string(),
    };

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/users/1")
        .header("Accept", "application/json")
        .build();

    let body: User = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect("response");
    assert_eq!(body, user);
}

#[tokio::test]
async fn post_request_sends_body_byte_for_byte() {
    let mock_server = MockServer::start().await;

    let input = User {
        id: 0,
        name: "Bob".to_string(),
    };
    let output = User {
        id: 42,
        name: "Bob".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&input))
        .respond_with(ResponseTemplate::new(201).set_body_json(&output))
        .mount(&mock_server)
        .await;

    let body = serde_json::to_vec(&input).expect("serialize");
    let endpoint = Endpoint::builder(Method::Post, mock_server.uri())
        .path("/users")
        .header("Content-Type", "application/json")
        .body(Bytes::from(body))
        .build();

    let created: User = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect("response");
    assert_eq!(created, output);
}

#[tokio::test]
async fn query_parameters_reach_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 7,
            "name": "results"
        })))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/search")
        .query("q", "rust")
        .query("page", 1)
        .build();

    let found: User = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect("response");
    assert_eq!(found.id, 7);
}

#[tokio::test]
async fn not_found_is_a_client_error_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/missing")
        .build();

    let err = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected client error");
    assert!(err.is_client_error(), "got: {err}");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body().map(AsRef::as_ref), Some(b"Not Found".as_slice()));
}

#[tokio::test]
async fn server_error_message_carries_decoded_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "database is down"})),
        )
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/broken")
        .build();

    let err = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected server error");
    assert!(err.is_server_error(), "got: {err}");
    assert!(
        err.to_string().contains("database is down"),
        "expected decoded payload in: {err}"
    );
}

#[tokio::test]
async fn out_of_range_status_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weird"))
        .respond_with(ResponseTemplate::new(678))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/weird")
        .build();

    let err = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected unexpected-status error");
    assert!(matches!(err, Error::UnexpectedStatus { status: 678, .. }));
}

#[tokio::test]
async fn malformed_success_body_is_a_decoding_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"one","name":3}"#))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/users/1")
        .build();

    let err = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected decoding error");
    assert!(err.is_decoding(), "got: {err}");
}

#[tokio::test]
async fn put_and_delete_round_trip() {
    let mock_server = MockServer::start().await;

    let user = User {
        id: 1,
        name: "Updated".to_string(),
    };

    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&user))
        .mount(&mock_server)
        .await;

    let client = pipeline();
    let body = serde_json::to_vec(&user).expect("serialize");

    let put = Endpoint::builder(Method::Put, mock_server.uri())
        .path("/users/1")
        .header("Content-Type", "application/json")
        .body(Bytes::from(body))
        .build();
    let updated: User = client.request::<User, ApiError>(&put).await.expect("put");
    assert_eq!(updated, user);

    let delete = Endpoint::builder(Method::Delete, mock_server.uri())
        .path("/users/1")
        .build();
    let removed: User = client
        .request::<User, ApiError>(&delete)
        .await
        .expect("delete");
    assert_eq!(removed, user);
}

#[tokio::test]
async fn timeout_surfaces_as_unknown_with_timeout_cause() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let transport = HyperTransport::with_config(
        TransportConfig::builder()
            .timeout(std::time::Duration::from_millis(100))
            .build(),
    );
    let client = Client::new(transport);

    let endpoint = Endpoint::builder(Method::Get, mock_server.uri())
        .path("/slow")
        .build();

    let err = client
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected timeout");
    match err {
        Error::Unknown(cause) => assert!(cause.is_timeout(), "got: {cause}"),
        other => panic!("expected unknown error, got: {other}"),
    }
}

#[tokio::test]
async fn connection_refusal_surfaces_as_unknown() {
    let endpoint = Endpoint::builder(Method::Get, "http://127.0.0.1:1")
        .path("/anything")
        .build();

    let err = pipeline()
        .request::<User, ApiError>(&endpoint)
        .await
        .expect_err("expected connection error");
    match err {
        Error::Unknown(cause) => assert!(cause.is_connection(), "got: {cause}"),
        other => panic!("expected unknown error, got: {other}"),
    }
}
