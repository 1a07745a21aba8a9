//! HTTP client behavior against a mock API server.

use campus_admin::AppError;
use campus_admin::client::ApiClient;
use campus_admin::config::ApiConfig;
use campus_admin::models::College;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    let config = ApiConfig {
        base_url: format!("{}/api/", server.uri()),
        token: token.map(str::to_string),
        timeout_secs: 5,
    };
    ApiClient::new(&config).unwrap()
}

fn college_json(id: i32, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "code": format!("C{id}"), "is_active": true })
}

#[tokio::test]
async fn test_get_list_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([college_json(1, "Engineering")])))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let colleges: Vec<College> = client.get_list("/colleges/", &[]).await.unwrap();
    assert_eq!(colleges.len(), 1);
    assert_eq!(colleges[0].name, "Engineering");
}

#[tokio::test]
async fn test_get_list_paged_envelopes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "results": [college_json(1, "Engineering"), college_json(2, "Sciences")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/buildings/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let colleges: Vec<College> = client.get_list("/colleges/", &[]).await.unwrap();
    assert_eq!(colleges.len(), 2);

    let empty: Vec<College> = client.get_list("/buildings/", &[]).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/7/"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(college_json(7, "Medicine")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("s3cret"));
    let college: College = client.get("/colleges/7/").await.unwrap();
    assert_eq!(college.id, 7);
}

#[tokio::test]
async fn test_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/404/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/401/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/500/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "database is down" })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let err = client.get::<College>("/colleges/404/").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = client.get::<College>("/colleges/401/").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));

    let err = client.get::<College>("/colleges/500/").await.unwrap_err();
    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database is down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/colleges/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.get::<College>("/colleges/1/").await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    assert!(!client.health_check().await.unwrap());
}

#[tokio::test]
async fn test_unreachable_server_is_connectivity_error() {
    let server = MockServer::start().await;
    let client = client_for(&server, None);
    drop(server);

    let err = client.health_check().await.unwrap_err();
    assert!(err.is_connectivity());
}
