// Integration tests for `SiteManagerClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use unimgr_api::{Error, SiteManagerClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SiteManagerClient) {
    let server = MockServer::start().await;
    let client = SiteManagerClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            { "id": "site-1", "name": "Main", "description": "HQ campus" },
            { "id": "site-2", "name": "Remote", "description": "Branch office" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let sites = client.list_sites().await.unwrap();

    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].id, "site-1");
    assert_eq!(sites[0].name, "Main");
    assert_eq!(sites[1].description, "Branch office");
}

#[tokio::test]
async fn test_get_site() {
    let (server, client) = setup().await;

    let body = json!({
        "data": { "id": "site-1", "name": "Main", "description": "HQ campus" }
    });

    Mock::given(method("GET"))
        .and(path("/sites/site-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let site = client.get_site("site-1").await.unwrap();

    assert_eq!(site.id, "site-1");
    assert_eq!(site.name, "Main");
    assert_eq!(site.description, "HQ campus");
}

#[tokio::test]
async fn test_get_host() {
    let (server, client) = setup().await;

    let body = json!({
        "data": { "id": "h-1", "name": "UDM-Pro", "site_id": "site-1", "status": "online" }
    });

    Mock::given(method("GET"))
        .and(path("/hosts/h-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let host = client.get_host("h-1").await.unwrap();

    assert_eq!(host.id, "h-1");
    assert_eq!(host.site_id, "site-1");
    assert_eq!(host.status, "online");
}

#[tokio::test]
async fn test_list_devices_type_field() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            { "id": "d-1", "name": "Office Switch", "type": "USW-Pro-24",
              "status": "online", "site_id": "site-1" },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].device_type, "USW-Pro-24");
}

#[tokio::test]
async fn test_get_deployment() {
    let (server, client) = setup().await;

    let body = json!({
        "data": { "id": "dep-1", "name": "rollout-q3", "status": "complete" }
    });

    Mock::given(method("GET"))
        .and(path("/deployments/dep-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let deployment = client.get_deployment("dep-1").await.unwrap();

    assert_eq!(deployment.name, "rollout-q3");
    assert_eq!(deployment.status, "complete");
}

#[tokio::test]
async fn test_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/deployments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let deployments = client.list_deployments().await.unwrap();
    assert!(deployments.is_empty());
}

#[tokio::test]
async fn test_base_url_version_prefix_is_kept() {
    let server = MockServer::start().await;
    let base = format!("{}/v1", server.uri());
    let client = SiteManagerClient::from_reqwest(&base, reqwest::Client::new()).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let sites = client.list_sites().await.unwrap();
    assert!(sites.is_empty());
}

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    let client =
        SiteManagerClient::new(&server.uri(), &SecretString::from("test-key-123")).unwrap();

    Mock::given(method("GET"))
        .and(path("/sites"))
        .and(header("X-API-KEY", "test-key-123"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client.list_sites().await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_carries_status_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "not found" })))
        .mount(&server)
        .await;

    let result = client.get_site("missing").await;

    match result {
        Err(Error::Api { status, ref body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"), "body: {body}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }

    let err = client.get_site("missing").await.unwrap_err();
    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.contains("404"), "message: {message}");
    assert!(message.contains("not found"), "message: {message}");
}

#[tokio::test]
async fn test_error_500_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let result = client.list_hosts().await;

    match result {
        Err(Error::Api { status, ref body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_malformed_json() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/sites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client.list_sites().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert_eq!(body, "not json at all");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_missing_envelope() {
    let (server, client) = setup().await;

    // Valid JSON, but no {"data": ...} wrapper.
    Mock::given(method("GET"))
        .and(path("/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "h-1" }])))
        .mount(&server)
        .await;

    let result = client.list_hosts().await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

#[tokio::test]
async fn test_error_connection_refused() {
    // Port 1 should refuse connections.
    let client =
        SiteManagerClient::from_reqwest("http://127.0.0.1:1", reqwest::Client::new()).unwrap();

    let result = client.list_sites().await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
