//! Integration tests for the health report endpoint.

mod helpers;

use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use statushub_core::config::health::{HealthConfig, HealthTargetConfig};

async fn healthy_server(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn health_config(targets: Vec<HealthTargetConfig>) -> HealthConfig {
    HealthConfig {
        deadline_ms: 2000,
        targets,
    }
}

fn target(name: &str, url: String, liveness_field: Option<&str>) -> HealthTargetConfig {
    HealthTargetConfig {
        name: name.to_string(),
        url,
        liveness_field: liveness_field.map(str::to_string),
    }
}

#[tokio::test]
async fn test_report_requires_credential() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, Some("wrong")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({"Error": "Unauthorized"}));
}

#[tokio::test]
async fn test_report_with_no_configured_targets_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/v1/health", None, Some(helpers::API_KEY))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_lines_in_declared_order_with_mixed_outcomes() {
    let api = healthy_server(json!({"version": "1.2.3"})).await;
    let website = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&website)
        .await;

    let app = helpers::TestApp::with_health(health_config(vec![
        target("API", format!("{}/health", api.uri()), Some("version")),
        target("Website", format!("{}/health", website.uri()), None),
    ]));

    let response = app
        .request("GET", "/api/v1/health", None, Some(helpers::API_KEY))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let lines: Vec<&str> = response.text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("API: reachable,"));
    assert!(lines[0].contains("version=\"1.2.3\""));
    assert_eq!(lines[1], "Website: unreachable, http status 500");
    assert!(lines[2].starts_with("generated at "));
}

#[tokio::test]
async fn test_report_single_named_target() {
    let api = healthy_server(json!({"status": "ok"})).await;
    let website = healthy_server(json!({})).await;

    let app = helpers::TestApp::with_health(health_config(vec![
        target("API", format!("{}/health", api.uri()), Some("status")),
        target("Website", format!("{}/health", website.uri()), None),
    ]));

    let response = app
        .request(
            "GET",
            "/api/v1/health?target=api",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let lines: Vec<&str> = response.text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("API: reachable,"));
}

#[tokio::test]
async fn test_report_unknown_target_rejected() {
    let api = healthy_server(json!({})).await;

    let app = helpers::TestApp::with_health(health_config(vec![target(
        "API",
        format!("{}/health", api.uri()),
        None,
    )]));

    let response = app
        .request(
            "GET",
            "/api/v1/health?target=database",
            None,
            Some(helpers::API_KEY),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, json!({"Error": "unknown target \"database\""}));
}
