//! Integration tests for the HTTP API.

mod helpers;

use axum::http::{StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::json;

use helpers::TestApp;
use modhub_core::traits::EnablementConfig;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["modules"], 3);
}

#[tokio::test]
async fn test_list_modules() {
    let app = TestApp::new();
    let response = app.get("/api/modules").await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("module list")
        .iter()
        .map(|m| m["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["blog", "forum", "system"]);

    let blog = &response.body["data"][0];
    assert_eq!(blog["enabled"], true);
    assert_eq!(blog["hooks"], json!(["menu", "routes"]));
    assert_eq!(blog["url"], "https://modhub.test/modules/blog");
    assert_eq!(response.body["data"][1]["enabled"], false);
}

#[tokio::test]
async fn test_list_modules_reports_invalid_entry_in_its_row() {
    let app = TestApp::with_enablement(
        EnablementConfig::with_core(["system"]).with_entry("blog", json!("yes")),
    );
    let response = app.get("/api/modules").await;

    assert_eq!(response.status, StatusCode::OK);
    let blog = &response.body["data"][0];
    assert_eq!(blog["name"], "blog");
    assert_eq!(blog["enabled"], false);
    assert!(blog["error"]
        .as_str()
        .expect("error message")
        .contains("invalid enable value"));

    let system = &response.body["data"][2];
    assert_eq!(system["enabled"], true);
    assert!(system.get("error").is_none());

    let response = app.get("/api/modules/blog").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_get_module() {
    let app = TestApp::new();

    let response = app.get("/api/modules/system").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["enabled"], true);
    assert_eq!(response.body["data"]["hooks"], json!([]));

    let response = app.get("/api/modules/wiki").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_module_hooks() {
    let app = TestApp::new();

    let response = app.get("/api/modules/blog/hooks").await;
    assert_eq!(response.status, StatusCode::OK);
    let hooks = response.body["data"].as_array().expect("hook list");
    assert_eq!(hooks.len(), 2);
    assert_eq!(hooks[0]["hook"], "menu");
    assert_eq!(hooks[1]["callable"], "blog_hook_routes");

    let response = app.get("/api/modules/wiki/hooks").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resolve_qualified() {
    let app = TestApp::new();
    let response = app
        .get("/api/resolve?identifier=blog:Post&kind=entity&capability=entity")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["qualified_name"], "blog::entity::Post");
    assert_eq!(response.body["data"]["resolved"]["form"], "qualified");
    assert_eq!(response.body["data"]["resolved"]["module"], "blog");
}

#[tokio::test]
async fn test_resolve_errors() {
    let app = TestApp::new();

    // A disabled module is reported like a missing one.
    let response = app
        .get("/api/resolve?identifier=forum:Topic&kind=entity")
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .get("/api/resolve?identifier=blog:Comment&kind=entity")
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(
        response.body["message"]
            .as_str()
            .expect("message")
            .contains("blog::entity::Comment")
    );

    let response = app
        .get("/api/resolve?identifier=blog:Post&kind=entity&capability=renderer")
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "CAPABILITY_MISMATCH");
}

#[tokio::test]
async fn test_trailing_slash_redirects() {
    let app = TestApp::new();

    let response = app.get("/api/modules/").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers[header::LOCATION], "/api/modules");

    let response = app.get("/api/resolve/?identifier=blog:Post").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers[header::LOCATION],
        "/api/resolve?identifier=blog:Post"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();
    let response = app.get("/nowhere").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}
