//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use modhub_api::build_app;
use modhub_core::config::AppConfig;
use modhub_core::traits::{Capability, Component, EnablementConfig};
use modhub_registry::{ComponentCatalog, ModuleRegistry, StaticEnablement};

#[derive(Debug, Default)]
pub struct Post;

impl Component for Post {
    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::new("entity")]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Test application over a temporary module root.
///
/// Installed: `blog` (enabled, hooks `menu` and `routes`), `forum`
/// (disabled), `system` (core, enabled).
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_enablement(
            EnablementConfig::with_core(["system"])
                .with_entry("blog", json!(true))
                .with_entry("forum", json!(false)),
        )
    }

    /// Same module tree under a custom enablement configuration.
    pub fn with_enablement(enablement: EnablementConfig) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for module in ["blog", "forum", "system"] {
            std::fs::create_dir(dir.path().join(module)).expect("Failed to create module");
        }
        let hooks = dir.path().join("blog/hooks");
        std::fs::create_dir(&hooks).expect("Failed to create hooks dir");
        for file in ["hook_routes.rs", "hook_menu.rs"] {
            std::fs::write(hooks.join(file), "").expect("Failed to write hook");
        }

        let catalog = ComponentCatalog::new();
        catalog
            .register_default::<Post>("blog::entity::Post", [Capability::new("entity")])
            .expect("Failed to register component");
        catalog
            .register_default::<Post>("forum::entity::Topic", [Capability::new("entity")])
            .expect("Failed to register component");

        let registry = ModuleRegistry::builder(dir.path())
            .enablement(Arc::new(StaticEnablement::new(enablement)))
            .components(Arc::new(catalog))
            .build();

        let mut config = AppConfig::default();
        config.server.base_url = "https://modhub.test".to_string();
        config.modules.root = dir.path().to_path_buf();

        Self {
            router: build_app(config, Arc::new(registry)),
            dir,
        }
    }

    /// Sends a GET request through the router.
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}
