//! Integration test harness for Marigold.
//!
//! Builds the storefront router over an in-memory `SQLite` pool and drives
//! it in-process with `tower::ServiceExt::oneshot` - no network, no running
//! server required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marigold-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::Router;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use marigold_storefront::config::StorefrontConfig;
use marigold_storefront::db::MIGRATOR;
use marigold_storefront::routes;
use marigold_storefront::state::AppState;

/// An in-process storefront instance backed by in-memory `SQLite`.
pub struct TestApp {
    router: Router,
    pub pool: SqlitePool,
    /// Where this instance writes uploaded images.
    pub upload_dir: PathBuf,
}

/// Gives each `TestApp` its own upload directory within the process.
static UPLOAD_DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

impl TestApp {
    /// Spin up a fresh app with an empty, migrated database.
    pub async fn new() -> Self {
        // A single connection keeps every request on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        MIGRATOR.run(&pool).await.expect("migrations failed");

        let upload_dir = std::env::temp_dir().join(format!(
            "marigold-test-uploads-{}-{}",
            std::process::id(),
            UPLOAD_DIR_SEQ.fetch_add(1, Ordering::Relaxed),
        ));

        let config = StorefrontConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost:4000".to_string(),
            jwt_secret: SecretString::from("integration-test-signing-secret-0001"),
            upload_dir: upload_dir.clone(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let state = AppState::new(config, pool.clone());
        let router = Router::new().merge(routes::routes()).with_state(state);

        Self {
            router,
            pool,
            upload_dir,
        }
    }

    /// Send a request and return the status plus raw body text.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("auth-token", token);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// GET a path, parsing the body as JSON.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let (status, body) = self.send(Method::GET, path, None, None).await;
        (status, serde_json::from_str(&body).expect("non-JSON body"))
    }

    /// POST a JSON body, parsing the response as JSON.
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let (status, text) = self.send(Method::POST, path, None, Some(body)).await;
        (status, serde_json::from_str(&text).expect("non-JSON body"))
    }

    /// POST a multipart form with a single file field, parsing the response
    /// as JSON.
    pub async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        contents: &[u8],
    ) -> (StatusCode, Value) {
        let boundary = "marigold-test-boundary";

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(contents);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).expect("non-JSON body"))
    }

    /// POST with an auth token, returning the raw body text.
    pub async fn post_authed(
        &self,
        path: &str,
        token: &str,
        body: Option<Value>,
    ) -> (StatusCode, String) {
        self.send(Method::POST, path, Some(token), body).await
    }

    /// Sign up a user and return their bearer token.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/signup",
                serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {body}");
        assert_eq!(body["success"], true);
        body["token"].as_str().expect("token missing").to_owned()
    }
}
