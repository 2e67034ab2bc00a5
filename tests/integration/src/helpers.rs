//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use lawwatch_api::{create_app, create_app_state_with_repositories};
use lawwatch_common::AppConfig;
use lawwatch_db::{InMemoryArticleRepository, InMemoryChangeEventRepository, StoreControl};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{seed_events, seed_snapshots};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    store: Arc<StoreControl>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a test server over the seeded fixture data
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let store = StoreControl::new();
        let change_repo =
            InMemoryChangeEventRepository::with_control(seed_events(), store.clone());
        let article_repo = InMemoryArticleRepository::with_control(seed_snapshots(), store.clone());

        let state = create_app_state_with_repositories(
            config,
            Arc::new(change_repo),
            Arc::new(article_repo),
        )?;
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Switches for simulating store failures
    pub fn store(&self) -> &StoreControl {
        &self.store
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with URL-encoded query parameters
    pub async fn get_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).query(query).send().await?)
    }

    /// Make a GET request with a client deadline
    pub async fn get_with_deadline(&self, path: &str, deadline: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("x-request-timeout-ms", deadline)
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// Rate limits are raised so that page walks are never throttled.
pub fn test_config() -> Result<AppConfig> {
    config_from(&[])
}

/// Create a test configuration with overrides
pub fn config_from(overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let defaults = [
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://localhost/unused"),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
    ];

    AppConfig::from_lookup(|key: &str| {
        overrides
            .iter()
            .chain(defaults.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert an error response and return its code
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Missing error code in {body}"))
}
