//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `arogya-server`
//! integration tests.
//!
//! - `TestApp`: spawns a real server on a random port, either around a ready-made
//!   `Assistant` or from a full configuration (CSV files on disk, provider URL pointed at
//!   an `httpmock::MockServer`).

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use arogya::{Assistant, Dataset, GenerationClient};
use arogya_server::{
    config::{AppConfig, GenerationConfig},
    router,
    state::{build_app_state, AppState},
};
use axum::serve;
use reqwest::Client;
use serde_json::Value;
use std::net::SocketAddr;
use tempfile::TempDir;
use tokio::{net::TcpListener, task::JoinHandle};

/// A configuration pointing at files inside `dir` and an unconfigured provider.
pub fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        port: 0,
        health_data_path: dir.path().join("health_data_hindi.csv").display().to_string(),
        medicine_data_path: dir.path().join("medicines_data.csv").display().to_string(),
        pages_dir: dir.path().join("templates").display().to_string(),
        static_dir: dir.path().join("static").display().to_string(),
        generation: GenerationConfig {
            provider: "gemini".to_string(),
            api_url: None,
            api_key: None,
            model_name: "gemini-1.5-flash".to_string(),
        },
    }
}

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub app_state: AppState,
    pub dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns a server around the given tables and generation client.
    pub async fn spawn_with(dataset: Dataset, generation: GenerationClient) -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let config = test_config(&dir);
        let app_state = AppState::new(config, Assistant::new(dataset, generation));
        Self::spawn_with_state(app_state, dir).await
    }

    /// Builds the state through `build_app_state`, exactly as the binary does.
    pub async fn spawn_from_config(config: AppConfig, dir: TempDir) -> Result<Self> {
        let app_state = build_app_state(config).await?;
        Self::spawn_with_state(app_state, dir).await
    }

    async fn spawn_with_state(app_state: AppState, dir: TempDir) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let app_state_for_harness = app_state.clone();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            app_state: app_state_for_harness,
            dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// POSTs a JSON body and returns the `response` field of the reply.
    pub async fn post_for_response(&self, path: &str, body: &Value) -> Result<String> {
        let response = self
            .client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await?;
        anyhow::ensure!(
            response.status().is_success(),
            "POST {path} failed with status {}",
            response.status()
        );
        let body: Value = response.json().await?;
        body["response"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("`response` field missing or not a string: {body}"))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
