//! HTTP Chat Backend
//!
//! Implementation of `ChatBackend` over plain HTTP: one JSON POST to the
//! `/chat` endpoint per exchange. No authentication, no retry, no
//! streaming, and no client-side timeout — the request waits for the
//! transport to resolve or fail.

use async_trait::async_trait;

use rapport_core::{
    backend::{ChatBackend, ChatRequest, ChatResponse},
    error::{ChatError, Result},
};

/// HTTP backend configuration
#[derive(Clone, Debug)]
pub struct HttpBackendConfig {
    /// Backend host URL, scheme included
    pub host: String,

    /// Backend port
    pub port: u16,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            host: "http://127.0.0.1".into(),
            port: 8000,
        }
    }
}

impl HttpBackendConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("RAPPORT_BACKEND_HOST")
            .unwrap_or_else(|_| "http://127.0.0.1".into());
        let port = std::env::var("RAPPORT_BACKEND_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        Self { host, port }
    }

    /// Full URL of the chat endpoint
    pub fn endpoint(&self) -> String {
        format!("{}:{}/chat", self.host, self.port)
    }
}

/// HTTP chat backend
pub struct HttpBackend {
    client: reqwest::Client,
    config: HttpBackendConfig,
}

impl HttpBackend {
    /// Create a new backend with custom host/port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::from_config(HttpBackendConfig {
            host: host.into(),
            port,
        })
    }

    /// Create from configuration
    pub fn from_config(config: HttpBackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(HttpBackendConfig::from_env())
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let endpoint = self.config.endpoint();
        tracing::debug!(%endpoint, "posting chat request");

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ChatError::Unreachable(e.to_string())
                } else {
                    ChatError::Backend(e.to_string())
                }
            })?;

        // The body decides success: any reply that parses to a `response`
        // field counts, whatever the status code says.
        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ChatError::MalformedReply(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
