//! GraphQL HTTP client
//!
//! A thin client for POSTing GraphQL documents to a single endpoint. The
//! underlying `reqwest::Client` is created once and reused across calls so
//! pagination benefits from connection pooling. The client performs no
//! retries; retry policy, if any, belongs to the caller.

use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the GraphQL client
#[derive(Debug, Clone)]
pub struct GraphqlClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for GraphqlClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("balance-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl GraphqlClientConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// GraphQL client with a persistent connection pool
pub struct GraphqlClient {
    client: Client,
    config: GraphqlClientConfig,
}

impl GraphqlClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::with_config(GraphqlClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: GraphqlClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Execute one GraphQL query against `endpoint` and return the parsed
    /// response body.
    ///
    /// Failures are classified for the caller: transport errors surface as
    /// [`Error::Http`], non-2xx statuses as [`Error::HttpStatus`], unparsable
    /// bodies as [`Error::Decode`], and a GraphQL `errors` array as
    /// [`Error::GraphQl`].
    pub async fn execute(&self, endpoint: &Url, query: &str, variables: Value) -> Result<Value> {
        let payload = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(endpoint.clone())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body_text = response.text().await.map_err(Error::Http)?;
        let body: Value = serde_json::from_str(&body_text)
            .map_err(|e| Error::decode(format!("response body is not valid JSON: {e}")))?;

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            let message = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown error")
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::graphql(message));
        }

        debug!("GraphQL request succeeded: {endpoint}");
        Ok(body)
    }
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
