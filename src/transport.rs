use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{MilvusError, Result};
use crate::rest::RestRequest;

/// Sends rendered REST calls to a Milvus endpoint.
///
/// [`HttpTransport`] is the production implementation; tests and embedders
/// can provide their own to intercept or reroute calls.
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Send the request and return the decoded JSON response body.
    async fn send(&self, request: &RestRequest) -> Result<Value>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MilvusError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.endpoint, path)
    }
}

#[async_trait]
impl RestTransport for HttpTransport {
    async fn send(&self, request: &RestRequest) -> Result<Value> {
        let mut req = self
            .client
            .request(request.method.clone(), self.url(&request.path));
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(method = %request.method, path = %request.path, "sending rest request");
        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            tracing::warn!(path = %request.path, %status, "milvus http request failed");
            return Err(MilvusError::Server {
                code: status.as_u16().to_string(),
                reason: text,
            });
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn join_url(endpoint: &str, path: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), path)
}
