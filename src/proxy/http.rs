//! Pass-through backend against a real HTTP service.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::error::ProxyError;
use super::ServiceProxy;

/// Real service backend: reads become GETs and writes become JSON POSTs
/// against a configured base location. Success and failure reflect the
/// network call's outcome verbatim.
pub struct HttpProxy {
    client: Client,
    base_url: String,
}

impl HttpProxy {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, address: &str) -> String {
        format!("{}/{}", self.base_url, address.trim_start_matches('/'))
    }

    async fn decode(response: reqwest::Response) -> Result<Value, ProxyError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json()
            .await
            .map_err(|err| ProxyError::InvalidBody(err.to_string()))
    }
}

#[async_trait]
impl ServiceProxy for HttpProxy {
    async fn read(&self, address: &str) -> Result<Value, ProxyError> {
        let response = self
            .client
            .get(self.url_for(address))
            .send()
            .await
            .map_err(|source| ProxyError::Connection { source })?;
        Self::decode(response).await
    }

    async fn write(&self, address: &str, body: Value) -> Result<Value, ProxyError> {
        let response = self
            .client
            .post(self.url_for(address))
            .json(&body)
            .send()
            .await
            .map_err(|source| ProxyError::Connection { source })?;
        Self::decode(response).await
    }
}
