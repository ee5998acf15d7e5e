//! reqwest-backed client that applies request configurations.

use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use super::types::ClientError;
use crate::config::ClientSettings;
use crate::request::{merge_headers, to_header_map, RequestConfig};

pub struct ToolkitClient {
    client: Client,
    base_url: Url,
}

impl ToolkitClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&settings.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` with the merged headers of every strategy in `configs`.
    ///
    /// Nothing is sent if any strategy fails.
    pub async fn get(
        &self,
        path: &str,
        configs: &[&dyn RequestConfig],
    ) -> Result<Response, ClientError> {
        let url = self.base_url.join(path)?;
        let headers = merge_headers(configs)?;

        tracing::debug!(
            %url,
            headers = ?headers.keys().collect::<Vec<_>>(),
            "sending request"
        );

        let resp = self
            .client
            .get(url)
            .headers(to_header_map(&headers)?)
            .send()
            .await?;

        tracing::debug!(status = %resp.status(), "received response");
        Ok(resp)
    }

    /// GET `path` and decode a JSON body, failing on non-2xx statuses.
    pub async fn get_json(
        &self,
        path: &str,
        configs: &[&dyn RequestConfig],
    ) -> Result<serde_json::Value, ClientError> {
        let resp = self.get(path, configs).await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "service returned error status");
            return Err(ClientError::Status { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
