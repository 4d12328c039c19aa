pub mod image_client;
pub mod text_client;

#[cfg(test)]
pub(crate) mod mock;

use crate::{
    config::GatewayConfig,
    error::{CampaignError, Result},
    models::{ChatRequest, ChatResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

pub use image_client::ImageClient;
pub use text_client::TextClient;

/// One chat-completions round trip against the AI gateway.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(Client::new(), config.url.clone())
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Gateway request failed: {}", e);
                CampaignError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("Gateway error [{}]: {}", status.as_u16(), error_text);
            return Err(CampaignError::from_upstream_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                log::error!("Failed to read gateway response: {}", e);
                CampaignError::Request(e.to_string())
            })?;

        serde_json::from_str(&body).map_err(|e| {
            log::error!(
                "Could not decode gateway response ({}): {}",
                e,
                body.chars().take(500).collect::<String>()
            );
            CampaignError::MalformedResponse(e.to_string())
        })
    }
}

/// Per-request handle on the gateway: one transport, one resolved key, a client per model role.
#[derive(Clone)]
pub struct GatewayClient {
    text_client: TextClient,
    vision_client: TextClient,
    image_client: ImageClient,
}

impl GatewayClient {
    pub fn new(transport: Arc<dyn ChatTransport>, config: &GatewayConfig) -> Result<Self> {
        let api_key = config.api_key()?;

        Ok(Self {
            text_client: TextClient::new(transport.clone(), api_key.clone(), &config.text_model),
            vision_client: TextClient::new(transport.clone(), api_key.clone(), config.vision_model()),
            image_client: ImageClient::new(transport, api_key, &config.image_model),
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }

    pub fn vision(&self) -> &TextClient {
        &self.vision_client
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
