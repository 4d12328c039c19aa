use crate::{
    error::{CampaignError, Result},
    gateway::ChatTransport,
    models::{ChatMessage, ChatRequest, Modality},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ImageClient {
    transport: Arc<dyn ChatTransport>,
    api_key: String,
    model: String,
}

impl ImageClient {
    pub fn new(transport: Arc<dyn ChatTransport>, api_key: String, model: &str) -> Self {
        Self {
            transport,
            api_key,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Render `prompt` and return the URL (or data URL) of the first image.
    pub async fn generate(&self, prompt: String) -> Result<String> {
        let request = ChatRequest::new(&self.model, vec![ChatMessage::user(prompt)])
            .with_modalities(vec![Modality::Image, Modality::Text]);

        log::info!("Generating image with model: {}", self.model);

        let response = match self.transport.complete(&self.api_key, &request).await {
            Ok(response) => response,
            Err(CampaignError::MalformedResponse(detail)) => {
                log::error!("Image response did not decode: {}", detail);
                return Err(CampaignError::NoImageGenerated);
            }
            Err(e) => return Err(e),
        };

        match response.first_image_url() {
            Some(url) => Ok(url.to_string()),
            None => {
                let raw = serde_json::to_string(&response).unwrap_or_default();
                log::error!(
                    "Unexpected image response structure: {}",
                    raw.chars().take(500).collect::<String>()
                );
                Err(CampaignError::NoImageGenerated)
            }
        }
    }
}
