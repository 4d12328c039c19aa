use crate::{
    error::Result,
    gateway::ChatTransport,
    models::{ChatMessage, ChatRequest},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct TextClient {
    transport: Arc<dyn ChatTransport>,
    api_key: String,
    model: String,
}

impl TextClient {
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

    /// Send the messages and return the first choice's text, untrimmed.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>> {
        let request = ChatRequest::new(&self.model, messages);

        log::info!("Invoking model: {}", self.model);
        log::debug!(
            "Chat request carries {} message(s), {} chars of text",
            request.messages.len(),
            request
                .messages
                .iter()
                .map(|message| message.text().len())
                .sum::<usize>()
        );

        let response = self.transport.complete(&self.api_key, &request).await?;
        Ok(response.first_text().map(String::from))
    }
}
