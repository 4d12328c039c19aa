use crate::{
    error::{CampaignError, Result},
    gateway::GatewayClient,
    logger,
    models::{CampaignRequest, CampaignResult, ChatMessage, ContentPart, ImageUrl, ProductImage},
    prompts,
};
use uuid::Uuid;

/// Runs vision, prompt engineering, image generation and caption in order for one request.
pub struct CampaignPipeline {
    gateway: GatewayClient,
    request_id: String,
}

impl CampaignPipeline {
    pub fn new(gateway: GatewayClient) -> Self {
        Self {
            gateway,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub async fn generate(&self, request: &CampaignRequest) -> Result<CampaignResult> {
        let product_context = match request.product_image() {
            Some(image) => self.analyze_product(&image).await?,
            None => String::new(),
        };

        let prompt = self.engineer_prompt(request, &product_context).await?;
        let image_url = self
            .generate_image(&request.headline_text, &prompt)
            .await?;

        let caption = match self.write_caption(request).await {
            Ok(caption) => caption,
            Err(e) => {
                log::warn!(
                    "[{}] Caption generation failed, continuing without caption: {}",
                    self.request_id,
                    e
                );
                String::new()
            }
        };

        log::info!("[{}] Campaign generation complete", self.request_id);

        Ok(CampaignResult {
            image_url,
            caption,
            prompt,
        })
    }

    /// Describe the uploaded product. An empty answer is tolerated.
    pub async fn analyze_product(&self, image: &ProductImage) -> Result<String> {
        log::info!(
            "[{}] Step 1: analyzing product image ({}, ~{} bytes)",
            self.request_id,
            image.mime_type,
            image.approx_bytes
        );
        let _timer = logger::timer(format!("[{}] vision", self.request_id));

        let messages = vec![
            ChatMessage::system(prompts::VISION_SYSTEM_PROMPT),
            ChatMessage::user_parts(vec![
                ContentPart::Text {
                    text: prompts::VISION_USER_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                    },
                },
            ]),
        ];

        let context = self
            .gateway
            .vision()
            .complete(messages)
            .await?
            .unwrap_or_default();

        if context.is_empty() {
            log::warn!("[{}] Vision returned no product context", self.request_id);
        } else {
            log::debug!("[{}] Product context: {}", self.request_id, context);
        }
        Ok(context)
    }

    pub async fn engineer_prompt(
        &self,
        request: &CampaignRequest,
        product_context: &str,
    ) -> Result<String> {
        log::info!(
            "[{}] Step 2: engineering image prompt ({} style)",
            self.request_id,
            request.style().as_str()
        );
        let _timer = logger::timer(format!("[{}] prompt engineering", self.request_id));

        let messages = vec![
            ChatMessage::system(prompts::engineer_system_prompt(request)),
            ChatMessage::user(prompts::engineer_user_prompt(request, product_context)),
        ];

        let prompt = self
            .gateway
            .text()
            .complete(messages)
            .await?
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if prompt.is_empty() {
            return Err(CampaignError::EmptyPrompt);
        }

        log::debug!("[{}] Engineered prompt: {}", self.request_id, prompt);
        Ok(prompt)
    }

    pub async fn generate_image(&self, headline: &str, engineered_prompt: &str) -> Result<String> {
        log::info!("[{}] Step 3: generating image", self.request_id);
        let _timer = logger::timer(format!("[{}] image generation", self.request_id));

        let image_url = self
            .gateway
            .image()
            .generate(prompts::image_generation_prompt(headline, engineered_prompt))
            .await?;

        log::info!(
            "[{}] Image generated successfully (url length: {})",
            self.request_id,
            image_url.len()
        );
        Ok(image_url)
    }

    pub async fn write_caption(&self, request: &CampaignRequest) -> Result<String> {
        log::info!("[{}] Step 4: writing social caption", self.request_id);
        let _timer = logger::timer(format!("[{}] caption", self.request_id));

        let messages = vec![
            ChatMessage::system(prompts::CAPTION_SYSTEM_PROMPT),
            ChatMessage::user(prompts::caption_user_prompt(request)),
        ];

        Ok(self
            .gateway
            .text()
            .complete(messages)
            .await?
            .map(|text| text.trim().to_string())
            .unwrap_or_default())
    }
}
