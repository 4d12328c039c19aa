use crate::error::{CampaignError, Result};
use std::env;

pub const API_KEY_VAR: &str = "AI_GATEWAY_API_KEY";
pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_TEXT_MODEL: &str = "google/gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "google/gemini-3-pro-image-preview";
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    /// Environment variable consulted on every `api_key()` call when no explicit key is set.
    pub api_key_env: Option<String>,
    pub url: String,
    pub text_model: String,
    pub vision_model: Option<String>,
    pub image_model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            api_key: None,
            api_key_env: None,
            url: DEFAULT_GATEWAY_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: None,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = env::var("AI_GATEWAY_URL").unwrap_or(defaults.url);
        let text_model = env::var("AI_TEXT_MODEL").unwrap_or(defaults.text_model);
        let vision_model = env::var("AI_VISION_MODEL").ok();
        let image_model = env::var("AI_IMAGE_MODEL").unwrap_or(defaults.image_model);

        GatewayConfig {
            api_key: None,
            api_key_env: Some(API_KEY_VAR.to_string()),
            url,
            text_model,
            vision_model,
            image_model,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_models(mut self, text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        self.text_model = text_model.into();
        self.image_model = image_model.into();
        self
    }

    pub fn with_vision_model(mut self, vision_model: impl Into<String>) -> Self {
        self.vision_model = Some(vision_model.into());
        self
    }

    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.api_key_env = Some(var.into());
        self
    }

    /// The bearer key, or a configuration error when it is not available.
    ///
    /// An explicit key wins. Otherwise the environment is read now, not at
    /// startup, so a key exported after the server started is picked up.
    pub fn api_key(&self) -> Result<String> {
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.is_empty()) {
            return Ok(key.to_string());
        }

        let var = self.api_key_env.as_deref().unwrap_or(API_KEY_VAR);
        self.api_key_env
            .as_deref()
            .and_then(|var| env::var(var).ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CampaignError::Configuration(var.to_string()))
    }

    pub fn vision_model(&self) -> &str {
        self.vision_model.as_deref().unwrap_or(&self.text_model)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: Option<u16>,
    pub max_body_bytes: usize,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub gateway: GatewayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: None,
            log_json: false,
            gateway: GatewayConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|bytes| bytes.parse().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);
        let log_level = env::var("LOG_LEVEL").ok();
        let log_json = env::var("LOG_FORMAT")
            .ok()
            .map_or(false, |val| val.eq_ignore_ascii_case("json"));

        Config {
            host,
            port,
            max_body_bytes,
            log_level,
            log_json,
            gateway: GatewayConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn with_gateway(mut self, config: GatewayConfig) -> Self {
        self.gateway = config;
        self
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(8080)
    }
}
