use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("{0} is not configured")]
    Configuration(String),
    #[error("Invalid campaign request: {0}")]
    InvalidRequest(String),
    #[error("Rate limit exceeded. Please try again shortly.")]
    RateLimited,
    #[error("AI credits exhausted. Please add credits.")]
    CreditsExhausted,
    #[error("AI gateway error: {status}")]
    Gateway { status: u16 },
    #[error("Request body is too large")]
    PayloadTooLarge,
    /// Transport failure; the detail is for server logs only.
    #[error("AI gateway request failed")]
    Request(String),
    /// Upstream body did not match the expected schema; the detail is for server logs only.
    #[error("Unexpected AI gateway response")]
    MalformedResponse(String),
    #[error("Failed to generate image prompt")]
    EmptyPrompt,
    #[error("No image was generated. Please try again.")]
    NoImageGenerated,
}

impl CampaignError {
    /// Translate a non-success upstream status into the error surfaced to the caller.
    pub fn from_upstream_status(status: u16) -> Self {
        match status {
            429 => CampaignError::RateLimited,
            402 => CampaignError::CreditsExhausted,
            other => CampaignError::Gateway { status: other },
        }
    }

    /// HTTP status the outer handler responds with.
    pub fn status_code(&self) -> u16 {
        match self {
            CampaignError::RateLimited => 429,
            CampaignError::CreditsExhausted => 402,
            CampaignError::InvalidRequest(_) => 400,
            CampaignError::PayloadTooLarge => 413,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CampaignError>;

#[cfg(feature = "server")]
impl actix_web::ResponseError for CampaignError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::from_u16(CampaignError::status_code(self))
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let mut response = actix_web::HttpResponse::build(actix_web::ResponseError::status_code(self));
        crate::server::cors(&mut response);
        response.json(crate::models::ErrorBody::new(self.to_string()))
    }
}
