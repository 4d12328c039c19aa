use crate::{
    error::{CampaignError, Result},
    models::VisualStyle,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignRequest {
    pub brand_name: String,
    pub industry: String,
    pub theme: String,
    pub headline_text: String,
    pub visual_style: String,
    pub brand_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image_mime_type: Option<String>,
}

impl CampaignRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| CampaignError::InvalidRequest(e.to_string()))
    }

    pub fn style(&self) -> VisualStyle {
        VisualStyle::from_key(&self.visual_style)
    }

    /// The uploaded product image, when both the data and its MIME type were sent.
    ///
    /// The data is forwarded as sent; the vision model is the judge of whether it decodes.
    pub fn product_image(&self) -> Option<ProductImage> {
        let (data, mime_type) = match (
            self.product_image_base64.as_deref(),
            self.product_image_mime_type.as_deref(),
        ) {
            (Some(data), Some(mime_type)) if !data.is_empty() && !mime_type.is_empty() => {
                (data, mime_type)
            }
            _ => return None,
        };

        Some(ProductImage {
            mime_type: mime_type.to_string(),
            data_base64: data.to_string(),
            approx_bytes: base64::decoded_len_estimate(data.len()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub mime_type: String,
    pub data_base64: String,
    /// Upper-bound size of the decoded image, for logging.
    pub approx_bytes: usize,
}

impl ProductImage {
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data_base64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResult {
    pub image_url: String,
    pub caption: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
