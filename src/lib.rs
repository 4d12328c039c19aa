pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod prompts;
#[cfg(feature = "server")]
pub mod server;

pub use config::{Config, GatewayConfig};
pub use error::{CampaignError, Result};
pub use gateway::{ChatTransport, GatewayClient, HttpTransport, ImageClient, TextClient};
pub use models::{CampaignRequest, CampaignResult, VisualStyle};
pub use pipeline::CampaignPipeline;
