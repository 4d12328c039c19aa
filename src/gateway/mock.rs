use crate::{
    error::{CampaignError, Result},
    gateway::ChatTransport,
    models::{ChatRequest, ChatResponse, Choice, GeneratedImage, ImageUrl, ResponseMessage},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned gateway replies in order and records every request it sees.
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ChatResponse>>>,
    seen: Mutex<Vec<ChatRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Result<ChatResponse>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn complete(&self, _api_key: &str, request: &ChatRequest) -> Result<ChatResponse> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CampaignError::Request("no scripted reply left".into())))
    }
}

impl ChatResponse {
    pub(crate) fn text(content: impl Into<String>) -> Self {
        Self {
            choices: Some(vec![Choice {
                message: Some(ResponseMessage {
                    content: Some(content.into()),
                    images: None,
                }),
            }]),
        }
    }

    pub(crate) fn image(url: impl Into<String>) -> Self {
        Self {
            choices: Some(vec![Choice {
                message: Some(ResponseMessage {
                    content: None,
                    images: Some(vec![GeneratedImage {
                        image_url: Some(ImageUrl { url: url.into() }),
                    }]),
                }),
            }]),
        }
    }
}
