// Mock implementations of the kernel traits for tests
//
// Each mock records its calls so tests can assert on what the pipeline did,
// including that a step was never reached.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BasePageFetcher};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

#[derive(Debug, Clone)]
enum PageResponse {
    Body(String),
    Status(u16, String),
    Transport(String),
}

#[derive(Clone, Default)]
pub struct MockPageFetcher {
    response: Arc<Mutex<Option<PageResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch returns this body.
    pub fn with_page(self, body: &str) -> Self {
        *self.response.lock().unwrap() = Some(PageResponse::Body(body.to_string()));
        self
    }

    /// Every fetch fails as if the server answered with this status.
    pub fn with_status(self, status: u16, reason: &str) -> Self {
        *self.response.lock().unwrap() = Some(PageResponse::Status(status, reason.to_string()));
        self
    }

    /// Every fetch fails before any response arrives.
    pub fn with_transport_error(self, message: &str) -> Self {
        *self.response.lock().unwrap() = Some(PageResponse::Transport(message.to_string()));
        self
    }

    /// URLs fetched so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());

        let response = self.response.lock().unwrap().clone();
        match response {
            Some(PageResponse::Body(body)) => Ok(body),
            Some(PageResponse::Status(status, reason)) => {
                anyhow::bail!("Failed to fetch URL: {} {}", status, reason)
            }
            Some(PageResponse::Transport(message)) => {
                Err(anyhow::anyhow!("{}", message).context("Failed to fetch URL"))
            }
            None => Ok("<html><body><h1>Mock Page</h1></body></html>".to_string()),
        }
    }
}

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a completion call
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub prompt: String,
    pub model: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockAI {
    replies: Arc<Mutex<VecDeque<String>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<CompletionCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply. Replies are returned in order; the last one repeats.
    pub fn with_reply(self, reply: &str) -> Self {
        self.replies.lock().unwrap().push_back(reply.to_string());
        self
    }

    /// Every completion fails with this message.
    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.prompt.clone())
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        self.calls.lock().unwrap().push(CompletionCall {
            prompt: prompt.to_string(),
            model: model.map(str::to_string),
        });

        if let Some(message) = self.failure.lock().unwrap().clone() {
            anyhow::bail!("{}", message);
        }

        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };

        Ok(reply.unwrap_or_else(|| "{}".to_string()))
    }
}
