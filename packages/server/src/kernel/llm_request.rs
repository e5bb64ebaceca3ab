// BaseAI adapter over the Anthropic Messages API
//
// Every prompt is sent as a single user turn with a fixed output budget.

use anthropic_client::{AnthropicClient, Message, MessagesRequest};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::BaseAI;

/// Anthropic client bound to a default model and output token budget.
#[derive(Clone)]
pub struct AnthropicAdapter {
    client: AnthropicClient,
    default_model: String,
    max_tokens: u32,
}

impl AnthropicAdapter {
    pub fn new(client: AnthropicClient, default_model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            default_model: default_model.into(),
            max_tokens,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[async_trait]
impl BaseAI for AnthropicAdapter {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_model(prompt, None).await
    }

    async fn complete_with_model(&self, prompt: &str, model: Option<&str>) -> Result<String> {
        let model = model.unwrap_or(&self.default_model);
        let request = MessagesRequest::new(model, self.max_tokens).message(Message::user(prompt));

        let completion = self
            .client
            .messages(request)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        debug!(
            model = %model,
            stop_reason = ?completion.stop_reason,
            output_tokens = completion.usage.as_ref().map(|u| u.output_tokens),
            "LLM completion received"
        );

        Ok(completion.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_implements_base_ai() {
        fn _assert_base_ai<T: BaseAI>() {}

        _assert_base_ai::<AnthropicAdapter>();
    }

    #[test]
    fn test_adapter_keeps_budget() {
        let adapter = AnthropicAdapter::new(
            AnthropicClient::new("sk-ant-test"),
            "claude-3-opus-20240229",
            2000,
        );
        assert_eq!(adapter.max_tokens(), 2000);
    }
}
