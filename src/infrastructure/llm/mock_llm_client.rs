use crate::application::ports::{LlmClient, LlmClientError};

/// Replies with a canned script regardless of the prompt.
pub struct MockLlmClient {
    reply: String,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(
            r#"[
                {"text": "Hi, I'm Ruby.", "facialExpression": "smile", "animation": "Talking"},
                {"text": "How can I help?", "facialExpression": "default", "animation": "Talking"}
            ]"#,
        )
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, LlmClientError> {
        Ok(self.reply.clone())
    }
}

pub struct FailingLlmClient;

#[async_trait::async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_message: &str,
    ) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed("HTTP 503: upstream down".to_string()))
    }
}
