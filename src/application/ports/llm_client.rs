use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One chat completion: a system instruction plus the user's message.
    async fn complete(&self, system_prompt: &str, user_message: &str)
    -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
