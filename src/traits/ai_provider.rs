use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A hosted text-generation model: one prompt in, one response out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {

    async fn chat(&self, prompt: String) -> Result<String, AiProviderError>;
}
