use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::ChatMessage;

/// Service port for a remote text-completion API.
///
/// One call is one request. Implementations return the text of the first
/// choice unmodified and never retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}
