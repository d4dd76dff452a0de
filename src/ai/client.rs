use crate::ai::error::LlmError;
use crate::ai::types::ChatMessage;
use std::future::Future;

/// A chat-completion backend.
///
/// `messages` holds the conversation after the system prompt; the last entry is the
/// turn to answer.
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;

    /// Model name reported alongside generated content.
    fn model(&self) -> &str;
}
