use crate::ai::client::CompletionClient;
use crate::ai::error::LlmError;
use crate::ai::types::ChatMessage;
use std::collections::HashMap;
use std::sync::Mutex;

pub const MOCK_MODEL: &str = "mock-model";

pub const DEFAULT_MOCK_INSIGHTS: &str = "Based on the climate data analysis:

**Warming Trend Detected**: The data shows a consistent warming trend across most stations since 1950, with an average temperature increase of approximately 1.5°C. This aligns with global climate change patterns.

**Seasonal Variability**: Temperature variability has increased in recent decades, with more extreme readings in both summer and winter months. The standard deviation has grown by approximately 15% since 1980.

**Regional Differences**: Stations in different geographic locations show varying rates of warming. Coastal stations tend to show more moderate changes compared to inland stations.

**Record Years**: The most recent years in the dataset (2015-2019) contain multiple temperature records, with 2019 being the hottest year on record for 7 out of 10 stations analyzed.

**Data Quality**: The dataset shows excellent coverage with over 95% data completeness across all stations, ensuring reliable statistical analysis.";

/// A recorded [`MockCompletionClient::complete`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

/// Offline [`CompletionClient`] returning canned answers.
///
/// The answer is looked up by the content of the last message, falling back to the
/// default response.
#[derive(Debug)]
pub struct MockCompletionClient {
    responses: HashMap<String, String>,
    default_response: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_INSIGHTS)
    }
}

impl MockCompletionClient {
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: default_response.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, message: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses.insert(message.into(), response.into());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn reset(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                system_prompt: system_prompt.to_string(),
                messages: messages.to_vec(),
                temperature,
            });
        }
        let answer = messages
            .last()
            .and_then(|last| self.responses.get(&last.content))
            .unwrap_or(&self.default_response);
        Ok(answer.clone())
    }

    fn model(&self) -> &str {
        MOCK_MODEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_and_recording() {
        let mock = MockCompletionClient::new("fallback").with_response("ping", "pong");

        let answer = mock.complete("sys", &[ChatMessage::user("ping")], 0.2).await.unwrap();
        assert_eq!(answer, "pong");
        let answer = mock.complete("sys", &[ChatMessage::user("other")], 0.2).await.unwrap();
        assert_eq!(answer, "fallback");

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].system_prompt, "sys");
        assert_eq!(calls[1].messages[0].content, "other");

        mock.reset();
        assert!(mock.calls().is_empty());
    }
}
