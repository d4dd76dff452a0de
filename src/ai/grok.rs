use crate::ai::client::CompletionClient;
use crate::ai::error::LlmError;
use crate::ai::types::ChatMessage;
use crate::config::Settings;
use bon::bon;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Client for the xAI Grok chat-completions API (OpenAI compatible).
pub struct GrokClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[bon]
impl GrokClient {
    /// Creates a client.
    ///
    /// An empty `api_key` is accepted; every request then fails with
    /// [`LlmError::Authentication`] without touching the network.
    ///
    /// # Errors
    ///
    /// [`LlmError::Connection`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        #[builder(into)] base_url: String,
        #[builder(into)] model: String,
        #[builder(default = Duration::from_secs(60))] timeout: Duration,
    ) -> Result<Self, LlmError> {
        if api_key.is_empty() {
            warn!("Grok API key not configured, set GROK_API_KEY");
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| LlmError::Connection {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }
}

impl GrokClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        GrokClient::builder()
            .api_key(settings.grok_api_key.as_str())
            .base_url(settings.grok_base_url.as_str())
            .model(settings.grok_base_model.as_str())
            .timeout(settings.grok_timeout)
            .build()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn send(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::Authentication(
                "Grok API key not configured".to_string(),
            ));
        }

        let mut all_messages = Vec::with_capacity(messages.len() + 1);
        all_messages.push(ChatMessage::system(system_prompt));
        all_messages.extend_from_slice(messages);
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: all_messages,
            temperature,
            stream: false,
        };

        let url = self.endpoint();
        debug!(
            "Sending chat request to {} (model {}, {} messages, temperature {})",
            url,
            self.model,
            payload.messages.len(),
            temperature
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|source| LlmError::Connection {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(LlmError::Authentication("Invalid Grok API key".to_string()));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if status.is_client_error() || status.is_server_error() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message)
                .unwrap_or(text);
            warn!("Grok API returned {}: {}", status, message);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("no choices returned".to_string()))?;
        debug!("Received Grok response of {} chars", content.len());
        Ok(content)
    }
}

impl CompletionClient for GrokClient {
    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.send(system_prompt, messages, temperature).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
