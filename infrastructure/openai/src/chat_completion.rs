use std::time::Instant;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{Instrument, Span, debug, info_span};

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::{ChatMessage, CompletionSettings};
use business::domain::completion::services::CompletionService;
use business::domain::configuration::model::TracingSettings;

use crate::client::OpenAIClient;

/// Chat Completions adapter: one POST per call, first choice returned as-is.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
    settings: CompletionSettings,
    tracing: TracingSettings,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient, settings: CompletionSettings, tracing: TracingSettings) -> Self {
        Self {
            client,
            settings,
            tracing,
        }
    }

    fn request_span(&self, message_count: usize) -> Span {
        if self.tracing.enabled {
            info_span!(
                "completion",
                model = %self.settings.model,
                messages = message_count
            )
        } else {
            Span::none()
        }
    }

    fn build_body(&self, messages: &[ChatMessage]) -> Value {
        json!({
            "model": self.settings.model,
            "messages": messages,
            "temperature": self.settings.temperature,
        })
    }

    fn map_request_error(err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::transport(err.to_string())
        }
    }

    /// Prefers the API's `error.message`, falls back to the raw body.
    fn service_message(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|data| data["error"]["message"].as_str().map(|m| m.to_string()))
            .unwrap_or_else(|| body.trim().to_string())
    }

    fn first_choice_text(data: &Value) -> Option<&str> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
    }

    async fn send(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let body = self.build_body(messages);
        let started = Instant::now();

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "completion response received"
        );

        if !status.is_success() {
            let text = response.text().await.map_err(Self::map_request_error)?;
            return Err(CompletionError::service(
                status.as_u16(),
                Self::service_message(&text),
            ));
        }

        let data: Value = response.json().await.map_err(|err| {
            if err.is_decode() {
                CompletionError::MalformedResponse
            } else {
                Self::map_request_error(err)
            }
        })?;

        Self::first_choice_text(&data)
            .map(|text| text.to_string())
            .ok_or(CompletionError::MalformedResponse)
    }
}

#[async_trait]
impl CompletionService for ChatCompletionOpenAI {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let span = self.request_span(messages.len());
        self.send(messages).instrument(span).await
    }
}
