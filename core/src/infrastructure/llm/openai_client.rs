use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    llm::{
        ports::LLMClient,
        value_objects::{ChatMessage, CompletionRequest},
    },
};

use super::headers::sanitize_header_value;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone)]
pub struct OpenAIChatClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAIChatClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_chat_api(&self, request: ChatCompletionRequest<'_>) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                sanitize_header_value(&format!("Bearer {}", self.api_key)),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat completion request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat completion response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for OpenAIChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CoreError> {
        tracing::debug!(
            model = %self.model_name,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Sending chat completion"
        );

        self.call_chat_api(ChatCompletionRequest {
            model: &self.model_name,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_chat_completion_shape() {
        let messages = vec![ChatMessage::user("hi")];
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            max_tokens: 100,
            temperature: Some(0.0),
        })
        .unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"][0]["content"], "hi");
    }

    #[test]
    fn temperature_is_omitted_when_unset() {
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o",
            messages: &[],
            max_tokens: 500,
            temperature: None,
        })
        .unwrap();

        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = OpenAIChatClient::new(
            "key".to_string(),
            DEFAULT_MODEL.to_string(),
            "http://localhost:9000/v1/".to_string(),
        );
        assert_eq!(client.base_url, "http://localhost:9000/v1");
    }
}
