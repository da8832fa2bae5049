use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::config::app_config::AppConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            client: Client::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            generation_config: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let generation_config = (config.temperature.is_some() || config.max_output_tokens.is_some())
            .then(|| GeminiGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            });

        Self::new(config.api_key.clone())
            .with_model(config.model.clone())
            .with_base_url(config.base_url.clone())
            .with_generation_config(generation_config)
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_generation_config(mut self, generation_config: Option<GeminiGenerationConfig>) -> Self {
        self.generation_config = generation_config;
        self
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: self.generation_config.clone(),
        }
    }

    fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn make_request(&self, url: String, request_body: GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::info!("📦 Request model: {}", self.model);

        self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {

    async fn chat(&self, prompt: String) -> Result<String, AiProviderError> {
        let url = self.generate_content_url();
        let request_body = self.get_request(prompt);

        let response = self.make_request(url, request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response: {}", error_text);

            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let body: GeminiResponse = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            log::info!("🏁 Finish reason: {}", reason);
        }

        body.text()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }
}
