use std::fmt;

/// Configuration resolved once at startup and handed to the workers.
#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub focus_subject: String,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("focus_subject", &self.focus_subject)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}
