use crate::config::constants::{
    DEFAULT_FOCUS_SUBJECT, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_GEMINI_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> String {
        GEMINI_API_KEY_ENV.to_string()
    }

    pub fn default_focus_subject() -> String {
        DEFAULT_FOCUS_SUBJECT.to_string()
    }
}
