pub const APP_NAME: &str = "ai-benchmark-diff";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_ENV: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL_ENV: &str = "GEMINI_BASE_URL";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_FOCUS_SUBJECT: &str = "EasyValidate";

/// Lines of unchanged context around each diff hunk.
pub const DIFF_CONTEXT_LINES: usize = 3;

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "info";
