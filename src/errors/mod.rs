use std::path::PathBuf;
use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Error)]
pub enum BenchDiffError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{}': {reason}", .path.display())]
    ConfigurationFileError {
        path: PathBuf,
        reason: String,
    },

    // Input file errors
    #[error("Error reading {}: {source}", .path.display())]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Network/API errors
    #[error(transparent)]
    ProviderError(#[from] AiProviderError),

    // Report output errors
    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),
}

impl BenchDiffError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileReadError {
            path: path.into(),
            source,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::Medium,
            Self::FileReadError { .. } | Self::OutputError(_) => ErrorSeverity::High,
            Self::ProviderError(AiProviderError::AuthenticationError(_)) => ErrorSeverity::High,
            Self::ProviderError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { suggestion: Some(suggestion), .. } => {
                format!("{self}\n💡 Suggestion: {suggestion}")
            }
            Self::ConfigurationFileError { .. } => {
                format!("{self}\n💡 Check file permissions and TOML syntax")
            }
            Self::FileReadError { .. } => {
                format!("{self}\n💡 Check that the benchmark file exists and is readable UTF-8 text")
            }
            Self::ProviderError(AiProviderError::AuthenticationError(_)) => {
                format!("{self}\n💡 Check the Gemini API key")
            }
            _ => self.to_string(),
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for benchmark diff operations
pub type BenchDiffResult<T> = Result<T, BenchDiffError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &BenchDiffError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}
