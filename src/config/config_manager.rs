use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{APP_NAME, CONFIG_FILE_NAME, GEMINI_BASE_URL_ENV, GEMINI_MODEL_ENV};
use crate::errors::{BenchDiffError, BenchDiffResult};
use crate::structs::cli::Cli;
use crate::structs::config::app_config::AppConfig;
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the explicit config file if given, otherwise the default location
    /// when it exists, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> BenchDiffResult<Config> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> BenchDiffResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| BenchDiffError::ConfigurationFileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| BenchDiffError::ConfigurationFileError {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Layers environment and CLI values over the file config.
    /// Precedence: CLI, then environment, then file, then defaults.
    pub fn resolve<F>(config: Config, cli: &Cli, env: F) -> BenchDiffResult<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());
        let ai = config.ai;

        let api_key = lookup(&ai.api_key_env).ok_or_else(|| {
            BenchDiffError::config_error(
                &format!("{} environment variable is required", ai.api_key_env),
                Some(format!("export {}=<your Gemini API key>", ai.api_key_env).as_str()),
            )
        })?;

        let model = cli.model.clone()
            .or_else(|| lookup(GEMINI_MODEL_ENV))
            .unwrap_or(ai.model);

        let base_url = lookup(GEMINI_BASE_URL_ENV)
            .unwrap_or(ai.base_url)
            .trim_end_matches('/')
            .to_string();

        let focus_subject = cli.focus.clone().unwrap_or(ai.focus_subject);

        Ok(AppConfig {
            api_key,
            model,
            base_url,
            focus_subject,
            temperature: ai.temperature,
            max_output_tokens: ai.max_output_tokens,
        })
    }
}
