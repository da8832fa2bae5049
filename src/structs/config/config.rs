use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;

/// On-disk configuration. Every section is optional.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
}
