pub mod ai_config;
pub mod app_config;
pub mod config;
