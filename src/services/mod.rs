pub mod ai_providers;
pub mod diff_renderer;
pub mod file_loader;
