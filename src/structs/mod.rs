pub mod ai;
pub mod cli;
pub mod config;
pub mod file_content;
