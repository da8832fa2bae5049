use std::path::PathBuf;
use clap::Parser;

/// Compare two benchmark CSV files and summarize differences using Gemini AI.
#[derive(Parser, Debug)]
#[command(name = "ai-benchmark-diff")]
#[command(version)]
#[command(about = "Compare two benchmark CSV files and summarize differences using Gemini AI", long_about = None)]
pub struct Cli {
    /// Path to previous benchmark CSV file
    pub prev_file: PathBuf,

    /// Path to current benchmark CSV file
    pub current_file: PathBuf,

    /// Show raw diff output before summary
    #[arg(long)]
    pub show_diff: bool,

    /// Gemini model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Subject the analysis should focus on
    #[arg(long)]
    pub focus: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
