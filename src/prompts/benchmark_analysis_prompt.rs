pub const BENCHMARK_ANALYSIS_PROMPT: &str = r#"You are a benchmark analysis assistant.

Highlight:
- Regressions (slower)
- Improvements (faster)
- Negligible changes
"#;

pub const FOCUS_PREFIX: &str = "Deep focus on";

pub const COMPARISON_HEADER: &str = "Compare the following two benchmark CSV files:";
pub const PREVIOUS_CSV_LABEL: &str = "Previous CSV:";
pub const CURRENT_CSV_LABEL: &str = "Current CSV:";
