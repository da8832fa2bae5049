use crate::prompts::benchmark_analysis_prompt::{
    BENCHMARK_ANALYSIS_PROMPT, COMPARISON_HEADER, CURRENT_CSV_LABEL, FOCUS_PREFIX, PREVIOUS_CSV_LABEL,
};
use crate::structs::file_content::FileContent;

pub fn generate_prompt(previous: &FileContent, current: &FileContent, focus_subject: &str) -> String {
    generate_prompt_from_text(&previous.text(), &current.text(), focus_subject)
}

/// File text is embedded verbatim, never truncated.
pub fn generate_prompt_from_text(previous: &str, current: &str, focus_subject: &str) -> String {
    format!(
        "\n{BENCHMARK_ANALYSIS_PROMPT}\n{FOCUS_PREFIX} {focus_subject}\n\n{COMPARISON_HEADER}\n\n{PREVIOUS_CSV_LABEL}\n{previous}\n\n{CURRENT_CSV_LABEL}\n{current}\n"
    )
}
