use similar::{DiffTag, TextDiff};
use crate::config::constants::DIFF_CONTEXT_LINES;
use crate::structs::file_content::FileContent;

pub struct DiffRenderer;

impl DiffRenderer {
    /// Unified diff of the two files, labelled with their paths.
    pub fn render(previous: &FileContent, current: &FileContent) -> String {
        Self::render_lines(&previous.text(), &current.text(), &previous.label(), &current.label())
    }

    /// Returns an empty string when the inputs are identical.
    pub fn render_lines(previous: &str, current: &str, previous_label: &str, current_label: &str) -> String {
        let diff = TextDiff::from_lines(previous, current);

        if diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
            return String::new();
        }

        diff.unified_diff()
            .context_radius(DIFF_CONTEXT_LINES)
            .header(previous_label, current_label)
            .to_string()
    }
}
