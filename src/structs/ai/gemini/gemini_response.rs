use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_candidate::GeminiCandidate;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of every part of the first candidate, joined in order.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }

        Some(content.parts.iter().map(|part| part.text.as_str()).collect())
    }
}
