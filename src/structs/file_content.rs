use std::path::PathBuf;

/// A benchmark file read once into lines that keep their terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl FileContent {
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.split_inclusive('\n').map(ToString::to_string).collect(),
        }
    }

    /// The original file text.
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    pub fn label(&self) -> String {
        self.path.display().to_string()
    }
}
