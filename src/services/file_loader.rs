use std::fs;
use std::path::Path;
use crate::errors::{BenchDiffError, BenchDiffResult};
use crate::structs::file_content::FileContent;

pub struct FileLoader;

impl FileLoader {
    /// Reads the whole file as UTF-8. Any failure names the path.
    pub fn read(path: &Path) -> BenchDiffResult<FileContent> {
        let text = fs::read_to_string(path).map_err(|e| BenchDiffError::file_error(path, e))?;
        let content = FileContent::from_text(path, &text);

        log::info!("📄 Read {} lines from {}", content.lines.len(), path.display());

        Ok(content)
    }
}
