use crate::error::{AuditError, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn sha256(&self) -> String {
        let digest = Sha256::digest(self.content.as_bytes());
        format!("{digest:x}")
    }
}

/// Loads one document, or every document under a directory whose extension
/// is in `extensions`, ordered by path.
pub fn collect_documents(path: &Path, extensions: &[String]) -> Result<Vec<Document>> {
    if !path.exists() {
        return Err(AuditError::InputUnavailable(path.display().to_string()));
    }

    if path.is_file() {
        return Ok(vec![read_document(path)?]);
    }

    let mut files = list_files(path, extensions);
    files.sort();
    if files.is_empty() {
        return Err(AuditError::InputUnavailable(format!(
            "{}: no files with extension {}",
            path.display(),
            extensions.join(", ")
        )));
    }

    files.iter().map(|file| read_document(file)).collect()
}

pub fn read_document(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AuditError::InputUnavailable(format!("{}: {}", path.display(), e)))?;
    Ok(Document {
        path: path.to_path_buf(),
        content: normalize_line_endings(&raw),
    })
}

fn normalize_line_endings(raw: &str) -> String {
    raw.replace("\r\n", "\n")
}

fn list_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| has_extension(path, extensions))
        .collect()
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
