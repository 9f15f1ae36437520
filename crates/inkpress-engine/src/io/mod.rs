use crate::models::SourceFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid corpus directory: {0}")]
    InvalidCorpusDir(String),
}

/// Read one content file and return its raw text
pub fn read_file(relative_path: &RelativePath, corpus_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(corpus_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for content files in the corpus directory (recursive, sorted)
pub fn scan_post_files(corpus_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !corpus_root.exists() {
        return Err(IoError::InvalidCorpusDir(
            "corpus directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(corpus_root, &mut files)?;
    files.sort();
    tracing::debug!(files = files.len(), "scanned corpus directory");
    Ok(files)
}

/// Load every content file under the corpus root as a [`SourceFile`]
pub fn load_corpus(corpus_root: &Path) -> Result<Vec<SourceFile>, IoError> {
    let mut sources = Vec::new();
    for path in scan_post_files(corpus_root)? {
        let stripped = path
            .strip_prefix(corpus_root)
            .map_err(|_| IoError::InvalidCorpusDir(path.display().to_string()))?;
        let relative = RelativePathBuf::from_path(stripped)
            .map_err(|_| IoError::InvalidCorpusDir(path.display().to_string()))?;
        let text = fs::read_to_string(&path).map_err(IoError::Io)?;
        sources.push(SourceFile::new(relative, text));
    }
    Ok(sources)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_corpus_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidCorpusDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
