//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File reader decoding text as UTF-8
pub struct FileReader;

/// Outcome of reading a batch of files
#[derive(Debug, Default)]
pub struct ReadBatch {
    /// Contents of the files that were read
    pub documents: Vec<String>,
    /// Files that could not be read
    pub failed: Vec<PathBuf>,
}

impl FileReader {
    /// Read a file as text
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD, which the
    /// tokenizer treats as a word separator.
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                log::debug!("{} is not valid UTF-8, decoding lossily", path.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Read every file, reporting and skipping the ones that fail
    ///
    /// `on_file` is called once per path, after the attempt.
    pub fn read_all<F>(paths: &[PathBuf], mut on_file: F) -> ReadBatch
    where
        F: FnMut(&Path),
    {
        let mut batch = ReadBatch::default();

        for path in paths {
            match Self::read_text(path) {
                Ok(content) => {
                    log::debug!("Read {} bytes from {}", content.len(), path.display());
                    batch.documents.push(content);
                }
                Err(e) => {
                    log::warn!("{e:#}");
                    batch.failed.push(path.clone());
                }
            }
            on_file(path);
        }

        batch
    }
}
