use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("not a file path: {0:?}")]
    NotAFile(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writer for the directory holding `target`, plus the file name to write.
    pub fn for_target(target: &Path) -> Result<(Self, String), PersistError> {
        let filename = target
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PersistError::NotAFile(target.to_path_buf()))?
            .to_string();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok((Self::new(dir), filename))
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Rename over any previous artifact; readers see old or new, never partial.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}

/// Replace the file at `target` with `content` in one step.
pub fn write_artifact(target: &Path, content: &str) -> Result<PathBuf, PersistError> {
    let (writer, filename) = AtomicFileWriter::for_target(target)?;
    writer.write(&filename, content)
}
