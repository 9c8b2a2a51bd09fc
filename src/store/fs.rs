use super::DocumentStore;
use crate::error::{NewsError, Result};
use crate::model::NewsDocument;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole news document lives in one JSON file.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so a crash mid-save leaves either the old document or the new
/// one, never a truncated mix.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Default location under the XDG data dir.
    pub fn default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("com", "noticiario", "noticiario")?;
        Some(dirs.data_dir().join("noticias.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(NewsError::Write)?;
            }
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<NewsDocument> {
        if !self.path.exists() {
            // First run: nothing saved yet
            return Ok(NewsDocument::default());
        }
        let content = fs::read_to_string(&self.path).map_err(NewsError::Io)?;
        serde_json::from_str(&content).map_err(NewsError::Corrupt)
    }

    fn save(&mut self, doc: &NewsDocument) -> Result<()> {
        self.ensure_parent_dir()?;

        // serde_json leaves non-ASCII unescaped, so the file stays readable
        let content = serde_json::to_string_pretty(doc).map_err(NewsError::Corrupt)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(NewsError::Write)?;
        fs::rename(&tmp_path, &self.path).map_err(NewsError::Write)?;

        Ok(())
    }
}
