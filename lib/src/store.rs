use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const STORE_FILE: &str = "bookmarks.json";

/// JSON file holding the most recently received URL list
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Store inside the default data directory
    pub fn open_default() -> Self {
        Self::new(&crate::utils::get_data_dir().join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored list with `urls`
    pub fn save(&self, urls: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec(urls)?)?;
        Ok(())
    }

    /// Stored list, or an empty one when nothing was received yet
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut content = fs::read(&self.path)?;
        let urls: Vec<String> = simd_json::serde::from_slice(&mut content)?;
        Ok(urls)
    }
}
