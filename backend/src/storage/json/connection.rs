use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// JsonConnection manages the data directory and maps each store key to a
/// JSON file `<key>.json` inside it.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<PathBuf>,
}

impl JsonConnection {
    /// Create a new connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self {
            base_directory: Arc::new(base_directory.as_ref().to_path_buf()),
        }
    }

    /// Create a new connection in the default data directory,
    /// ~/Documents/Growth Journal
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine documents directory"))?;
        let data_dir = documents_dir.join("Growth Journal");
        info!("Using data directory: {}", data_dir.display());
        Ok(Self::new(data_dir))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> PathBuf {
        self.base_directory.as_ref().clone()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Load the value stored under a key.
    ///
    /// An absent file yields `Ok(None)`. Malformed content also yields
    /// `Ok(None)` with a warning, so callers fall back to their empty
    /// default instead of failing.
    pub fn load_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&path)?;
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(
                    "Stored data for key '{}' is unreadable ({}); falling back to defaults",
                    key, e
                );
                Ok(None)
            }
        }
    }

    /// Overwrite the value stored under a key.
    ///
    /// The data directory is created on first save. The value is written to
    /// a temporary sibling and renamed into place so a crash mid-write never
    /// leaves a truncated file behind.
    pub fn save_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        if !self.base_directory.exists() {
            fs::create_dir_all(self.base_directory.as_ref())?;
        }

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let text = serde_json::to_string_pretty(value)?;
        fs::write(&temp_path, text)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Remove the value stored under a key, if any.
    pub fn delete_key(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_key_loads_as_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path());

        let loaded: Option<Vec<i64>> = connection.load_key("missing")?;
        assert!(loaded.is_none());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path());

        connection.save_key("numbers", &vec![3_i64, 1, 2])?;
        let loaded: Option<Vec<i64>> = connection.load_key("numbers")?;
        assert_eq!(loaded, Some(vec![3, 1, 2]));
        Ok(())
    }

    #[test]
    fn malformed_file_loads_as_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path());

        fs::write(temp_dir.path().join("broken.json"), "{not json at all")?;
        let loaded: Option<Vec<i64>> = connection.load_key("broken")?;
        assert!(loaded.is_none());
        Ok(())
    }

    #[test]
    fn delete_key_removes_the_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path());

        connection.save_key("scores", &vec![10_u32])?;
        connection.delete_key("scores")?;

        let loaded: Option<Vec<u32>> = connection.load_key("scores")?;
        assert!(loaded.is_none());
        Ok(())
    }

    #[test]
    fn save_creates_the_data_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("nested").join("data");
        let connection = JsonConnection::new(&nested);

        connection.save_key("settings", &true)?;
        assert!(nested.join("settings.json").exists());
        Ok(())
    }
}
