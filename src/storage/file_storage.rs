use crate::{
    error::{CardboardError, Result},
    storage::{is_valid_key, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one `<key>.json` file per slot
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const CARDBOARD_DIR: &'static str = ".cardboard";
    const EXTENSION: &'static str = "json";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::CARDBOARD_DIR),
        }
    }

    /// Directory holding the slot files
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Creates the storage directory
    pub async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    /// Checks if the storage directory exists
    pub async fn is_initialized(&self) -> bool {
        fs::metadata(&self.root_path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }

    fn item_file(&self, key: &str) -> Result<PathBuf> {
        if !is_valid_key(key) {
            return Err(CardboardError::StorageError(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self
            .root_path
            .join(format!("{}.{}", key, Self::EXTENSION)))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.item_file(key)?;

        match fs::read_to_string(&file_path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.item_file(key)?;
        self.ensure_directory_exists(&self.root_path).await?;

        // Written beside the slot file, then renamed over it
        let tmp_path = file_path.with_extension("json.tmp");
        fs::write(&tmp_path, value).await?;
        fs::rename(&tmp_path, &file_path).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let file_path = self.item_file(key)?;

        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn keys(&self) -> Result<Vec<String>> {
        if !self.root_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.root_path).await?;
        let mut keys: Vec<String> = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some(Self::EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}
