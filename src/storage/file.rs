use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{Storage, error::StorageError};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        Ok(FileStorage { dir })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    #[tracing::instrument(name = "load record", skip(self))]
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path)?))
    }

    #[tracing::instrument(name = "save record", skip(self, value))]
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.record_path(key), value)?;

        Ok(())
    }

    #[tracing::instrument(name = "clear record", skip(self))]
    fn clear(&self, key: &str) -> Result<(), StorageError> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }

        Ok(())
    }
}
