//! YAML file cart store

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::store::{CartSnapshot, CartStore, StoreError};

/// Stores the snapshot as YAML in a single file.
///
/// Saves write a temporary file next to the target and rename it into place, so a concurrent
/// reader sees either the previous snapshot or the new one. Two writers racing on the same file
/// resolve as last-write-wins.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    /// Create a store backed by the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }
}

impl CartStore for YamlFileStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_norway::from_str(&contents)?))
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        let directory = self.directory();

        fs::create_dir_all(directory)?;

        let yaml = serde_norway::to_string(snapshot)?;
        let mut file = NamedTempFile::new_in(directory)?;

        file.write_all(yaml.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        Ok(())
    }
}
