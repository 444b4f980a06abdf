//! File-backed cart storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CartStorage, PersistedCart, StorageError};
use crate::cart::Cart;

/// Stores the cart blob at `<dir>/<namespace>.json`.
///
/// Writes go to a sibling temporary file that is then renamed over the blob,
/// so a reader never sees a half-written cart.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create storage for `namespace` inside `dir`. Nothing is touched on disk
    /// until the first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{namespace}.json")),
        }
    }

    /// Path of the blob file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl CartStorage for FileStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(PersistedCart::from_json(&blob)?.into_cart()))
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let blob = PersistedCart::new(cart.clone()).to_json()?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
