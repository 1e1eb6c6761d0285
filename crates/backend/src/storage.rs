//! Whole-file JSON persistence for the task collection.
//!
//! The entire collection is serialized as one pretty-printed JSON array
//! under a single path, read wholesale at startup and rewritten wholesale
//! after every successful mutation. Last writer wins; there is no format
//! versioning and no migration path.

use std::path::{Path, PathBuf};

use taskdeck_protocol::Task;

use crate::error::{BackendError, Result};

/// Handle to the on-disk task store file.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Creates a handle for the given path.
    ///
    /// The file itself is not touched until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this handle reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored task collection.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskdeck_backend::TaskFile;
    ///
    /// # fn main() -> taskdeck_backend::Result<()> {
    /// let file = TaskFile::new("tasks.json");
    /// match file.load()? {
    ///     Some(tasks) => println!("loaded {} tasks", tasks.len()),
    ///     None => println!("no stored tasks yet"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(&self) -> Result<Option<Vec<Task>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| BackendError::StorageRead {
                path: self.path.clone(),
                source: e,
            })?;

        let tasks = serde_json::from_str(&content).map_err(|e| BackendError::StorageParse {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(Some(tasks))
    }

    /// Writes the whole task collection, replacing any previous contents.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or the file
    /// cannot be written.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.exists()) {
            std::fs::create_dir_all(parent).map_err(|e| BackendError::StorageWrite {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let content =
            serde_json::to_string_pretty(tasks).map_err(BackendError::StorageSerialize)?;

        std::fs::write(&self.path, content).map_err(|e| BackendError::StorageWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}
