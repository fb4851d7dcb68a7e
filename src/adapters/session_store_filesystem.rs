use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::{SessionStore, StateKey};

/// Filesystem-based session store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct FilesystemSessionStore {
    root: PathBuf,
}

impl FilesystemSessionStore {
    /// Create a session store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: StateKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl SessionStore for FilesystemSessionStore {
    fn get(&self, key: StateKey) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: StateKey, value: &str) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path().join("state"));
        assert_eq!(store.get(StateKey::Form).unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path().join("nested/state"));

        store.set(StateKey::Started, "true").unwrap();
        assert_eq!(store.get(StateKey::Started).unwrap().as_deref(), Some("true"));
        assert!(dir.path().join("nested/state/started.json").exists());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemSessionStore::new(dir.path().to_path_buf());

        store.set(StateKey::Results, "[]").unwrap();
        store.set(StateKey::Results, r#"[{"id":"0","prompt":"A"}]"#).unwrap();
        assert_eq!(
            store.get(StateKey::Results).unwrap().as_deref(),
            Some(r#"[{"id":"0","prompt":"A"}]"#)
        );
    }
}
