use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{AppPrefs, GamesList};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// JSON-on-disk store: the library and prefs live as `<key>.json` under the
/// data directory, icons as raw bytes in a subdirectory.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_dir(&self, dir: &PathBuf) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(data)?;
        fs::write(self.path_for_key(key), content)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for_key(key);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_library(&self) -> Result<Option<GamesList>> {
        self.read_json_file(StorageKeys::LIBRARY)
    }

    fn save_library(&self, library: &GamesList) -> Result<()> {
        self.write_json_file(StorageKeys::LIBRARY, library)
    }

    fn load_prefs(&self) -> Result<Option<AppPrefs>> {
        self.read_json_file(StorageKeys::PREFS)
    }

    fn save_prefs(&self, prefs: &AppPrefs) -> Result<()> {
        self.write_json_file(StorageKeys::PREFS, prefs)
    }

    fn save_icon(&self, id: Uuid, bytes: &[u8]) -> Result<String> {
        let icons_dir = self.data_dir.join(StorageKeys::ICONS_DIR);
        self.ensure_dir(&icons_dir)?;

        let path = icons_dir.join(format!("{}.png", id));
        fs::write(&path, bytes)?;
        Ok(path.to_string_lossy().into_owned())
    }
}
