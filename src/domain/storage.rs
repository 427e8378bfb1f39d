use super::{AppPrefs, GamesList};
use crate::error::Result;
use uuid::Uuid;

pub trait Storage: Send + Sync {
    fn load_library(&self) -> Result<Option<GamesList>>;
    fn save_library(&self, library: &GamesList) -> Result<()>;
    fn load_prefs(&self) -> Result<Option<AppPrefs>>;
    fn save_prefs(&self, prefs: &AppPrefs) -> Result<()>;
    /// Persist raw icon bytes for a game and return the stored path string.
    /// The caller writes that string into the record verbatim.
    fn save_icon(&self, id: Uuid, bytes: &[u8]) -> Result<String>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const ICONS_DIR: &'static str = "icons";

    pub const LIBRARY: &'static str = "games";
    pub const PREFS: &'static str = "prefs";
}
