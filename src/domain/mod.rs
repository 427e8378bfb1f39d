mod game;
mod prefs;
pub(crate) mod storage;

pub use game::{contains_platform, default_metadata, Game, GamesList, Platform, Recency, Status};
pub use prefs::{AppPrefs, SortBy};
