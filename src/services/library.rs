use crate::domain::storage::Storage;
use crate::domain::{contains_platform, Game, GamesList, Platform, SortBy, Status};
use crate::error::Result;
use crate::services::import::{decode_batch, payload_records};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct ListFilter {
    pub platform: Option<Platform>,
    pub status: Option<Status>,
    pub show_hidden: bool,
    /// `None` falls back to the persisted preference.
    pub sort_by: Option<SortBy>,
}

pub struct LibraryService {
    store: Arc<dyn Storage>,
}

impl LibraryService {
    pub fn new(store: Arc<dyn Storage + 'static>) -> Self {
        Self { store }
    }

    fn load_or_default(&self) -> Result<GamesList> {
        Ok(self.store.load_library()?.unwrap_or_default())
    }

    /// Decode an import document and merge the records into the stored
    /// library. Per-record failures are skipped with a warning unless
    /// `strict` is set, in which case the first failure aborts the import.
    pub fn import(&self, doc: &Value, strict: bool) -> Result<ImportReport> {
        let records = payload_records(doc)?;
        let results = decode_batch(records);

        let mut library = self.load_or_default()?;
        let mut report = ImportReport::default();

        for result in results {
            match result {
                Ok(game) => {
                    library.games.push(game);
                    report.imported += 1;
                }
                Err(err) if strict => return Err(err),
                Err(err) => {
                    warn!("Skipping record: {err}");
                    report.skipped += 1;
                }
            }
        }

        self.store.save_library(&library)?;
        info!(
            "Imported {} games ({} skipped), library now holds {}",
            report.imported,
            report.skipped,
            library.games.len()
        );
        Ok(report)
    }

    pub fn list(&self, filter: ListFilter) -> Result<Vec<Game>> {
        let library = self.load_or_default()?;

        let sort_by = match filter.sort_by {
            Some(sort_by) => sort_by,
            None => self.store.load_prefs()?.unwrap_or_default().sort_by,
        };

        let mut games: Vec<Game> = library
            .games
            .into_iter()
            .filter(|game| filter.show_hidden || !game.is_hidden)
            .filter(|game| filter.platform.map_or(true, |p| game.platform == p))
            .filter(|game| filter.status.map_or(true, |s| game.status == s))
            .collect();

        Self::sort_games(&mut games, sort_by);
        Ok(games)
    }

    // All criteria use a stable sort, so equally-ranked games keep their
    // stored order.
    pub fn sort_games(games: &mut [Game], sort_by: SortBy) {
        match sort_by {
            SortBy::Name => games.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::Platform => games.sort_by_key(|game| game.platform),
            SortBy::Status => games.sort_by_key(|game| game.status),
            SortBy::Recency => games.sort_by_key(|game| game.recency),
        }
    }

    /// Which platforms have at least one game in the library.
    pub fn platform_membership(&self) -> Result<Vec<(Platform, bool)>> {
        let library = self.load_or_default()?;
        Ok(Platform::ALL
            .iter()
            .map(|&platform| (platform, contains_platform(&library.games, platform)))
            .collect())
    }

    /// Store icon bytes for a game and record the returned path on it.
    pub fn attach_icon(&self, id: Uuid, bytes: &[u8]) -> Result<String> {
        let mut library = self.load_or_default()?;
        let game = library
            .games
            .iter_mut()
            .find(|game| game.id == id)
            .ok_or(crate::error::LibraryError::GameNotFound(id))?;

        let path = self.store.save_icon(id, bytes)?;
        game.icon = path.clone();
        self.store.save_library(&library)?;

        info!("Stored icon for {id} at {path}");
        Ok(path)
    }

    /// Re-derive recency for every stored game from its current
    /// `last_played` metadata. The only path that touches recency after
    /// import.
    pub fn refresh_recency(&self) -> Result<usize> {
        let mut library = self.load_or_default()?;
        let now = Utc::now();
        for game in &mut library.games {
            game.recompute_recency(now);
        }
        self.store.save_library(&library)?;

        info!("Recomputed recency for {} games", library.games.len());
        Ok(library.games.len())
    }

    pub fn set_sort_preference(&self, sort_by: SortBy) -> Result<()> {
        let mut prefs = self.store.load_prefs()?.unwrap_or_default();
        prefs.sort_by = sort_by;
        self.store.save_prefs(&prefs)
    }
}
